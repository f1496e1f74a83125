use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::pkg::ids::next_event_id;
use crate::pkg::server::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct SignalResponse {
    pub ceh_event_id: u32,
}

/// Issues a fresh `ceh_event_id`. The request body is never read.
#[tracing::instrument(skip_all)]
pub async fn write_signal(State(state): State<AppState>) -> Json<SignalResponse> {
    let ceh_event_id = next_event_id(state.ids.as_ref());
    tracing::info!(ceh_event_id, "signal written");
    Json(SignalResponse { ceh_event_id })
}
