use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::pkg::ids::EVENT_ID_RANGE;
use crate::pkg::server::state::AppState;
use crate::prelude::Result;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub id_source: String,
    pub id_range: [u32; 2],
}

#[tracing::instrument(name = "probe", fields(probe = "livez"))]
pub async fn livez() -> Result<()> {
    tracing::debug!("signal mock is live");
    Ok(())
}

/// Reports which id source the service draws from; never consumes a draw.
#[tracing::instrument(name = "probe", skip_all, fields(probe = "healthz"))]
pub async fn healthz(State(state): State<AppState>) -> Result<Json<HealthReport>> {
    let id_source = state.ids.kind();
    tracing::debug!(id_source, "signal mock is healthy");
    Ok(Json(HealthReport {
        status: "ok".to_string(),
        id_source: id_source.to_string(),
        id_range: [*EVENT_ID_RANGE.start(), *EVENT_ID_RANGE.end()],
    }))
}
