use axum::{
    Router,
    routing::{get, post},
};

use super::{
    handlers::{
        fallback::not_found,
        probes::{healthz, livez},
        signal::write_signal,
    },
    state::AppState,
};
use crate::pkg::conf::{HEALTHZ_PATH, LIVEZ_PATH};

/// The full route table; anything it does not list falls through to a 404.
pub fn build_routes(state: AppState, write_signal_path: &str) -> Router {
    Router::new()
        .route(write_signal_path, post(write_signal))
        .route(LIVEZ_PATH, get(livez))
        .route(HEALTHZ_PATH, get(healthz))
        .fallback(not_found)
        .with_state(state)
}
