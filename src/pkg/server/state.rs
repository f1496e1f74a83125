use std::sync::Arc;

use crate::pkg::conf::Settings;
use crate::pkg::ids::{IdSource, source_for};

#[derive(Clone)]
pub struct AppState {
    pub ids: Arc<dyn IdSource>,
}

impl AppState {
    pub fn new(settings: &Settings) -> AppState {
        AppState::with_ids(source_for(settings.id_seed))
    }

    pub fn with_ids(ids: Arc<dyn IdSource>) -> AppState {
        AppState { ids }
    }
}
