use std::sync::Arc;

use crate::application::services::EntryService;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub entry_service: Arc<EntryService>,
}

impl AppState {
    pub fn new(entry_service: Arc<EntryService>) -> Self {
        Self { entry_service }
    }
}
