//! Shared application state for all routes.

use crate::service::ContentService;
use crate::store::ContentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub content: ContentService,
}

impl AppState {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self {
            content: ContentService::new(store),
        }
    }
}
