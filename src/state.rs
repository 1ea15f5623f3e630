use std::sync::Arc;

use crate::store::ProductStore;

/// Shared context handed to every handler and middleware.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: ProductStore,
    pub api_token: Arc<str>,
}

impl AppState {
    pub fn new(store: ProductStore, api_token: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            api_token: api_token.into(),
        }
    }
}
