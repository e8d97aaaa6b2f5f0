use std::sync::Arc;

use skylane_store::MemoryStore;

use crate::token::TokenAuthenticator;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
    pub tokens: Arc<TokenAuthenticator>,
}

impl AppState {
    pub fn new(store: Arc<MemoryStore>, tokens: TokenAuthenticator) -> Self {
        Self {
            store,
            tokens: Arc::new(tokens),
        }
    }
}
