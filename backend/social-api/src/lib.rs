pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod security;
pub mod services;
pub mod store;

use std::sync::Arc;

use auth_tokens::TokenIssuer;

use crate::store::{ContentStore, IdentityStore};

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityStore>,
    pub content: Arc<dyn ContentStore>,
    pub tokens: TokenIssuer,
}

impl AppState {
    pub fn new(
        identity: Arc<dyn IdentityStore>,
        content: Arc<dyn ContentStore>,
        tokens: TokenIssuer,
    ) -> Self {
        Self {
            identity,
            content,
            tokens,
        }
    }
}
