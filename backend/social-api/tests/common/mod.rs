#![allow(dead_code)]

use std::sync::Arc;

use auth_tokens::TokenIssuer;
use social_api::domain::models::{NewUser, User};
use social_api::store::{IdentityStore, MemoryStore};
use social_api::AppState;

pub fn store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

pub async fn seed_user(store: &Arc<MemoryStore>, username: &str) -> User {
    store
        .create_user(NewUser {
            email: format!("{}@example.com", username),
            username: username.to_string(),
            password_hash: "unused-in-engine-tests".to_string(),
        })
        .await
        .expect("seed user")
}

pub fn test_issuer() -> TokenIssuer {
    TokenIssuer::new("test-secret", 900, 604800)
}

pub fn app_state() -> AppState {
    let store = store();
    AppState::new(store.clone(), store, test_issuer())
}

pub fn state_for(store: &Arc<MemoryStore>) -> AppState {
    AppState::new(store.clone(), store.clone(), test_issuer())
}

/// Mint a Bearer header value for a seeded user, signed with the test secret.
pub fn bearer_for(user: &User) -> String {
    let pair = test_issuer()
        .issue_pair(user.id, &user.username)
        .expect("issue test token");
    format!("Bearer {}", pair.access_token)
}
