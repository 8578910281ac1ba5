/// Registration, login and token refresh.
use std::sync::Arc;

use auth_tokens::{TokenIssuer, TokenPair};

use crate::domain::models::{NewUser, User};
use crate::error::{ApiError, Result};
use crate::security::password;
use crate::store::IdentityStore;

pub struct AuthService {
    identity: Arc<dyn IdentityStore>,
    tokens: TokenIssuer,
}

impl AuthService {
    pub fn new(identity: Arc<dyn IdentityStore>, tokens: TokenIssuer) -> Self {
        Self { identity, tokens }
    }

    pub async fn register(&self, email: &str, username: &str, raw_password: &str) -> Result<User> {
        let password_hash = password::hash_password(raw_password)?;

        let user = self
            .identity
            .create_user(NewUser {
                email: email.to_string(),
                username: username.to_string(),
                password_hash,
            })
            .await?;

        tracing::info!(user = %user.id, "user registered");
        Ok(user)
    }

    /// Verify credentials and issue an access/refresh pair. Unknown email
    /// and wrong password answer identically.
    pub async fn authenticate(&self, email: &str, raw_password: &str) -> Result<TokenPair> {
        let user = self
            .identity
            .user_by_email(email)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Invalid email or password".to_string()))?;

        password::verify_password(raw_password, &user.password_hash)?;

        let pair = self.tokens.issue_pair(user.id, &user.username)?;

        tracing::info!(user = %user.id, "user authenticated");
        Ok(pair)
    }

    /// Exchange a refresh token for a new access token.
    pub fn refresh(&self, refresh_token: &str) -> Result<String> {
        Ok(self.tokens.refresh(refresh_token)?)
    }
}
