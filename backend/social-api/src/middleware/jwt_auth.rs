/// JWT authentication extractor.
///
/// Pulls the Bearer access token from the Authorization header and resolves
/// it to the caller identity before the handler runs. Handlers receive the
/// identity as an explicit argument; there is no ambient current-user state.
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use auth_tokens::TokenKind;
use std::future::{ready, Ready};
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

/// Authenticated caller identity extracted from the access token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub username: String,
}

impl FromRequest for AuthUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract(req))
    }
}

fn extract(req: &HttpRequest) -> Result<AuthUser, ApiError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| ApiError::Internal("Application state missing".to_string()))?;

    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized("Invalid authorization header".to_string()))?;

    let claims = state.tokens.verify(token, TokenKind::Access)?;
    let id = claims
        .user_id()
        .map_err(|_| ApiError::Unauthorized("Invalid token".to_string()))?;

    Ok(AuthUser {
        id,
        username: claims.username,
    })
}
