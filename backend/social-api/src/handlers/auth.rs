/// Authentication handlers: register, login, token refresh
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::{ApiError, Result};
use crate::services::AuthService;
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 150, message = "Invalid username"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh: String,
}

#[derive(Debug, Serialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
}

pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    payload
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let service = AuthService::new(state.identity.clone(), state.tokens.clone());
    let user = service
        .register(&payload.email, &payload.username, &payload.password)
        .await?;

    Ok(HttpResponse::Ok().json(RegisterResponse {
        id: user.id,
        username: user.username,
        email: user.email,
    }))
}

pub async fn authenticate(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let service = AuthService::new(state.identity.clone(), state.tokens.clone());
    let pair = service.authenticate(&payload.email, &payload.password).await?;

    Ok(HttpResponse::Ok().json(pair))
}

pub async fn refresh_token(
    state: web::Data<AppState>,
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse> {
    let service = AuthService::new(state.identity.clone(), state.tokens.clone());
    let access_token = service.refresh(&payload.refresh)?;

    Ok(HttpResponse::Ok().json(RefreshTokenResponse { access_token }))
}
