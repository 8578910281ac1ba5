/// Current-user profile handler
use actix_web::{web, HttpResponse};
use serde::Serialize;
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::AuthUser;
use crate::services::FollowService;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct UserProfileResponse {
    pub id: Uuid,
    pub username: String,
    pub following: i64,
    pub followers: i64,
}

/// GET /user - the authenticated caller with both edge counts
pub async fn get_user(state: web::Data<AppState>, user: AuthUser) -> Result<HttpResponse> {
    let service = FollowService::new(state.identity.clone());
    let following = service.following_count(user.id).await?;
    let followers = service.followers_count(user.id).await?;

    Ok(HttpResponse::Ok().json(UserProfileResponse {
        id: user.id,
        username: user.username,
        following,
        followers,
    }))
}
