/// Follow-graph handlers
use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::AuthUser;
use crate::services::FollowService;
use crate::AppState;

pub async fn follow_user(
    state: web::Data<AppState>,
    user: AuthUser,
    target: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = FollowService::new(state.identity.clone());
    let username = service.follow(user.id, *target).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("User {} followed successfully", username),
    })))
}

pub async fn unfollow_user(
    state: web::Data<AppState>,
    user: AuthUser,
    target: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = FollowService::new(state.identity.clone());
    let username = service.unfollow(user.id, *target).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("User {} unfollowed successfully", username),
    })))
}
