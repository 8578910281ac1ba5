/// Like and comment handlers
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::AuthUser;
use crate::services::EngagementService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub comment: String,
}

pub async fn like_post(
    state: web::Data<AppState>,
    user: AuthUser,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = EngagementService::new(state.content.clone());
    service.like_post(user.id, *post_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Post {} liked successfully", post_id),
    })))
}

pub async fn unlike_post(
    state: web::Data<AppState>,
    user: AuthUser,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = EngagementService::new(state.content.clone());
    service.unlike_post(user.id, *post_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Post {} unliked successfully", post_id),
    })))
}

pub async fn comment_on_post(
    state: web::Data<AppState>,
    user: AuthUser,
    post_id: web::Path<Uuid>,
    payload: web::Json<CommentRequest>,
) -> Result<HttpResponse> {
    let service = EngagementService::new(state.content.clone());
    let comment_id = service
        .comment_on_post(user.id, *post_id, &payload.comment)
        .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "comment_id": comment_id,
    })))
}
