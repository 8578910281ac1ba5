/// Post handlers - HTTP endpoints for post lifecycle
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ApiError, Result};
use crate::middleware::AuthUser;
use crate::services::{EngagementService, PostService};
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 100, message = "Invalid title"))]
    pub title: String,
    #[validate(length(min = 1, max = 5000, message = "Invalid description"))]
    pub desc: String,
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    user: AuthUser,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    payload
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let service = PostService::new(state.content.clone());
    let post = service.create_post(user.id, &payload.title, &payload.desc).await?;

    Ok(HttpResponse::Created().json(post))
}

/// GET /posts/{id} - summary with likes and comments
pub async fn get_post(
    state: web::Data<AppState>,
    _user: AuthUser,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = EngagementService::new(state.content.clone());
    let summary = service.post_summary(*post_id).await?;

    Ok(HttpResponse::Ok().json(summary))
}

/// DELETE /posts/{id} - owner-only, cascades comments and likes
pub async fn delete_post(
    state: web::Data<AppState>,
    user: AuthUser,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = PostService::new(state.content.clone());
    service.delete_post(user.id, *post_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Post {} deleted successfully", post_id),
    })))
}

/// GET /all_posts - the caller's posts in insertion order
pub async fn get_own_posts(state: web::Data<AppState>, user: AuthUser) -> Result<HttpResponse> {
    let service = PostService::new(state.content.clone());
    let posts = service.posts_by_owner(user.id).await?;

    Ok(HttpResponse::Ok().json(posts))
}
