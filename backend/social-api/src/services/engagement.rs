/// Engagement engine: likes and comments against live posts.
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::models::{NewComment, Post, PostView};
use crate::error::{ApiError, Result};
use crate::services::authz::{self, Intent};
use crate::store::ContentStore;

/// Longest accepted comment body
pub const MAX_COMMENT_LEN: usize = 2000;

#[derive(Clone)]
pub struct EngagementService {
    content: Arc<dyn ContentStore>,
}

impl EngagementService {
    pub fn new(content: Arc<dyn ContentStore>) -> Self {
        Self { content }
    }

    async fn live_post(&self, post_id: Uuid) -> Result<Post> {
        self.content
            .post_by_id(post_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))
    }

    /// Add the actor to the post's like-set.
    pub async fn like_post(&self, actor: Uuid, post_id: Uuid) -> Result<()> {
        let post = self.live_post(post_id).await?;

        authz::authorize(actor, &Intent::LikePost { owner: post.user_id })?;

        let inserted = self.content.insert_like(post_id, actor).await?;
        if !inserted {
            return Err(ApiError::Conflict(
                "You have already liked this post".to_string(),
            ));
        }

        tracing::info!(user = %actor, post = %post_id, "post liked");
        Ok(())
    }

    /// Remove the actor from the post's like-set.
    pub async fn unlike_post(&self, actor: Uuid, post_id: Uuid) -> Result<()> {
        let post = self.live_post(post_id).await?;

        authz::authorize(actor, &Intent::UnlikePost { owner: post.user_id })?;

        let removed = self.content.delete_like(post_id, actor).await?;
        if !removed {
            return Err(ApiError::Conflict(
                "You have not liked this post".to_string(),
            ));
        }

        tracing::info!(user = %actor, post = %post_id, "post unliked");
        Ok(())
    }

    /// Append a comment authored by the actor. Returns the comment id.
    pub async fn comment_on_post(&self, actor: Uuid, post_id: Uuid, body: &str) -> Result<Uuid> {
        self.live_post(post_id).await?;

        authz::authorize(actor, &Intent::CommentOnPost)?;

        let body = body.trim();
        if body.is_empty() {
            return Err(ApiError::Validation("Comment must not be empty".to_string()));
        }
        if body.chars().count() > MAX_COMMENT_LEN {
            return Err(ApiError::Validation("Comment is too long".to_string()));
        }

        let comment = self
            .content
            .insert_comment(NewComment {
                post_id,
                user_id: actor,
                comment: body.to_string(),
            })
            .await?;

        tracing::info!(user = %actor, post = %post_id, comment = %comment.id, "comment created");
        Ok(comment.id)
    }

    /// Post with like count, ordered comment views and comment count.
    pub async fn post_summary(&self, post_id: Uuid) -> Result<PostView> {
        let post = self.live_post(post_id).await?;

        let likes = self.content.like_count(post_id).await?;
        let comments = self.content.comments_for_post(post_id).await?;
        let comment_count = self.content.comment_count(post_id).await?;

        Ok(PostView {
            id: post.id,
            title: post.title,
            desc: post.desc,
            created_at: post.created_at,
            likes,
            comments,
            comment_count,
        })
    }
}
