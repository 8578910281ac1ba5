/// Post lifecycle: creation, owner-only deletion with cascade, listing.
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::models::{NewPost, Post, PostView};
use crate::error::{ApiError, Result};
use crate::services::authz::{self, Intent};
use crate::store::ContentStore;

/// Column bound carried over from the original schema
pub const MAX_TITLE_LEN: usize = 100;
/// Longest accepted post body
pub const MAX_DESC_LEN: usize = 5000;

#[derive(Clone)]
pub struct PostService {
    content: Arc<dyn ContentStore>,
}

impl PostService {
    pub fn new(content: Arc<dyn ContentStore>) -> Self {
        Self { content }
    }

    pub async fn create_post(&self, owner: Uuid, title: &str, desc: &str) -> Result<Post> {
        authz::authorize(owner, &Intent::CreatePost)?;

        let title = title.trim();
        let desc = desc.trim();
        if title.is_empty() {
            return Err(ApiError::Validation("Title must not be empty".to_string()));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(ApiError::Validation("Title is too long".to_string()));
        }
        if desc.is_empty() {
            return Err(ApiError::Validation(
                "Description must not be empty".to_string(),
            ));
        }
        if desc.chars().count() > MAX_DESC_LEN {
            return Err(ApiError::Validation("Description is too long".to_string()));
        }

        let post = self
            .content
            .insert_post(NewPost {
                user_id: owner,
                title: title.to_string(),
                desc: desc.to_string(),
            })
            .await?;

        tracing::info!(user = %owner, post = %post.id, "post created");
        Ok(post)
    }

    /// Delete a post and everything it owns. Owner-only.
    pub async fn delete_post(&self, actor: Uuid, post_id: Uuid) -> Result<()> {
        let post = self
            .content
            .post_by_id(post_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?;

        authz::authorize(actor, &Intent::DeletePost { owner: post.user_id })?;

        let deleted = self.content.delete_post(post_id).await?;
        if !deleted {
            // Lost a race with a concurrent delete of the same post
            return Err(ApiError::NotFound("Post not found".to_string()));
        }

        tracing::info!(user = %actor, post = %post_id, "post deleted");
        Ok(())
    }

    /// Owner's posts in insertion order, each with its current engagement
    /// state. Re-querying reflects current state, not a frozen snapshot.
    pub async fn posts_by_owner(&self, owner: Uuid) -> Result<Vec<PostView>> {
        let posts = self.content.posts_by_owner(owner).await?;

        let mut views = Vec::with_capacity(posts.len());
        for post in posts {
            let likes = self.content.like_count(post.id).await?;
            let comments = self.content.comments_for_post(post.id).await?;
            let comment_count = comments.len() as i64;
            views.push(PostView {
                id: post.id,
                title: post.title,
                desc: post.desc,
                created_at: post.created_at,
                likes,
                comments,
                comment_count,
            });
        }

        Ok(views)
    }
}
