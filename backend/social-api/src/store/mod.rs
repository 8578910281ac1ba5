/// Persistence boundary.
///
/// Engines talk to storage through these traits only. Both backings promise
/// the same atomicity contract: edge and like inserts are conflict-guarded so
/// that concurrent identical requests apply at most once, and post deletion
/// cascades comments and likes in one transaction.
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::models::{Comment, CommentView, NewComment, NewPost, NewUser, Post, User};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email already registered")]
    DuplicateEmail,

    #[error("{0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db) = err {
            if db.is_unique_violation() {
                return StoreError::DuplicateEmail;
            }
        }
        StoreError::Unavailable(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// User records and the directed follow-edge set.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn create_user(&self, new: NewUser) -> Result<User>;

    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>>;

    async fn user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Insert the edge (follower -> followee). Returns false when the edge
    /// already exists; at most one concurrent caller observes true.
    async fn insert_follow(&self, follower: Uuid, followee: Uuid) -> Result<bool>;

    /// Remove the edge. Returns false when it was not present.
    async fn delete_follow(&self, follower: Uuid, followee: Uuid) -> Result<bool>;

    async fn is_following(&self, follower: Uuid, followee: Uuid) -> Result<bool>;

    /// Outgoing edge count for a user.
    async fn count_following(&self, user: Uuid) -> Result<i64>;

    /// Incoming edge count, served from the inverse index.
    async fn count_followers(&self, user: Uuid) -> Result<i64>;
}

/// Posts, their like-sets and their comment lists.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn insert_post(&self, new: NewPost) -> Result<Post>;

    async fn post_by_id(&self, id: Uuid) -> Result<Option<Post>>;

    /// Posts belonging to one owner, insertion order. Each call queries
    /// current state; the result is never a frozen snapshot.
    async fn posts_by_owner(&self, owner: Uuid) -> Result<Vec<Post>>;

    /// Delete a post together with its comments and like-set. Returns false
    /// when the post was not present.
    async fn delete_post(&self, id: Uuid) -> Result<bool>;

    /// Add a user to the like-set. Returns false when already a member; at
    /// most one concurrent caller observes true.
    async fn insert_like(&self, post: Uuid, user: Uuid) -> Result<bool>;

    /// Remove a user from the like-set. Returns false when not a member.
    async fn delete_like(&self, post: Uuid, user: Uuid) -> Result<bool>;

    async fn has_liked(&self, post: Uuid, user: Uuid) -> Result<bool>;

    async fn like_count(&self, post: Uuid) -> Result<i64>;

    async fn insert_comment(&self, new: NewComment) -> Result<Comment>;

    /// Comments on a post with author names, creation order.
    async fn comments_for_post(&self, post: Uuid) -> Result<Vec<CommentView>>;

    async fn comment_count(&self, post: Uuid) -> Result<i64>;
}
