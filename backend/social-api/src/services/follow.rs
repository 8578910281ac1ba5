/// Follow-graph engine.
///
/// Operations check target existence, consult the permission gate, then
/// apply exactly one conflict-guarded store mutation. Duplicate detection is
/// an exact edge lookup in the store, never a count.
use std::sync::Arc;

use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::services::authz::{self, Intent};
use crate::store::IdentityStore;

#[derive(Clone)]
pub struct FollowService {
    identity: Arc<dyn IdentityStore>,
}

impl FollowService {
    pub fn new(identity: Arc<dyn IdentityStore>) -> Self {
        Self { identity }
    }

    /// Insert the edge actor -> target. Returns the target's username for
    /// the success message.
    pub async fn follow(&self, actor: Uuid, target: Uuid) -> Result<String> {
        let user = self
            .identity
            .user_by_id(target)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        authz::authorize(actor, &Intent::Follow { target })?;

        let inserted = self.identity.insert_follow(actor, target).await?;
        if !inserted {
            return Err(ApiError::Conflict(
                "You are already following this user".to_string(),
            ));
        }

        tracing::info!(follower = %actor, followee = %target, "follow edge created");
        Ok(user.username)
    }

    /// Remove the edge actor -> target.
    pub async fn unfollow(&self, actor: Uuid, target: Uuid) -> Result<String> {
        let user = self
            .identity
            .user_by_id(target)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        authz::authorize(actor, &Intent::Unfollow { target })?;

        let removed = self.identity.delete_follow(actor, target).await?;
        if !removed {
            return Err(ApiError::Conflict(
                "You are not following this user".to_string(),
            ));
        }

        tracing::info!(follower = %actor, followee = %target, "follow edge removed");
        Ok(user.username)
    }

    /// Outgoing edge count.
    pub async fn following_count(&self, user: Uuid) -> Result<i64> {
        Ok(self.identity.count_following(user).await?)
    }

    /// Incoming edge count, derived from the inverse index.
    pub async fn followers_count(&self, user: Uuid) -> Result<i64> {
        Ok(self.identity.count_followers(user).await?)
    }
}
