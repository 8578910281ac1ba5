/// Permission gate consulted before every mutating operation.
///
/// Stateless and pure: callers resolve the target (and its owner, for
/// content intents) from the stores, then ask the gate. A rejected intent
/// never reaches a store write. Two policies live here: self-action bans
/// and owner-only post deletion.
use uuid::Uuid;

use crate::error::{ApiError, Result};

/// A mutating operation about to be applied on behalf of an authenticated
/// caller.
#[derive(Debug, Clone, Copy)]
pub enum Intent {
    Follow { target: Uuid },
    Unfollow { target: Uuid },
    LikePost { owner: Uuid },
    // Unliking one's own post is banned even though self-like already is;
    // the original service ordered its checks this way and the ban is kept.
    UnlikePost { owner: Uuid },
    DeletePost { owner: Uuid },
    CommentOnPost,
    CreatePost,
}

/// Resolve an intent to permitted (`Ok`) or a terminal rejection.
pub fn authorize(actor: Uuid, intent: &Intent) -> Result<()> {
    match intent {
        Intent::Follow { target } if *target == actor => Err(ApiError::Validation(
            "You cannot follow yourself".to_string(),
        )),
        Intent::Unfollow { target } if *target == actor => Err(ApiError::Validation(
            "You cannot unfollow yourself".to_string(),
        )),
        Intent::LikePost { owner } if *owner == actor => Err(ApiError::Validation(
            "You cannot like your own post".to_string(),
        )),
        Intent::UnlikePost { owner } if *owner == actor => Err(ApiError::Validation(
            "You cannot unlike your own post".to_string(),
        )),
        Intent::DeletePost { owner } if *owner != actor => Err(ApiError::Forbidden(
            "You cannot delete this post".to_string(),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_follow_rejected() {
        let actor = Uuid::new_v4();
        assert!(authorize(actor, &Intent::Follow { target: actor }).is_err());
        assert!(authorize(actor, &Intent::Unfollow { target: actor }).is_err());
    }

    #[test]
    fn test_follow_other_permitted() {
        let actor = Uuid::new_v4();
        let other = Uuid::new_v4();
        assert!(authorize(actor, &Intent::Follow { target: other }).is_ok());
    }

    #[test]
    fn test_self_like_and_unlike_rejected() {
        let actor = Uuid::new_v4();
        assert!(authorize(actor, &Intent::LikePost { owner: actor }).is_err());
        assert!(authorize(actor, &Intent::UnlikePost { owner: actor }).is_err());
    }

    #[test]
    fn test_delete_requires_ownership() {
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        assert!(authorize(owner, &Intent::DeletePost { owner }).is_ok());
        assert!(matches!(
            authorize(stranger, &Intent::DeletePost { owner }),
            Err(ApiError::Forbidden(_))
        ));
    }

    #[test]
    fn test_comment_and_create_always_permitted() {
        let actor = Uuid::new_v4();
        assert!(authorize(actor, &Intent::CommentOnPost).is_ok());
        assert!(authorize(actor, &Intent::CreatePost).is_ok());
    }
}
