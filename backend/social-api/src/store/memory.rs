/// In-process store backing.
///
/// All state sits behind one `RwLock`, so every store operation is a
/// serializable transaction: check-then-mutate sequences hold the write
/// guard for their whole extent and concurrent identical requests cannot
/// double-apply. Used by the test suites and by storage-less dev runs.
use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::models::{Comment, CommentView, NewComment, NewPost, NewUser, Post, User};
use crate::store::{ContentStore, IdentityStore, Result, StoreError};

#[derive(Default)]
struct MemState {
    users: HashMap<Uuid, User>,
    emails: HashMap<String, Uuid>,
    /// Forward follow index: follower -> followees
    following: HashMap<Uuid, HashSet<Uuid>>,
    /// Inverse follow index, kept in lockstep with `following`
    followers: HashMap<Uuid, HashSet<Uuid>>,
    posts: HashMap<Uuid, Post>,
    /// Insertion order of posts per owner
    post_order: Vec<Uuid>,
    likes: HashMap<Uuid, HashSet<Uuid>>,
    /// Comments per post, creation order
    comments: HashMap<Uuid, Vec<Comment>>,
}

#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<MemState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityStore for MemoryStore {
    async fn create_user(&self, new: NewUser) -> Result<User> {
        let mut s = self.state.write().await;
        if s.emails.contains_key(&new.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let user = User {
            id: Uuid::new_v4(),
            username: new.username,
            email: new.email,
            password_hash: new.password_hash,
            created_at: Utc::now(),
        };
        s.emails.insert(user.email.clone(), user.id);
        s.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let s = self.state.read().await;
        Ok(s.users.get(&id).cloned())
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>> {
        let s = self.state.read().await;
        Ok(s.emails.get(email).and_then(|id| s.users.get(id)).cloned())
    }

    async fn insert_follow(&self, follower: Uuid, followee: Uuid) -> Result<bool> {
        let mut s = self.state.write().await;
        let inserted = s.following.entry(follower).or_default().insert(followee);
        if inserted {
            s.followers.entry(followee).or_default().insert(follower);
        }
        Ok(inserted)
    }

    async fn delete_follow(&self, follower: Uuid, followee: Uuid) -> Result<bool> {
        let mut s = self.state.write().await;
        let removed = s
            .following
            .get_mut(&follower)
            .map(|set| set.remove(&followee))
            .unwrap_or(false);
        if removed {
            if let Some(set) = s.followers.get_mut(&followee) {
                set.remove(&follower);
            }
        }
        Ok(removed)
    }

    async fn is_following(&self, follower: Uuid, followee: Uuid) -> Result<bool> {
        let s = self.state.read().await;
        Ok(s.following
            .get(&follower)
            .map(|set| set.contains(&followee))
            .unwrap_or(false))
    }

    async fn count_following(&self, user: Uuid) -> Result<i64> {
        let s = self.state.read().await;
        Ok(s.following.get(&user).map(|set| set.len()).unwrap_or(0) as i64)
    }

    async fn count_followers(&self, user: Uuid) -> Result<i64> {
        let s = self.state.read().await;
        Ok(s.followers.get(&user).map(|set| set.len()).unwrap_or(0) as i64)
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn insert_post(&self, new: NewPost) -> Result<Post> {
        let mut s = self.state.write().await;
        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            title: new.title,
            desc: new.desc,
            created_at: now,
            updated_at: now,
        };
        s.posts.insert(post.id, post.clone());
        s.post_order.push(post.id);
        Ok(post)
    }

    async fn post_by_id(&self, id: Uuid) -> Result<Option<Post>> {
        let s = self.state.read().await;
        Ok(s.posts.get(&id).cloned())
    }

    async fn posts_by_owner(&self, owner: Uuid) -> Result<Vec<Post>> {
        let s = self.state.read().await;
        Ok(s.post_order
            .iter()
            .filter_map(|id| s.posts.get(id))
            .filter(|post| post.user_id == owner)
            .cloned()
            .collect())
    }

    async fn delete_post(&self, id: Uuid) -> Result<bool> {
        let mut s = self.state.write().await;
        if s.posts.remove(&id).is_none() {
            return Ok(false);
        }
        // Cascade under the same write guard
        s.post_order.retain(|pid| *pid != id);
        s.likes.remove(&id);
        s.comments.remove(&id);
        Ok(true)
    }

    async fn insert_like(&self, post: Uuid, user: Uuid) -> Result<bool> {
        let mut s = self.state.write().await;
        Ok(s.likes.entry(post).or_default().insert(user))
    }

    async fn delete_like(&self, post: Uuid, user: Uuid) -> Result<bool> {
        let mut s = self.state.write().await;
        Ok(s.likes
            .get_mut(&post)
            .map(|set| set.remove(&user))
            .unwrap_or(false))
    }

    async fn has_liked(&self, post: Uuid, user: Uuid) -> Result<bool> {
        let s = self.state.read().await;
        Ok(s.likes
            .get(&post)
            .map(|set| set.contains(&user))
            .unwrap_or(false))
    }

    async fn like_count(&self, post: Uuid) -> Result<i64> {
        let s = self.state.read().await;
        Ok(s.likes.get(&post).map(|set| set.len()).unwrap_or(0) as i64)
    }

    async fn insert_comment(&self, new: NewComment) -> Result<Comment> {
        let mut s = self.state.write().await;
        let now = Utc::now();
        let comment = Comment {
            id: Uuid::new_v4(),
            post_id: new.post_id,
            user_id: new.user_id,
            comment: new.comment,
            created_at: now,
            updated_at: now,
        };
        s.comments.entry(new.post_id).or_default().push(comment.clone());
        Ok(comment)
    }

    async fn comments_for_post(&self, post: Uuid) -> Result<Vec<CommentView>> {
        let s = self.state.read().await;
        let views = s
            .comments
            .get(&post)
            .map(|list| {
                list.iter()
                    .map(|c| CommentView {
                        user: s
                            .users
                            .get(&c.user_id)
                            .map(|u| u.username.clone())
                            .unwrap_or_default(),
                        comment: c.comment.clone(),
                        created_at: c.created_at,
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(views)
    }

    async fn comment_count(&self, post: Uuid) -> Result<i64> {
        let s = self.state.read().await;
        Ok(s.comments.get(&post).map(|list| list.len()).unwrap_or(0) as i64)
    }
}
