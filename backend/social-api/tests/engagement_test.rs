mod common;

use social_api::error::ApiError;
use social_api::services::{EngagementService, PostService};
use uuid::Uuid;

#[tokio::test]
async fn liking_own_post_always_fails() {
    let store = common::store();
    let owner = common::seed_user(&store, "owner").await;
    let posts = PostService::new(store.clone());
    let engagement = EngagementService::new(store.clone());

    let post = posts.create_post(owner.id, "Test 1", "Description 1").await.unwrap();

    let result = engagement.like_post(owner.id, post.id).await;
    assert!(matches!(result, Err(ApiError::Validation(_))));
    assert_eq!(engagement.post_summary(post.id).await.unwrap().likes, 0);
}

#[tokio::test]
async fn like_then_like_again_conflicts_and_count_stays_one() {
    let store = common::store();
    let owner = common::seed_user(&store, "owner").await;
    let fan = common::seed_user(&store, "fan").await;
    let posts = PostService::new(store.clone());
    let engagement = EngagementService::new(store.clone());

    let post = posts.create_post(owner.id, "Test 1", "Description 1").await.unwrap();

    engagement.like_post(fan.id, post.id).await.unwrap();
    assert_eq!(engagement.post_summary(post.id).await.unwrap().likes, 1);

    let second = engagement.like_post(fan.id, post.id).await;
    assert!(matches!(second, Err(ApiError::Conflict(_))));
    assert_eq!(engagement.post_summary(post.id).await.unwrap().likes, 1);
}

#[tokio::test]
async fn unlike_without_like_conflicts() {
    let store = common::store();
    let owner = common::seed_user(&store, "owner").await;
    let fan = common::seed_user(&store, "fan").await;
    let posts = PostService::new(store.clone());
    let engagement = EngagementService::new(store.clone());

    let post = posts.create_post(owner.id, "Test 1", "Description 1").await.unwrap();

    let result = engagement.unlike_post(fan.id, post.id).await;
    assert!(matches!(result, Err(ApiError::Conflict(_))));
}

#[tokio::test]
async fn unliking_own_post_is_banned_even_though_unreachable() {
    let store = common::store();
    let owner = common::seed_user(&store, "owner").await;
    let posts = PostService::new(store.clone());
    let engagement = EngagementService::new(store.clone());

    let post = posts.create_post(owner.id, "Test 1", "Description 1").await.unwrap();

    let result = engagement.unlike_post(owner.id, post.id).await;
    assert!(matches!(result, Err(ApiError::Validation(_))));
}

#[tokio::test]
async fn like_unlike_round_trip_restores_count() {
    let store = common::store();
    let owner = common::seed_user(&store, "owner").await;
    let fan = common::seed_user(&store, "fan").await;
    let posts = PostService::new(store.clone());
    let engagement = EngagementService::new(store.clone());

    let post = posts.create_post(owner.id, "Test 1", "Description 1").await.unwrap();

    engagement.like_post(fan.id, post.id).await.unwrap();
    engagement.unlike_post(fan.id, post.id).await.unwrap();

    assert_eq!(engagement.post_summary(post.id).await.unwrap().likes, 0);
}

#[tokio::test]
async fn comment_returns_id_and_appears_in_summary() {
    let store = common::store();
    let owner = common::seed_user(&store, "owner").await;
    let fan = common::seed_user(&store, "fan").await;
    let posts = PostService::new(store.clone());
    let engagement = EngagementService::new(store.clone());

    let post = posts.create_post(owner.id, "Test 1", "Description 1").await.unwrap();

    let comment_id = engagement
        .comment_on_post(fan.id, post.id, "Test comment")
        .await
        .unwrap();
    assert_ne!(comment_id, Uuid::nil());

    let summary = engagement.post_summary(post.id).await.unwrap();
    assert_eq!(summary.comments.len(), 1);
    assert_eq!(summary.comment_count, 1);
    assert_eq!(summary.comments[0].comment, "Test comment");
    assert_eq!(summary.comments[0].user, "fan");
}

#[tokio::test]
async fn comments_keep_creation_order() {
    let store = common::store();
    let owner = common::seed_user(&store, "owner").await;
    let fan = common::seed_user(&store, "fan").await;
    let posts = PostService::new(store.clone());
    let engagement = EngagementService::new(store.clone());

    let post = posts.create_post(owner.id, "Test 1", "Description 1").await.unwrap();

    for body in ["first", "second", "third"] {
        engagement.comment_on_post(fan.id, post.id, body).await.unwrap();
    }

    let summary = engagement.post_summary(post.id).await.unwrap();
    let bodies: Vec<_> = summary.comments.iter().map(|c| c.comment.as_str()).collect();
    assert_eq!(bodies, ["first", "second", "third"]);
}

#[tokio::test]
async fn empty_comment_is_rejected() {
    let store = common::store();
    let owner = common::seed_user(&store, "owner").await;
    let fan = common::seed_user(&store, "fan").await;
    let posts = PostService::new(store.clone());
    let engagement = EngagementService::new(store.clone());

    let post = posts.create_post(owner.id, "Test 1", "Description 1").await.unwrap();

    let result = engagement.comment_on_post(fan.id, post.id, "   ").await;
    assert!(matches!(result, Err(ApiError::Validation(_))));
    assert_eq!(engagement.post_summary(post.id).await.unwrap().comment_count, 0);
}

#[tokio::test]
async fn engagement_against_missing_post_is_not_found() {
    let store = common::store();
    let fan = common::seed_user(&store, "fan").await;
    let engagement = EngagementService::new(store.clone());
    let missing = Uuid::new_v4();

    assert!(matches!(
        engagement.like_post(fan.id, missing).await,
        Err(ApiError::NotFound(_))
    ));
    assert!(matches!(
        engagement.unlike_post(fan.id, missing).await,
        Err(ApiError::NotFound(_))
    ));
    assert!(matches!(
        engagement.comment_on_post(fan.id, missing, "hello").await,
        Err(ApiError::NotFound(_))
    ));
    assert!(matches!(
        engagement.post_summary(missing).await,
        Err(ApiError::NotFound(_))
    ));
}
