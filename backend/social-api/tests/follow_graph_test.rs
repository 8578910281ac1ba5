mod common;

use futures::future::join_all;
use social_api::error::ApiError;
use social_api::services::FollowService;
use uuid::Uuid;

#[tokio::test]
async fn follow_then_follow_again_conflicts_and_counts_one_edge() {
    let store = common::store();
    let alice = common::seed_user(&store, "alice").await;
    let bob = common::seed_user(&store, "bob").await;
    let service = FollowService::new(store.clone());

    let username = service.follow(alice.id, bob.id).await.unwrap();
    assert_eq!(username, "bob");

    let second = service.follow(alice.id, bob.id).await;
    assert!(matches!(second, Err(ApiError::Conflict(_))));

    assert_eq!(service.following_count(alice.id).await.unwrap(), 1);
    assert_eq!(service.followers_count(bob.id).await.unwrap(), 1);
}

#[tokio::test]
async fn self_follow_is_rejected_without_mutation() {
    let store = common::store();
    let alice = common::seed_user(&store, "alice").await;
    let service = FollowService::new(store.clone());

    let result = service.follow(alice.id, alice.id).await;
    assert!(matches!(result, Err(ApiError::Validation(_))));

    assert_eq!(service.following_count(alice.id).await.unwrap(), 0);
    assert_eq!(service.followers_count(alice.id).await.unwrap(), 0);
}

#[tokio::test]
async fn unfollow_without_prior_follow_conflicts() {
    let store = common::store();
    let alice = common::seed_user(&store, "alice").await;
    let bob = common::seed_user(&store, "bob").await;
    let service = FollowService::new(store.clone());

    let result = service.unfollow(alice.id, bob.id).await;
    assert!(matches!(result, Err(ApiError::Conflict(_))));
}

#[tokio::test]
async fn follow_unknown_target_is_not_found() {
    let store = common::store();
    let alice = common::seed_user(&store, "alice").await;
    let service = FollowService::new(store.clone());

    let result = service.follow(alice.id, Uuid::new_v4()).await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn follow_unfollow_round_trip_restores_counts() {
    let store = common::store();
    let alice = common::seed_user(&store, "alice").await;
    let bob = common::seed_user(&store, "bob").await;
    let service = FollowService::new(store.clone());

    service.follow(alice.id, bob.id).await.unwrap();
    service.unfollow(alice.id, bob.id).await.unwrap();

    assert_eq!(service.following_count(alice.id).await.unwrap(), 0);
    assert_eq!(service.followers_count(bob.id).await.unwrap(), 0);
}

#[tokio::test]
async fn following_and_followed_by_are_independent_directions() {
    let store = common::store();
    let alice = common::seed_user(&store, "alice").await;
    let bob = common::seed_user(&store, "bob").await;
    let service = FollowService::new(store.clone());

    service.follow(alice.id, bob.id).await.unwrap();

    assert_eq!(service.following_count(alice.id).await.unwrap(), 1);
    assert_eq!(service.followers_count(alice.id).await.unwrap(), 0);
    assert_eq!(service.following_count(bob.id).await.unwrap(), 0);
    assert_eq!(service.followers_count(bob.id).await.unwrap(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_identical_follows_apply_exactly_once() {
    const ATTEMPTS: usize = 16;

    let store = common::store();
    let alice = common::seed_user(&store, "alice").await;
    let bob = common::seed_user(&store, "bob").await;
    let service = FollowService::new(store.clone());

    let tasks = (0..ATTEMPTS).map(|_| {
        let service = service.clone();
        let (actor, target) = (alice.id, bob.id);
        tokio::spawn(async move { service.follow(actor, target).await })
    });

    let outcomes = join_all(tasks).await;

    let mut applied = 0;
    let mut conflicts = 0;
    for outcome in outcomes {
        match outcome.expect("task must not panic") {
            Ok(_) => applied += 1,
            Err(ApiError::Conflict(_)) => conflicts += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(applied, 1);
    assert_eq!(conflicts, ATTEMPTS - 1);
    assert_eq!(service.following_count(alice.id).await.unwrap(), 1);
    assert_eq!(service.followers_count(bob.id).await.unwrap(), 1);
}
