use chirp_api::error::ApiError;
use chirp_api::usecase::follow::{FollowUseCase, UnfollowUseCase};
use chirp_api::usecase::profile::GetProfileUseCase;

use crate::helpers::{InMemoryStore, register_user};

#[tokio::test]
async fn should_reflect_follow_on_both_profiles() {
    let store = InMemoryStore::new();
    let (alice, _) = register_user(&store, "alice@example.com").await;
    let (bob, _) = register_user(&store, "bob@example.com").await;

    let follow = FollowUseCase {
        users: store.clone(),
        follows: store.clone(),
    };
    follow.execute(alice, bob).await.unwrap();

    let profile = GetProfileUseCase {
        users: store.clone(),
        follows: store.clone(),
    };

    let alice_profile = profile.execute(alice).await.unwrap();
    assert!(alice_profile.followers.is_empty());
    assert_eq!(alice_profile.following.len(), 1);
    assert_eq!(alice_profile.following[0].name, "bob");

    let bob_profile = profile.execute(bob).await.unwrap();
    assert_eq!(bob_profile.followers.len(), 1);
    assert_eq!(bob_profile.followers[0].name, "alice");
    assert!(bob_profile.following.is_empty());
}

#[tokio::test]
async fn should_clear_edge_after_unfollow() {
    let store = InMemoryStore::new();
    let (alice, _) = register_user(&store, "alice@example.com").await;
    let (bob, _) = register_user(&store, "bob@example.com").await;

    let follow = FollowUseCase {
        users: store.clone(),
        follows: store.clone(),
    };
    let unfollow = UnfollowUseCase {
        follows: store.clone(),
    };
    follow.execute(alice, bob).await.unwrap();
    unfollow.execute(alice, bob).await.unwrap();

    let profile = GetProfileUseCase {
        users: store.clone(),
        follows: store.clone(),
    };
    let bob_profile = profile.execute(bob).await.unwrap();
    assert!(bob_profile.followers.is_empty());

    // edge is gone, so a second unfollow fails
    let result = unfollow.execute(alice, bob).await;
    assert!(matches!(result, Err(ApiError::FollowNotFound)));
}

#[tokio::test]
async fn should_keep_edges_independent_per_direction() {
    let store = InMemoryStore::new();
    let (alice, _) = register_user(&store, "alice@example.com").await;
    let (bob, _) = register_user(&store, "bob@example.com").await;

    let follow = FollowUseCase {
        users: store.clone(),
        follows: store.clone(),
    };
    follow.execute(alice, bob).await.unwrap();
    follow.execute(bob, alice).await.unwrap();

    let profile = GetProfileUseCase {
        users: store.clone(),
        follows: store.clone(),
    };
    let alice_profile = profile.execute(alice).await.unwrap();
    assert_eq!(alice_profile.followers.len(), 1);
    assert_eq!(alice_profile.following.len(), 1);
}

#[tokio::test]
async fn should_reject_self_follow_and_unknown_followee() {
    let store = InMemoryStore::new();
    let (alice, _) = register_user(&store, "alice@example.com").await;

    let follow = FollowUseCase {
        users: store.clone(),
        follows: store.clone(),
    };

    let self_follow = follow.execute(alice, alice).await;
    assert!(matches!(self_follow, Err(ApiError::SelfFollow)));

    let unknown = follow.execute(alice, 999).await;
    assert!(matches!(unknown, Err(ApiError::UserNotFound)));
}
