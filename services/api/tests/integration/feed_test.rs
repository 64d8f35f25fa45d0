use chirp_api::usecase::feed::ListFeedUseCase;
use chirp_api::usecase::tweet::{LikeTweetUseCase, UnlikeTweetUseCase};

use crate::helpers::{InMemoryStore, post_tweet, register_user};

#[tokio::test]
async fn should_rank_feed_by_like_count() {
    let store = InMemoryStore::new();
    let (alice, _) = register_user(&store, "alice@example.com").await;
    let (bob, _) = register_user(&store, "bob@example.com").await;
    let (carol, _) = register_user(&store, "carol@example.com").await;

    let first = post_tweet(&store, alice, "first").await;
    let second = post_tweet(&store, bob, "second").await;
    let third = post_tweet(&store, carol, "third").await;

    let like = LikeTweetUseCase {
        tweets: store.clone(),
        likes: store.clone(),
    };
    like.execute(alice, second).await.unwrap();
    like.execute(carol, second).await.unwrap();
    like.execute(alice, third).await.unwrap();

    let feed = ListFeedUseCase {
        tweets: store.clone(),
    };
    let tweets = feed.execute().await.unwrap();
    let ids: Vec<i32> = tweets.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![second, third, first]);

    let likers: Vec<&str> = tweets[0].likes.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(likers, vec!["alice", "carol"]);
}

#[tokio::test]
async fn should_keep_publication_order_between_equally_liked_tweets() {
    let store = InMemoryStore::new();
    let (alice, _) = register_user(&store, "alice@example.com").await;

    let first = post_tweet(&store, alice, "first").await;
    let second = post_tweet(&store, alice, "second").await;
    let third = post_tweet(&store, alice, "third").await;

    let feed = ListFeedUseCase {
        tweets: store.clone(),
    };
    let ids: Vec<i32> = feed.execute().await.unwrap().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![first, second, third]);
}

#[tokio::test]
async fn should_rerank_after_unlike() {
    let store = InMemoryStore::new();
    let (alice, _) = register_user(&store, "alice@example.com").await;
    let (bob, _) = register_user(&store, "bob@example.com").await;

    let first = post_tweet(&store, alice, "first").await;
    let second = post_tweet(&store, bob, "second").await;

    let like = LikeTweetUseCase {
        tweets: store.clone(),
        likes: store.clone(),
    };
    like.execute(alice, second).await.unwrap();

    let feed = ListFeedUseCase {
        tweets: store.clone(),
    };
    let ids: Vec<i32> = feed.execute().await.unwrap().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![second, first]);

    let unlike = UnlikeTweetUseCase {
        tweets: store.clone(),
        likes: store.clone(),
    };
    unlike.execute(alice, second).await.unwrap();

    let ids: Vec<i32> = feed.execute().await.unwrap().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![first, second]);
}
