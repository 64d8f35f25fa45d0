use chirp_api::error::ApiError;
use chirp_api::usecase::feed::ListFeedUseCase;
use chirp_api::usecase::media::UploadMediaUseCase;
use chirp_api::usecase::tweet::{
    CreateTweetInput, CreateTweetUseCase, DeleteTweetUseCase, LikeTweetUseCase, UnlikeTweetUseCase,
};

use crate::helpers::{InMemoryStore, post_tweet, register_user};

#[tokio::test]
async fn should_publish_tweet_with_uploaded_media() {
    let store = InMemoryStore::new();
    let (alice, _) = register_user(&store, "alice@example.com").await;

    let upload = UploadMediaUseCase {
        media: store.clone(),
        media_store: store.clone(),
    };
    let media_id = upload.execute("photo.png", b"pixels").await.unwrap();

    let create = CreateTweetUseCase {
        tweets: store.clone(),
    };
    let tweet_id = create
        .execute(
            alice,
            CreateTweetInput {
                body: "check this out".into(),
                media_ids: vec![media_id],
            },
        )
        .await
        .unwrap();

    let feed = ListFeedUseCase {
        tweets: store.clone(),
    };
    let tweets = feed.execute().await.unwrap();
    assert_eq!(tweets.len(), 1);
    assert_eq!(tweets[0].id, tweet_id);
    assert_eq!(tweets[0].content, "check this out");
    assert_eq!(tweets[0].attachments, vec!["media/photo.png"]);
    assert_eq!(tweets[0].author.name, "alice");
}

#[tokio::test]
async fn should_not_attach_the_same_media_twice() {
    let store = InMemoryStore::new();
    let (alice, _) = register_user(&store, "alice@example.com").await;

    let upload = UploadMediaUseCase {
        media: store.clone(),
        media_store: store.clone(),
    };
    let media_id = upload.execute("photo.png", b"pixels").await.unwrap();

    let create = CreateTweetUseCase {
        tweets: store.clone(),
    };
    create
        .execute(
            alice,
            CreateTweetInput {
                body: "first".into(),
                media_ids: vec![media_id],
            },
        )
        .await
        .unwrap();

    let second = create
        .execute(
            alice,
            CreateTweetInput {
                body: "second".into(),
                media_ids: vec![media_id],
            },
        )
        .await;
    assert!(matches!(second, Err(ApiError::MediaUnavailable)));
}

#[tokio::test]
async fn should_remove_blobs_and_likes_when_tweet_is_deleted() {
    let store = InMemoryStore::new();
    let (alice, _) = register_user(&store, "alice@example.com").await;
    let (bob, _) = register_user(&store, "bob@example.com").await;

    let upload = UploadMediaUseCase {
        media: store.clone(),
        media_store: store.clone(),
    };
    let media_id = upload.execute("photo.png", b"pixels").await.unwrap();

    let create = CreateTweetUseCase {
        tweets: store.clone(),
    };
    let tweet_id = create
        .execute(
            alice,
            CreateTweetInput {
                body: "short lived".into(),
                media_ids: vec![media_id],
            },
        )
        .await
        .unwrap();

    let like = LikeTweetUseCase {
        tweets: store.clone(),
        likes: store.clone(),
    };
    like.execute(bob, tweet_id).await.unwrap();

    let delete = DeleteTweetUseCase {
        tweets: store.clone(),
        media_store: store.clone(),
    };
    delete.execute(alice, tweet_id).await.unwrap();

    assert_eq!(store.deleted_blobs(), vec!["media/photo.png"]);
    assert!(store.blob_names().is_empty());
    assert_eq!(store.media_row_count(), 0);
    assert_eq!(store.like_count(tweet_id), 0);

    let feed = ListFeedUseCase {
        tweets: store.clone(),
    };
    assert!(feed.execute().await.unwrap().is_empty());
}

#[tokio::test]
async fn should_only_let_the_owner_delete() {
    let store = InMemoryStore::new();
    let (alice, _) = register_user(&store, "alice@example.com").await;
    let (bob, _) = register_user(&store, "bob@example.com").await;
    let tweet_id = post_tweet(&store, alice, "mine").await;

    let delete = DeleteTweetUseCase {
        tweets: store.clone(),
        media_store: store.clone(),
    };
    let result = delete.execute(bob, tweet_id).await;
    assert!(matches!(result, Err(ApiError::Forbidden)));

    delete.execute(alice, tweet_id).await.unwrap();
}

#[tokio::test]
async fn should_count_likes_from_others_but_not_the_author() {
    let store = InMemoryStore::new();
    let (alice, _) = register_user(&store, "alice@example.com").await;
    let (bob, _) = register_user(&store, "bob@example.com").await;
    let tweet_id = post_tweet(&store, alice, "like me").await;

    let like = LikeTweetUseCase {
        tweets: store.clone(),
        likes: store.clone(),
    };

    // the author's own like is accepted and dropped
    like.execute(alice, tweet_id).await.unwrap();
    assert_eq!(store.like_count(tweet_id), 0);

    like.execute(bob, tweet_id).await.unwrap();
    assert_eq!(store.like_count(tweet_id), 1);

    let again = like.execute(bob, tweet_id).await;
    assert!(matches!(again, Err(ApiError::AlreadyLiked)));

    let unlike = UnlikeTweetUseCase {
        tweets: store.clone(),
        likes: store.clone(),
    };
    unlike.execute(bob, tweet_id).await.unwrap();
    assert_eq!(store.like_count(tweet_id), 0);
}
