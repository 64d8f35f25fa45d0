use crate::domain::repository::{LikeRepository, MediaStore, TweetRepository};
use crate::error::ApiError;

// ── CreateTweet ──────────────────────────────────────────────────────────────

pub struct CreateTweetInput {
    pub body: String,
    pub media_ids: Vec<i32>,
}

pub struct CreateTweetUseCase<T: TweetRepository> {
    pub tweets: T,
}

impl<T: TweetRepository> CreateTweetUseCase<T> {
    pub async fn execute(&self, owner_id: i32, input: CreateTweetInput) -> Result<i32, ApiError> {
        if input.body.trim().is_empty() {
            return Err(ApiError::Validation("tweet body must not be empty".into()));
        }
        self.tweets
            .create(&input.body, owner_id, &input.media_ids)
            .await
    }
}

// ── DeleteTweet ──────────────────────────────────────────────────────────────

pub struct DeleteTweetUseCase<T: TweetRepository, S: MediaStore> {
    pub tweets: T,
    pub media_store: S,
}

impl<T: TweetRepository, S: MediaStore> DeleteTweetUseCase<T, S> {
    /// Delete a tweet the caller owns. The row delete cascades media and
    /// like rows; blobs are removed only after the delete commits, and a
    /// failed blob removal is logged rather than surfaced since the tweet
    /// is already gone.
    pub async fn execute(&self, user_id: i32, tweet_id: i32) -> Result<(), ApiError> {
        let tweet = self
            .tweets
            .find_by_id(tweet_id)
            .await?
            .ok_or(ApiError::TweetNotFound)?;
        if tweet.owner_id != user_id {
            return Err(ApiError::Forbidden);
        }

        let attachment_paths = self.tweets.delete(tweet_id).await?;
        for path in attachment_paths {
            if let Err(err) = self.media_store.delete(&path).await {
                tracing::warn!(%path, error = %err, "failed to remove media blob");
            }
        }
        Ok(())
    }
}

// ── LikeTweet ────────────────────────────────────────────────────────────────

pub struct LikeTweetUseCase<T: TweetRepository, L: LikeRepository> {
    pub tweets: T,
    pub likes: L,
}

impl<T: TweetRepository, L: LikeRepository> LikeTweetUseCase<T, L> {
    /// Liking your own tweet is accepted and discarded; liking one twice is
    /// a conflict.
    pub async fn execute(&self, user_id: i32, tweet_id: i32) -> Result<(), ApiError> {
        let tweet = self
            .tweets
            .find_by_id(tweet_id)
            .await?
            .ok_or(ApiError::TweetNotFound)?;
        if tweet.owner_id == user_id {
            return Ok(());
        }
        if self.likes.exists(tweet_id, user_id).await? {
            return Err(ApiError::AlreadyLiked);
        }
        self.likes.insert(tweet_id, user_id).await
    }
}

// ── UnlikeTweet ──────────────────────────────────────────────────────────────

pub struct UnlikeTweetUseCase<T: TweetRepository, L: LikeRepository> {
    pub tweets: T,
    pub likes: L,
}

impl<T: TweetRepository, L: LikeRepository> UnlikeTweetUseCase<T, L> {
    /// Removing an absent like succeeds, so the operation is idempotent.
    pub async fn execute(&self, user_id: i32, tweet_id: i32) -> Result<(), ApiError> {
        if self.tweets.find_by_id(tweet_id).await?.is_none() {
            return Err(ApiError::TweetNotFound);
        }
        self.likes.delete(tweet_id, user_id).await
    }
}
