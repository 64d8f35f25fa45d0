#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{FeedTweet, Tweet, User, UserRef};
use crate::error::ApiError;

/// Repository for accounts and their api-keys.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;
    /// Resolve an api-key to its owning user.
    async fn find_by_api_key(&self, key: Uuid) -> Result<Option<User>, ApiError>;
    /// The api-key minted for a user at registration.
    async fn find_api_key(&self, user_id: i32) -> Result<Option<Uuid>, ApiError>;
    /// Insert the user row and its api-key row as one transaction; a failure
    /// partway through leaves neither. Returns the new user id.
    async fn create_with_api_key(
        &self,
        name: &str,
        email: &str,
        password: &str,
        key: Uuid,
    ) -> Result<i32, ApiError>;
}

/// Repository for directed follow edges.
pub trait FollowRepository: Send + Sync {
    async fn exists(&self, follower_id: i32, following_id: i32) -> Result<bool, ApiError>;
    async fn insert(&self, follower_id: i32, following_id: i32) -> Result<(), ApiError>;
    /// Delete an edge. Returns `true` if a row was deleted.
    async fn delete(&self, follower_id: i32, following_id: i32) -> Result<bool, ApiError>;
    async fn list_followers(&self, user_id: i32) -> Result<Vec<UserRef>, ApiError>;
    async fn list_following(&self, user_id: i32) -> Result<Vec<UserRef>, ApiError>;
}

/// Repository for tweets and their attachments.
pub trait TweetRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Tweet>, ApiError>;
    /// Tweet insert plus media-link updates, one transaction. Every id in
    /// `media_ids` must reference an existing, still-unlinked media row;
    /// otherwise the whole transaction fails with `MediaUnavailable`.
    async fn create(&self, body: &str, owner_id: i32, media_ids: &[i32]) -> Result<i32, ApiError>;
    /// Delete the tweet row, cascading its media and like rows. Returns the
    /// attachment paths snapshotted before the delete so the caller can
    /// remove the blobs afterwards.
    async fn delete(&self, tweet_id: i32) -> Result<Vec<String>, ApiError>;
    /// Every tweet with author, attachments and liking users, in storage
    /// order. Feed ordering is the aggregator's job.
    async fn list_feed(&self) -> Result<Vec<FeedTweet>, ApiError>;
}

/// Repository for staged media rows.
pub trait MediaRepository: Send + Sync {
    /// Insert an unlinked media row for an already-stored blob.
    async fn stage(&self, path: &str) -> Result<i32, ApiError>;
}

/// Repository for like edges.
pub trait LikeRepository: Send + Sync {
    async fn exists(&self, tweet_id: i32, user_id: i32) -> Result<bool, ApiError>;
    async fn insert(&self, tweet_id: i32, user_id: i32) -> Result<(), ApiError>;
    /// Deleting an absent edge is not an error.
    async fn delete(&self, tweet_id: i32, user_id: i32) -> Result<(), ApiError>;
}

/// Port for the blob store backing uploaded images.
pub trait MediaStore: Send + Sync {
    /// Persist uploaded bytes under `name`; returns the storage locator.
    /// A name collision gets a random 8-character alphanumeric suffix
    /// inserted before the file extension.
    async fn store(&self, name: &str, bytes: &[u8]) -> Result<String, ApiError>;
    async fn delete(&self, locator: &str) -> Result<(), ApiError>;
}
