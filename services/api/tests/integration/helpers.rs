use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use chirp_api::domain::repository::{
    FollowRepository, LikeRepository, MediaRepository, MediaStore, TweetRepository, UserRepository,
};
use chirp_api::domain::types::{FeedTweet, Tweet, User, UserRef};
use chirp_api::error::ApiError;

// ── InMemoryStore ────────────────────────────────────────────────────────────

#[derive(Default)]
struct MediaRow {
    id: i32,
    path: String,
    tweet_id: Option<i32>,
}

#[derive(Default)]
struct World {
    users: Vec<User>,
    api_keys: Vec<(Uuid, i32)>,
    follows: Vec<(i32, i32)>,
    tweets: Vec<Tweet>,
    media: Vec<MediaRow>,
    likes: Vec<(i32, i32)>,
    blobs: Vec<(String, Vec<u8>)>,
    deleted_blobs: Vec<String>,
    next_user_id: i32,
    next_tweet_id: i32,
    next_media_id: i32,
}

/// Whole backing store in one mutex, implementing every repository port.
/// Lets the usecases run end to end against shared state without a database.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    world: Arc<Mutex<World>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deleted_blobs(&self) -> Vec<String> {
        self.world.lock().unwrap().deleted_blobs.clone()
    }

    pub fn blob_names(&self) -> Vec<String> {
        self.world
            .lock()
            .unwrap()
            .blobs
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn like_count(&self, tweet_id: i32) -> usize {
        self.world
            .lock()
            .unwrap()
            .likes
            .iter()
            .filter(|(t, _)| *t == tweet_id)
            .count()
    }

    pub fn media_row_count(&self) -> usize {
        self.world.lock().unwrap().media.len()
    }

    fn user_ref(world: &World, user_id: i32) -> Option<UserRef> {
        world.users.iter().find(|u| u.id == user_id).map(|u| UserRef {
            id: u.id,
            name: u.name.clone(),
        })
    }
}

impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiError> {
        Ok(self
            .world
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .world
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_api_key(&self, key: Uuid) -> Result<Option<User>, ApiError> {
        let world = self.world.lock().unwrap();
        let user_id = world
            .api_keys
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, id)| *id);
        Ok(user_id.and_then(|id| world.users.iter().find(|u| u.id == id).cloned()))
    }

    async fn find_api_key(&self, user_id: i32) -> Result<Option<Uuid>, ApiError> {
        Ok(self
            .world
            .lock()
            .unwrap()
            .api_keys
            .iter()
            .find(|(_, id)| *id == user_id)
            .map(|(k, _)| *k))
    }

    async fn create_with_api_key(
        &self,
        name: &str,
        email: &str,
        password: &str,
        key: Uuid,
    ) -> Result<i32, ApiError> {
        let mut world = self.world.lock().unwrap();
        world.next_user_id += 1;
        let id = world.next_user_id;
        world.users.push(User {
            id,
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
            registered_at: Utc::now(),
        });
        world.api_keys.push((key, id));
        Ok(id)
    }
}

impl FollowRepository for InMemoryStore {
    async fn exists(&self, follower_id: i32, following_id: i32) -> Result<bool, ApiError> {
        Ok(self
            .world
            .lock()
            .unwrap()
            .follows
            .contains(&(follower_id, following_id)))
    }

    async fn insert(&self, follower_id: i32, following_id: i32) -> Result<(), ApiError> {
        self.world
            .lock()
            .unwrap()
            .follows
            .push((follower_id, following_id));
        Ok(())
    }

    async fn delete(&self, follower_id: i32, following_id: i32) -> Result<bool, ApiError> {
        let mut world = self.world.lock().unwrap();
        let before = world.follows.len();
        world.follows.retain(|e| *e != (follower_id, following_id));
        Ok(world.follows.len() < before)
    }

    async fn list_followers(&self, user_id: i32) -> Result<Vec<UserRef>, ApiError> {
        let world = self.world.lock().unwrap();
        Ok(world
            .follows
            .iter()
            .filter(|(_, following)| *following == user_id)
            .filter_map(|(follower, _)| Self::user_ref(&world, *follower))
            .collect())
    }

    async fn list_following(&self, user_id: i32) -> Result<Vec<UserRef>, ApiError> {
        let world = self.world.lock().unwrap();
        Ok(world
            .follows
            .iter()
            .filter(|(follower, _)| *follower == user_id)
            .filter_map(|(_, following)| Self::user_ref(&world, *following))
            .collect())
    }
}

impl TweetRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Tweet>, ApiError> {
        Ok(self
            .world
            .lock()
            .unwrap()
            .tweets
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn create(&self, body: &str, owner_id: i32, media_ids: &[i32]) -> Result<i32, ApiError> {
        let mut world = self.world.lock().unwrap();
        for media_id in media_ids {
            let available = world
                .media
                .iter()
                .any(|m| m.id == *media_id && m.tweet_id.is_none());
            if !available {
                return Err(ApiError::MediaUnavailable);
            }
        }
        world.next_tweet_id += 1;
        let id = world.next_tweet_id;
        world.tweets.push(Tweet {
            id,
            body: body.to_owned(),
            owner_id,
        });
        for media_id in media_ids {
            if let Some(row) = world.media.iter_mut().find(|m| m.id == *media_id) {
                row.tweet_id = Some(id);
            }
        }
        Ok(id)
    }

    async fn delete(&self, tweet_id: i32) -> Result<Vec<String>, ApiError> {
        let mut world = self.world.lock().unwrap();
        let paths: Vec<String> = world
            .media
            .iter()
            .filter(|m| m.tweet_id == Some(tweet_id))
            .map(|m| m.path.clone())
            .collect();
        world.tweets.retain(|t| t.id != tweet_id);
        world.media.retain(|m| m.tweet_id != Some(tweet_id));
        world.likes.retain(|(t, _)| *t != tweet_id);
        Ok(paths)
    }

    async fn list_feed(&self) -> Result<Vec<FeedTweet>, ApiError> {
        let world = self.world.lock().unwrap();
        let mut feed = Vec::with_capacity(world.tweets.len());
        for tweet in &world.tweets {
            let author = Self::user_ref(&world, tweet.owner_id)
                .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("author missing")))?;
            let attachments = world
                .media
                .iter()
                .filter(|m| m.tweet_id == Some(tweet.id))
                .map(|m| m.path.clone())
                .collect();
            let likes = world
                .likes
                .iter()
                .filter(|(t, _)| *t == tweet.id)
                .filter_map(|(_, liker)| Self::user_ref(&world, *liker))
                .collect();
            feed.push(FeedTweet {
                id: tweet.id,
                content: tweet.body.clone(),
                attachments,
                author,
                likes,
            });
        }
        Ok(feed)
    }
}

impl MediaRepository for InMemoryStore {
    async fn stage(&self, path: &str) -> Result<i32, ApiError> {
        let mut world = self.world.lock().unwrap();
        world.next_media_id += 1;
        let id = world.next_media_id;
        world.media.push(MediaRow {
            id,
            path: path.to_owned(),
            tweet_id: None,
        });
        Ok(id)
    }
}

impl LikeRepository for InMemoryStore {
    async fn exists(&self, tweet_id: i32, user_id: i32) -> Result<bool, ApiError> {
        Ok(self
            .world
            .lock()
            .unwrap()
            .likes
            .contains(&(tweet_id, user_id)))
    }

    async fn insert(&self, tweet_id: i32, user_id: i32) -> Result<(), ApiError> {
        self.world.lock().unwrap().likes.push((tweet_id, user_id));
        Ok(())
    }

    async fn delete(&self, tweet_id: i32, user_id: i32) -> Result<(), ApiError> {
        self.world
            .lock()
            .unwrap()
            .likes
            .retain(|e| *e != (tweet_id, user_id));
        Ok(())
    }
}

impl MediaStore for InMemoryStore {
    async fn store(&self, name: &str, bytes: &[u8]) -> Result<String, ApiError> {
        self.world
            .lock()
            .unwrap()
            .blobs
            .push((name.to_owned(), bytes.to_vec()));
        Ok(format!("media/{name}"))
    }

    async fn delete(&self, locator: &str) -> Result<(), ApiError> {
        let mut world = self.world.lock().unwrap();
        world
            .blobs
            .retain(|(name, _)| format!("media/{name}") != locator);
        world.deleted_blobs.push(locator.to_owned());
        Ok(())
    }
}

// ── Scenario helpers ─────────────────────────────────────────────────────────

/// Register an account and return its user id and api-key.
pub async fn register_user(store: &InMemoryStore, email: &str) -> (i32, Uuid) {
    use chirp_api::usecase::auth::{RegisterInput, RegisterUseCase};

    let usecase = RegisterUseCase {
        users: store.clone(),
    };
    let key = usecase
        .execute(RegisterInput {
            email: email.to_owned(),
            password: "secret".to_owned(),
        })
        .await
        .unwrap();
    let user = store.find_by_api_key(key).await.unwrap().unwrap();
    (user.id, key)
}

/// Post a tweet without attachments.
pub async fn post_tweet(store: &InMemoryStore, owner_id: i32, body: &str) -> i32 {
    use chirp_api::usecase::tweet::{CreateTweetInput, CreateTweetUseCase};

    let usecase = CreateTweetUseCase {
        tweets: store.clone(),
    };
    usecase
        .execute(
            owner_id,
            CreateTweetInput {
                body: body.to_owned(),
                media_ids: vec![],
            },
        )
        .await
        .unwrap()
}
