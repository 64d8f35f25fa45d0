use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    TransactionError, TransactionTrait, sea_query::Expr,
};
use uuid::Uuid;

use chirp_api_schema::{api_keys, followers, likes, media, tweets, users};

use crate::domain::repository::{
    FollowRepository, LikeRepository, MediaRepository, TweetRepository, UserRepository,
};
use crate::domain::types::{FeedTweet, Tweet, User, UserRef};
use crate::error::ApiError;

fn txn_err(e: TransactionError<ApiError>) -> ApiError {
    match e {
        TransactionError::Connection(db) => {
            ApiError::Internal(anyhow::Error::new(db).context("transaction"))
        }
        TransactionError::Transaction(err) => err,
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_api_key(&self, key: Uuid) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .inner_join(api_keys::Entity)
            .filter(api_keys::Column::Apikey.eq(key))
            .one(&self.db)
            .await
            .context("find user by api key")?;
        Ok(model.map(user_from_model))
    }

    async fn find_api_key(&self, user_id: i32) -> Result<Option<Uuid>, ApiError> {
        let model = api_keys::Entity::find()
            .filter(api_keys::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find api key by user")?;
        Ok(model.map(|m| m.apikey))
    }

    async fn create_with_api_key(
        &self,
        name: &str,
        email: &str,
        password: &str,
        key: Uuid,
    ) -> Result<i32, ApiError> {
        let name = name.to_owned();
        let email = email.to_owned();
        let password = password.to_owned();
        self.db
            .transaction::<_, i32, ApiError>(|txn| {
                Box::pin(async move {
                    let user = users::ActiveModel {
                        name: Set(name),
                        email: Set(email),
                        password: Set(password),
                        registered_at: Set(Utc::now()),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await
                    .context("insert user")?;

                    api_keys::ActiveModel {
                        apikey: Set(key),
                        user_id: Set(user.id),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await
                    .context("insert api key")?;

                    Ok(user.id)
                })
            })
            .await
            .map_err(txn_err)
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        password: model.password,
        registered_at: model.registered_at,
    }
}

// ── Follow repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFollowRepository {
    pub db: DatabaseConnection,
}

impl FollowRepository for DbFollowRepository {
    async fn exists(&self, follower_id: i32, following_id: i32) -> Result<bool, ApiError> {
        let model = followers::Entity::find_by_id((follower_id, following_id))
            .one(&self.db)
            .await
            .context("find follow edge")?;
        Ok(model.is_some())
    }

    async fn insert(&self, follower_id: i32, following_id: i32) -> Result<(), ApiError> {
        followers::ActiveModel {
            user_id: Set(follower_id),
            following_id: Set(following_id),
        }
        .insert(&self.db)
        .await
        .context("insert follow edge")?;
        Ok(())
    }

    async fn delete(&self, follower_id: i32, following_id: i32) -> Result<bool, ApiError> {
        let result = followers::Entity::delete_many()
            .filter(followers::Column::UserId.eq(follower_id))
            .filter(followers::Column::FollowingId.eq(following_id))
            .exec(&self.db)
            .await
            .context("delete follow edge")?;
        Ok(result.rows_affected > 0)
    }

    async fn list_followers(&self, user_id: i32) -> Result<Vec<UserRef>, ApiError> {
        let edges = followers::Entity::find()
            .filter(followers::Column::FollowingId.eq(user_id))
            .all(&self.db)
            .await
            .context("list follower edges")?;
        let ids: Vec<i32> = edges.into_iter().map(|e| e.user_id).collect();
        self.resolve_refs(ids).await
    }

    async fn list_following(&self, user_id: i32) -> Result<Vec<UserRef>, ApiError> {
        let edges = followers::Entity::find()
            .filter(followers::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .context("list following edges")?;
        let ids: Vec<i32> = edges.into_iter().map(|e| e.following_id).collect();
        self.resolve_refs(ids).await
    }
}

impl DbFollowRepository {
    /// Resolve edge endpoints to `{id, name}` projections, keeping edge order.
    async fn resolve_refs(&self, ids: Vec<i32>) -> Result<Vec<UserRef>, ApiError> {
        let models = users::Entity::find()
            .filter(users::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .context("resolve follow peers")?;
        let by_id: std::collections::HashMap<i32, String> =
            models.into_iter().map(|m| (m.id, m.name)).collect();
        Ok(ids
            .into_iter()
            .filter_map(|id| by_id.get(&id).map(|name| UserRef {
                id,
                name: name.clone(),
            }))
            .collect())
    }
}

// ── Tweet repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTweetRepository {
    pub db: DatabaseConnection,
}

impl TweetRepository for DbTweetRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Tweet>, ApiError> {
        let model = tweets::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find tweet by id")?;
        Ok(model.map(tweet_from_model))
    }

    async fn create(&self, body: &str, owner_id: i32, media_ids: &[i32]) -> Result<i32, ApiError> {
        let body = body.to_owned();
        let media_ids = media_ids.to_vec();
        self.db
            .transaction::<_, i32, ApiError>(|txn| {
                Box::pin(async move {
                    let tweet = tweets::ActiveModel {
                        tweet_data: Set(body),
                        owner_id: Set(owner_id),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await
                    .context("insert tweet")?;

                    for media_id in media_ids {
                        // The unlinked-state filter makes a stolen or stale
                        // media id fail the whole transaction.
                        let result = media::Entity::update_many()
                            .col_expr(media::Column::TweetId, Expr::value(tweet.id))
                            .filter(media::Column::Id.eq(media_id))
                            .filter(media::Column::TweetId.is_null())
                            .exec(txn)
                            .await
                            .context("link media to tweet")?;
                        if result.rows_affected == 0 {
                            return Err(ApiError::MediaUnavailable);
                        }
                    }

                    Ok(tweet.id)
                })
            })
            .await
            .map_err(txn_err)
    }

    async fn delete(&self, tweet_id: i32) -> Result<Vec<String>, ApiError> {
        self.db
            .transaction::<_, Vec<String>, ApiError>(|txn| {
                Box::pin(async move {
                    // Snapshot attachment paths before the row disappears.
                    let medias = media::Entity::find()
                        .filter(media::Column::TweetId.eq(tweet_id))
                        .all(txn)
                        .await
                        .context("snapshot tweet media")?;

                    tweets::Entity::delete_by_id(tweet_id)
                        .exec(txn)
                        .await
                        .context("delete tweet")?;

                    Ok(medias.into_iter().filter_map(|m| m.media_path).collect())
                })
            })
            .await
            .map_err(txn_err)
    }

    async fn list_feed(&self) -> Result<Vec<FeedTweet>, ApiError> {
        let tweet_models = tweets::Entity::find()
            .all(&self.db)
            .await
            .context("list tweets")?;

        let mut results = Vec::with_capacity(tweet_models.len());
        for tweet in tweet_models {
            let attachments: Vec<String> = media::Entity::find()
                .filter(media::Column::TweetId.eq(tweet.id))
                .all(&self.db)
                .await
                .context("list tweet media")?
                .into_iter()
                .filter_map(|m| m.media_path)
                .collect();

            let like_rows = likes::Entity::find()
                .filter(likes::Column::TweetId.eq(tweet.id))
                .all(&self.db)
                .await
                .context("list tweet likes")?;
            let liker_ids: Vec<i32> = like_rows.into_iter().map(|l| l.user_id).collect();
            let likers = users::Entity::find()
                .filter(users::Column::Id.is_in(liker_ids.iter().copied()))
                .all(&self.db)
                .await
                .context("resolve liking users")?;
            let by_id: std::collections::HashMap<i32, String> =
                likers.into_iter().map(|m| (m.id, m.name)).collect();
            let likes: Vec<UserRef> = liker_ids
                .into_iter()
                .filter_map(|id| by_id.get(&id).map(|name| UserRef {
                    id,
                    name: name.clone(),
                }))
                .collect();

            let author = users::Entity::find_by_id(tweet.owner_id)
                .one(&self.db)
                .await
                .context("resolve tweet author")?
                .ok_or_else(|| anyhow::anyhow!("tweet {} has no author row", tweet.id))?;

            results.push(FeedTweet {
                id: tweet.id,
                content: tweet.tweet_data,
                attachments,
                author: UserRef {
                    id: author.id,
                    name: author.name,
                },
                likes,
            });
        }
        Ok(results)
    }
}

fn tweet_from_model(model: tweets::Model) -> Tweet {
    Tweet {
        id: model.id,
        body: model.tweet_data,
        owner_id: model.owner_id,
    }
}

// ── Media repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMediaRepository {
    pub db: DatabaseConnection,
}

impl MediaRepository for DbMediaRepository {
    async fn stage(&self, path: &str) -> Result<i32, ApiError> {
        let model = media::ActiveModel {
            media_path: Set(Some(path.to_owned())),
            tweet_id: Set(None),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("stage media")?;
        Ok(model.id)
    }
}

// ── Like repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbLikeRepository {
    pub db: DatabaseConnection,
}

impl LikeRepository for DbLikeRepository {
    async fn exists(&self, tweet_id: i32, user_id: i32) -> Result<bool, ApiError> {
        let model = likes::Entity::find_by_id((tweet_id, user_id))
            .one(&self.db)
            .await
            .context("find like edge")?;
        Ok(model.is_some())
    }

    async fn insert(&self, tweet_id: i32, user_id: i32) -> Result<(), ApiError> {
        likes::ActiveModel {
            tweet_id: Set(tweet_id),
            user_id: Set(user_id),
        }
        .insert(&self.db)
        .await
        .context("insert like edge")?;
        Ok(())
    }

    async fn delete(&self, tweet_id: i32, user_id: i32) -> Result<(), ApiError> {
        likes::Entity::delete_many()
            .filter(likes::Column::TweetId.eq(tweet_id))
            .filter(likes::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .context("delete like edge")?;
        Ok(())
    }
}
