use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use chirp_core::extract::ApiKeyHeader;

use crate::domain::types::FeedTweet;
use crate::error::ApiError;
use crate::handlers::current_user;
use crate::handlers::user::{ResultResponse, UserBody};
use crate::state::AppState;
use crate::usecase::feed::ListFeedUseCase;
use crate::usecase::tweet::{
    CreateTweetInput, CreateTweetUseCase, DeleteTweetUseCase, LikeTweetUseCase, UnlikeTweetUseCase,
};

// ── GET /api/tweets ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct LikeBody {
    pub user_id: i32,
    pub name: String,
}

#[derive(Serialize)]
pub struct TweetBody {
    pub id: i32,
    pub content: String,
    pub attachments: Vec<String>,
    pub author: UserBody,
    pub likes: Vec<LikeBody>,
}

impl From<FeedTweet> for TweetBody {
    fn from(tweet: FeedTweet) -> Self {
        Self {
            id: tweet.id,
            content: tweet.content,
            attachments: tweet.attachments,
            author: tweet.author.into(),
            likes: tweet
                .likes
                .into_iter()
                .map(|liker| LikeBody {
                    user_id: liker.id,
                    name: liker.name,
                })
                .collect(),
        }
    }
}

#[derive(Serialize)]
pub struct FeedResponse {
    pub result: &'static str,
    pub tweets: Vec<TweetBody>,
}

pub async fn list_tweets(
    State(state): State<AppState>,
    api_key: ApiKeyHeader,
) -> Result<Json<FeedResponse>, ApiError> {
    current_user(&state, &api_key).await?;
    let usecase = ListFeedUseCase {
        tweets: state.tweet_repo(),
    };
    let feed = usecase.execute().await?;
    Ok(Json(FeedResponse {
        result: "true",
        tweets: feed.into_iter().map(Into::into).collect(),
    }))
}

// ── POST /api/tweets ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateTweetRequest {
    pub tweet_data: String,
    #[serde(default)]
    pub tweet_media_ids: Option<Vec<i32>>,
}

#[derive(Serialize)]
pub struct CreateTweetResponse {
    pub result: &'static str,
    pub tweet_id: i32,
}

pub async fn create_tweet(
    State(state): State<AppState>,
    api_key: ApiKeyHeader,
    Json(body): Json<CreateTweetRequest>,
) -> Result<Json<CreateTweetResponse>, ApiError> {
    let user = current_user(&state, &api_key).await?;
    let usecase = CreateTweetUseCase {
        tweets: state.tweet_repo(),
    };
    let tweet_id = usecase
        .execute(
            user.id,
            CreateTweetInput {
                body: body.tweet_data,
                media_ids: body.tweet_media_ids.unwrap_or_default(),
            },
        )
        .await?;
    Ok(Json(CreateTweetResponse {
        result: "true",
        tweet_id,
    }))
}

// ── DELETE /api/tweets/{id} ───────────────────────────────────────────────────

pub async fn delete_tweet(
    State(state): State<AppState>,
    api_key: ApiKeyHeader,
    Path(tweet_id): Path<i32>,
) -> Result<Json<ResultResponse>, ApiError> {
    let user = current_user(&state, &api_key).await?;
    let usecase = DeleteTweetUseCase {
        tweets: state.tweet_repo(),
        media_store: state.media_store(),
    };
    usecase.execute(user.id, tweet_id).await?;
    Ok(Json(ResultResponse::ok()))
}

// ── POST /api/tweets/{id}/likes ───────────────────────────────────────────────

pub async fn like_tweet(
    State(state): State<AppState>,
    api_key: ApiKeyHeader,
    Path(tweet_id): Path<i32>,
) -> Result<Json<ResultResponse>, ApiError> {
    let user = current_user(&state, &api_key).await?;
    let usecase = LikeTweetUseCase {
        tweets: state.tweet_repo(),
        likes: state.like_repo(),
    };
    usecase.execute(user.id, tweet_id).await?;
    Ok(Json(ResultResponse::ok()))
}

// ── DELETE /api/tweets/{id}/likes ─────────────────────────────────────────────

pub async fn unlike_tweet(
    State(state): State<AppState>,
    api_key: ApiKeyHeader,
    Path(tweet_id): Path<i32>,
) -> Result<Json<ResultResponse>, ApiError> {
    let user = current_user(&state, &api_key).await?;
    let usecase = UnlikeTweetUseCase {
        tweets: state.tweet_repo(),
        likes: state.like_repo(),
    };
    usecase.execute(user.id, tweet_id).await?;
    Ok(Json(ResultResponse::ok()))
}
