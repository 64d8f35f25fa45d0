use axum::{
    Router,
    routing::{delete, get, post},
};

use chirp_core::health::{healthz, readyz};
use chirp_core::middleware::request_id_layer;

use crate::handlers::{
    auth::{login, register},
    media::upload_media,
    tweet::{create_tweet, delete_tweet, like_tweet, list_tweets, unlike_tweet},
    user::{follow_user, get_me, get_user, unfollow_user},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Accounts
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        // Profiles and follows
        .route("/api/users/me", get(get_me))
        .route("/api/users/{user_id}", get(get_user))
        .route("/api/users/{user_id}/follow", post(follow_user))
        .route("/api/users/{user_id}/follow", delete(unfollow_user))
        // Tweets and likes
        .route("/api/tweets", get(list_tweets))
        .route("/api/tweets", post(create_tweet))
        .route("/api/tweets/{tweet_id}", delete(delete_tweet))
        .route("/api/tweets/{tweet_id}/likes", post(like_tweet))
        .route("/api/tweets/{tweet_id}/likes", delete(unlike_tweet))
        // Media
        .route("/api/medias", post(upload_media))
        .layer(request_id_layer())
        .with_state(state)
}
