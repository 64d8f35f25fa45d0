use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Api service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("user not found")]
    UserNotFound,
    #[error("tweet not found")]
    TweetNotFound,
    #[error("you are not subscribed to this user")]
    FollowNotFound,
    #[error("incorrect email or password")]
    IncorrectCredentials,
    #[error("user with this email already exists")]
    EmailTaken,
    #[error("you are already subscribed")]
    AlreadyFollowing,
    #[error("you already liked this tweet")]
    AlreadyLiked,
    #[error("you cannot follow yourself")]
    SelfFollow,
    #[error("invalid api-key")]
    InvalidApiKey,
    #[error("media not found or already attached")]
    MediaUnavailable,
    #[error("you do not own this tweet")]
    Forbidden,
    #[error("{0}")]
    Validation(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::TweetNotFound => "TWEET_NOT_FOUND",
            Self::FollowNotFound => "FOLLOW_NOT_FOUND",
            Self::IncorrectCredentials => "INCORRECT_CREDENTIALS",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::AlreadyFollowing => "ALREADY_FOLLOWING",
            Self::AlreadyLiked => "ALREADY_LIKED",
            Self::SelfFollow => "SELF_FOLLOW",
            Self::InvalidApiKey => "INVALID_API_KEY",
            Self::MediaUnavailable => "MEDIA_UNAVAILABLE",
            Self::Forbidden => "FORBIDDEN",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound
            | Self::TweetNotFound
            | Self::FollowNotFound
            | Self::IncorrectCredentials => StatusCode::NOT_FOUND,
            Self::EmailTaken | Self::AlreadyFollowing | Self::AlreadyLiked => StatusCode::CONFLICT,
            Self::SelfFollow | Self::MediaUnavailable | Self::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidApiKey => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "result": "false",
            "error_type": self.kind(),
            "error_message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
