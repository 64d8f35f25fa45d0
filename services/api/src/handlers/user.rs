use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use chirp_core::extract::ApiKeyHeader;

use crate::domain::types::{Profile, UserRef};
use crate::error::ApiError;
use crate::handlers::current_user;
use crate::state::AppState;
use crate::usecase::follow::{FollowUseCase, UnfollowUseCase};
use crate::usecase::profile::GetProfileUseCase;

#[derive(Serialize)]
pub struct ResultResponse {
    pub result: &'static str,
}

impl ResultResponse {
    pub fn ok() -> Self {
        Self { result: "true" }
    }
}

#[derive(Serialize)]
pub struct UserBody {
    pub id: i32,
    pub name: String,
}

impl From<UserRef> for UserBody {
    fn from(user: UserRef) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}

#[derive(Serialize)]
pub struct ProfileBody {
    pub id: i32,
    pub name: String,
    pub followers: Vec<UserBody>,
    pub following: Vec<UserBody>,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub result: &'static str,
    pub user: ProfileBody,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            result: "true",
            user: ProfileBody {
                id: profile.id,
                name: profile.name,
                followers: profile.followers.into_iter().map(Into::into).collect(),
                following: profile.following.into_iter().map(Into::into).collect(),
            },
        }
    }
}

// ── GET /api/users/me ─────────────────────────────────────────────────────────

pub async fn get_me(
    State(state): State<AppState>,
    api_key: ApiKeyHeader,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = current_user(&state, &api_key).await?;
    let usecase = GetProfileUseCase {
        users: state.user_repo(),
        follows: state.follow_repo(),
    };
    let profile = usecase.execute(user.id).await?;
    Ok(Json(profile.into()))
}

// ── GET /api/users/{id} ───────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    api_key: ApiKeyHeader,
    Path(user_id): Path<i32>,
) -> Result<Json<ProfileResponse>, ApiError> {
    current_user(&state, &api_key).await?;
    let usecase = GetProfileUseCase {
        users: state.user_repo(),
        follows: state.follow_repo(),
    };
    let profile = usecase.execute(user_id).await?;
    Ok(Json(profile.into()))
}

// ── POST /api/users/{id}/follow ───────────────────────────────────────────────

pub async fn follow_user(
    State(state): State<AppState>,
    api_key: ApiKeyHeader,
    Path(user_id): Path<i32>,
) -> Result<Json<ResultResponse>, ApiError> {
    let user = current_user(&state, &api_key).await?;
    let usecase = FollowUseCase {
        users: state.user_repo(),
        follows: state.follow_repo(),
    };
    usecase.execute(user.id, user_id).await?;
    Ok(Json(ResultResponse::ok()))
}

// ── DELETE /api/users/{id}/follow ─────────────────────────────────────────────

pub async fn unfollow_user(
    State(state): State<AppState>,
    api_key: ApiKeyHeader,
    Path(user_id): Path<i32>,
) -> Result<Json<ResultResponse>, ApiError> {
    let user = current_user(&state, &api_key).await?;
    let usecase = UnfollowUseCase {
        follows: state.follow_repo(),
    };
    usecase.execute(user.id, user_id).await?;
    Ok(Json(ResultResponse::ok()))
}
