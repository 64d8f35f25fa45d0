use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::auth::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};

#[derive(Serialize)]
pub struct ApiKeyResponse {
    pub apikey: uuid::Uuid,
}

// ── POST /api/register ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    /// Accepted for wire compatibility; clients confirm the repeat themselves.
    #[allow(dead_code)]
    #[serde(default)]
    pub password_repeat: Option<String>,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<ApiKeyResponse>, ApiError> {
    let usecase = RegisterUseCase {
        users: state.user_repo(),
    };
    let apikey = usecase
        .execute(RegisterInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(ApiKeyResponse { apikey }))
}

// ── POST /api/login ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<ApiKeyResponse>, ApiError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
    };
    let apikey = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(ApiKeyResponse { apikey }))
}
