pub mod auth;
pub mod media;
pub mod tweet;
pub mod user;

use chirp_core::extract::ApiKeyHeader;

use crate::domain::types::User;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::auth::ResolveApiKeyUseCase;

/// Resolve the `api-key` header to the calling user.
pub(crate) async fn current_user(
    state: &AppState,
    api_key: &ApiKeyHeader,
) -> Result<User, ApiError> {
    let usecase = ResolveApiKeyUseCase {
        users: state.user_repo(),
    };
    usecase.execute(&api_key.0).await
}
