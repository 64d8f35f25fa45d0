use uuid::Uuid;

use crate::domain::password::{hash_password, verify_password};
use crate::domain::repository::UserRepository;
use crate::domain::types::{User, derive_name};
use crate::error::ApiError;

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub email: String,
    pub password: String,
}

pub struct RegisterUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> RegisterUseCase<U> {
    /// Create the account and mint its single api-key. The user row and the
    /// api-key row commit together; the returned key is the one the client
    /// authenticates with from now on.
    pub async fn execute(&self, input: RegisterInput) -> Result<Uuid, ApiError> {
        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(ApiError::EmailTaken);
        }
        let name = derive_name(&input.email);
        let digest = hash_password(&input.password)?;
        let key = Uuid::new_v4();
        self.users
            .create_with_api_key(&name, &input.email, &digest, key)
            .await?;
        Ok(key)
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> LoginUseCase<U> {
    /// Return the existing api-key for matching credentials. Unknown email
    /// and wrong password fail identically so callers cannot probe for
    /// registered addresses.
    pub async fn execute(&self, input: LoginInput) -> Result<Uuid, ApiError> {
        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or(ApiError::IncorrectCredentials)?;
        if !verify_password(&input.password, &user.password)? {
            return Err(ApiError::IncorrectCredentials);
        }
        self.users
            .find_api_key(user.id)
            .await?
            .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("user {} has no api key", user.id)))
    }
}

// ── ResolveApiKey ────────────────────────────────────────────────────────────

pub struct ResolveApiKeyUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> ResolveApiKeyUseCase<U> {
    /// Resolve the raw `api-key` header value to a user. A value that does
    /// not parse as a UUID and a key matching no row fail the same way.
    pub async fn execute(&self, raw_key: &str) -> Result<User, ApiError> {
        let key: Uuid = raw_key.parse().map_err(|_| ApiError::InvalidApiKey)?;
        self.users
            .find_by_api_key(key)
            .await?
            .ok_or(ApiError::InvalidApiKey)
    }
}
