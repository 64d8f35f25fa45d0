//! Password hashing boundary. Digest format is opaque to the rest of the
//! service.

use crate::error::ApiError;

pub fn hash_password(plain: &str) -> Result<String, ApiError> {
    bcrypt::hash(plain, bcrypt::DEFAULT_COST).map_err(|e| ApiError::Internal(e.into()))
}

pub fn verify_password(plain: &str, digest: &str) -> Result<bool, ApiError> {
    bcrypt::verify(plain, digest).map_err(|e| ApiError::Internal(e.into()))
}
