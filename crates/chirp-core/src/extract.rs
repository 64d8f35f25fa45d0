//! `api-key` header extractor for protected routes.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;

/// Raw api-key presented by the client via the `api-key` header.
///
/// Rejects with 401 when the header is absent. The literal value `"null"` is
/// treated as absent (browser clients send it before sign-in). Resolving the
/// key to a user is the service's job, not the extractor's.
#[derive(Debug, Clone)]
pub struct ApiKeyHeader(pub String);

impl<S> FromRequestParts<S> for ApiKeyHeader
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let api_key = parts
            .headers
            .get("api-key")
            .and_then(|v| v.to_str().ok())
            .filter(|v| *v != "null")
            .map(str::to_owned);

        async move {
            let api_key = api_key.ok_or(StatusCode::UNAUTHORIZED)?;
            Ok(Self(api_key))
        }
    }
}
