use axum::http::StatusCode;

/// `GET /healthz`. Answers as long as the process is serving requests.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /readyz`. The api service has no warm-up phase, so readiness
/// tracks liveness.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
