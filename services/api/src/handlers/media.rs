use axum::{
    Json,
    extract::{Multipart, State},
};
use serde::Serialize;

use chirp_core::extract::ApiKeyHeader;

use crate::error::ApiError;
use crate::handlers::current_user;
use crate::state::AppState;
use crate::usecase::media::UploadMediaUseCase;

#[derive(Serialize)]
pub struct UploadMediaResponse {
    pub result: &'static str,
    pub media_id: i32,
}

// ── POST /api/medias ──────────────────────────────────────────────────────────

/// Multipart upload with a single `file` field.
pub async fn upload_media(
    State(state): State<AppState>,
    api_key: ApiKeyHeader,
    mut multipart: Multipart,
) -> Result<Json<UploadMediaResponse>, ApiError> {
    current_user(&state, &api_key).await?;

    let mut file: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::Validation("malformed multipart body".into()))?
    {
        if field.name() == Some("file") {
            let name = field.file_name().unwrap_or("upload").to_owned();
            let bytes = field
                .bytes()
                .await
                .map_err(|_| ApiError::Validation("malformed multipart body".into()))?;
            file = Some((name, bytes.to_vec()));
            break;
        }
    }
    let (name, bytes) =
        file.ok_or_else(|| ApiError::Validation("missing multipart field \"file\"".into()))?;

    let usecase = UploadMediaUseCase {
        media: state.media_repo(),
        media_store: state.media_store(),
    };
    let media_id = usecase.execute(&name, &bytes).await?;
    Ok(Json(UploadMediaResponse {
        result: "true",
        media_id,
    }))
}
