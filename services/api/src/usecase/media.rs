use crate::domain::repository::{MediaRepository, MediaStore};
use crate::error::ApiError;

/// Persist an uploaded image and stage an unlinked media row for it. The
/// row stays unlinked until a tweet create claims it.
pub struct UploadMediaUseCase<M: MediaRepository, S: MediaStore> {
    pub media: M,
    pub media_store: S,
}

impl<M: MediaRepository, S: MediaStore> UploadMediaUseCase<M, S> {
    pub async fn execute(&self, file_name: &str, bytes: &[u8]) -> Result<i32, ApiError> {
        if file_name.is_empty() {
            return Err(ApiError::Validation("file name must not be empty".into()));
        }
        let locator = self.media_store.store(file_name, bytes).await?;
        self.media.stage(&locator).await
    }
}
