//! Filesystem blob store for uploaded images.

use std::path::PathBuf;

use anyhow::Context as _;
use rand::Rng as _;
use rand::distr::Alphanumeric;

use crate::domain::repository::MediaStore;
use crate::error::ApiError;

/// Prefix under which media locators are exposed to clients.
const LOCATOR_PREFIX: &str = "media/";

/// Blob store writing uploads under a single root directory. Locators have
/// the form `media/<file_name>`.
#[derive(Clone)]
pub struct FsMediaStore {
    pub root: PathBuf,
}

impl FsMediaStore {
    fn blob_path(&self, locator: &str) -> PathBuf {
        let file_name = locator.strip_prefix(LOCATOR_PREFIX).unwrap_or(locator);
        self.root.join(file_name)
    }
}

impl MediaStore for FsMediaStore {
    async fn store(&self, name: &str, bytes: &[u8]) -> Result<String, ApiError> {
        let name = base_name(name)?;
        tokio::fs::create_dir_all(&self.root)
            .await
            .context("create media root")?;

        let taken = tokio::fs::try_exists(self.root.join(name))
            .await
            .context("probe media name")?;
        let file_name = if taken {
            randomize_file_name(name)
        } else {
            name.to_owned()
        };

        tokio::fs::write(self.root.join(&file_name), bytes)
            .await
            .context("write media blob")?;
        Ok(format!("{LOCATOR_PREFIX}{file_name}"))
    }

    async fn delete(&self, locator: &str) -> Result<(), ApiError> {
        tokio::fs::remove_file(self.blob_path(locator))
            .await
            .context("remove media blob")?;
        Ok(())
    }
}

/// Reduce a client-supplied file name to its final path segment so names
/// like `../../etc/passwd` cannot escape the media root.
fn base_name(name: &str) -> Result<&str, ApiError> {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .ok_or_else(|| ApiError::Validation("invalid file name".into()))?;
    Ok(base)
}

/// Insert a random 8-character alphanumeric suffix before the file extension
/// to disambiguate a name collision.
fn randomize_file_name(name: &str) -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();
    match name.rsplit_once('.') {
        Some((stem, ext)) => format!("{stem}_{suffix}.{ext}"),
        None => format!("{name}_{suffix}"),
    }
}
