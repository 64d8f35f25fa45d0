use std::path::PathBuf;

use sea_orm::DatabaseConnection;

use crate::infra::blob::FsMediaStore;
use crate::infra::db::{
    DbFollowRepository, DbLikeRepository, DbMediaRepository, DbTweetRepository, DbUserRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub media_root: PathBuf,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn follow_repo(&self) -> DbFollowRepository {
        DbFollowRepository {
            db: self.db.clone(),
        }
    }

    pub fn tweet_repo(&self) -> DbTweetRepository {
        DbTweetRepository {
            db: self.db.clone(),
        }
    }

    pub fn media_repo(&self) -> DbMediaRepository {
        DbMediaRepository {
            db: self.db.clone(),
        }
    }

    pub fn like_repo(&self) -> DbLikeRepository {
        DbLikeRepository {
            db: self.db.clone(),
        }
    }

    pub fn media_store(&self) -> FsMediaStore {
        FsMediaStore {
            root: self.media_root.clone(),
        }
    }
}
