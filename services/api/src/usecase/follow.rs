use crate::domain::repository::{FollowRepository, UserRepository};
use crate::error::ApiError;

// ── Follow ───────────────────────────────────────────────────────────────────

pub struct FollowUseCase<U: UserRepository, F: FollowRepository> {
    pub users: U,
    pub follows: F,
}

impl<U: UserRepository, F: FollowRepository> FollowUseCase<U, F> {
    /// Insert the directed edge `follower -> followee`. Self-follow is
    /// rejected, the followee must exist, and a duplicate edge is a conflict.
    pub async fn execute(&self, follower_id: i32, followee_id: i32) -> Result<(), ApiError> {
        if follower_id == followee_id {
            return Err(ApiError::SelfFollow);
        }
        if self.users.find_by_id(followee_id).await?.is_none() {
            return Err(ApiError::UserNotFound);
        }
        if self.follows.exists(follower_id, followee_id).await? {
            return Err(ApiError::AlreadyFollowing);
        }
        self.follows.insert(follower_id, followee_id).await
    }
}

// ── Unfollow ─────────────────────────────────────────────────────────────────

pub struct UnfollowUseCase<F: FollowRepository> {
    pub follows: F,
}

impl<F: FollowRepository> UnfollowUseCase<F> {
    pub async fn execute(&self, follower_id: i32, followee_id: i32) -> Result<(), ApiError> {
        if !self.follows.delete(follower_id, followee_id).await? {
            return Err(ApiError::FollowNotFound);
        }
        Ok(())
    }
}
