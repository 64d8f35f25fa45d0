use crate::domain::repository::{FollowRepository, UserRepository};
use crate::domain::types::Profile;
use crate::error::ApiError;

/// Compose a user with both sides of the follow graph. Pure read.
pub struct GetProfileUseCase<U: UserRepository, F: FollowRepository> {
    pub users: U,
    pub follows: F,
}

impl<U: UserRepository, F: FollowRepository> GetProfileUseCase<U, F> {
    pub async fn execute(&self, user_id: i32) -> Result<Profile, ApiError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::UserNotFound)?;
        let followers = self.follows.list_followers(user_id).await?;
        let following = self.follows.list_following(user_id).await?;
        Ok(Profile {
            id: user.id,
            name: user.name,
            followers,
            following,
        })
    }
}
