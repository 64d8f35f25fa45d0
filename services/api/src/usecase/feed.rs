use crate::domain::repository::TweetRepository;
use crate::domain::types::FeedTweet;
use crate::error::ApiError;

/// Aggregate every tweet with author, attachments and liking users, most
/// liked first. The sort is stable so equally liked tweets keep their
/// storage order.
pub struct ListFeedUseCase<T: TweetRepository> {
    pub tweets: T,
}

impl<T: TweetRepository> ListFeedUseCase<T> {
    pub async fn execute(&self) -> Result<Vec<FeedTweet>, ApiError> {
        let mut rows = self.tweets.list_feed().await?;
        rows.sort_by_key(|t| std::cmp::Reverse(t.likes.len()));
        Ok(rows)
    }
}
