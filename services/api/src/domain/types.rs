use chrono::{DateTime, Utc};

/// Full account record. Identity fields are immutable after registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// bcrypt digest, opaque to everything but the password module.
    pub password: String,
    pub registered_at: DateTime<Utc>,
}

/// Minimal user projection used in profiles, feeds and like lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tweet {
    pub id: i32,
    pub body: String,
    pub owner_id: i32,
}

/// One feed entry: a tweet joined with its author, attachment paths and
/// liking users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedTweet {
    pub id: i32,
    pub content: String,
    pub attachments: Vec<String>,
    pub author: UserRef,
    pub likes: Vec<UserRef>,
}

/// Profile read view: a user composed with both sides of the follow graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: i32,
    pub name: String,
    pub followers: Vec<UserRef>,
    pub following: Vec<UserRef>,
}

/// Derive the account name from an email at registration: the maximal
/// leading run of word characters (letters, digits, underscore). The run
/// always stops at `@` since `@` is not a word character.
pub fn derive_name(email: &str) -> String {
    email
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}
