pub mod auth;
pub mod feed;
pub mod follow;
pub mod media;
pub mod profile;
pub mod tweet;
