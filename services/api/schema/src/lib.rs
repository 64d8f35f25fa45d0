//! sea-orm entities for the chirp relational schema.

pub mod api_keys;
pub mod followers;
pub mod likes;
pub mod media;
pub mod tweets;
pub mod users;
