use sea_orm_migration::prelude::*;

mod m20250801_000001_create_users;
mod m20250801_000002_create_api_keys;
mod m20250801_000003_create_followers;
mod m20250801_000004_create_tweets;
mod m20250801_000005_create_media;
mod m20250801_000006_create_likes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_users::Migration),
            Box::new(m20250801_000002_create_api_keys::Migration),
            Box::new(m20250801_000003_create_followers::Migration),
            Box::new(m20250801_000004_create_tweets::Migration),
            Box::new(m20250801_000005_create_media::Migration),
            Box::new(m20250801_000006_create_likes::Migration),
        ]
    }
}
