use sea_orm::entity::prelude::*;

/// Uploaded image reference. A row is staged before its tweet exists
/// (`tweet_id` null) and linked when the tweet is created. Rows that never
/// get linked are allowed to persist.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "media")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub media_path: Option<String>,
    pub tweet_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tweets::Entity",
        from = "Column::TweetId",
        to = "super::tweets::Column::Id"
    )]
    Tweet,
}

impl Related<super::tweets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tweet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
