use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LikesTable::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(LikesTable::TweetId).integer().not_null())
                    .col(ColumnDef::new(LikesTable::UserId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(LikesTable::TweetId)
                            .col(LikesTable::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(LikesTable::Table, LikesTable::TweetId)
                            .to(Tweet::Table, Tweet::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(LikesTable::Table, LikesTable::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LikesTable::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum LikesTable {
    Table,
    TweetId,
    UserId,
}

#[derive(Iden)]
enum Tweet {
    Table,
    Id,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}
