use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Followers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Followers::UserId).integer().not_null())
                    .col(ColumnDef::new(Followers::FollowingId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(Followers::UserId)
                            .col(Followers::FollowingId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Followers::Table, Followers::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Followers::Table, Followers::FollowingId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Followers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Followers {
    Table,
    UserId,
    FollowingId,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}
