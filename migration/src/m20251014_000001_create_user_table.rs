use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EnzonicUser::Table)
                    .if_not_exists()
                    .col(pk_auto(EnzonicUser::Id))
                    .col(string_uniq(EnzonicUser::Email))
                    .col(string(EnzonicUser::PasswordHash))
                    .col(string_null(EnzonicUser::DisplayName))
                    .col(timestamp(EnzonicUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EnzonicUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EnzonicUser {
    Table,
    Id,
    Email,
    PasswordHash,
    DisplayName,
    CreatedAt,
}
