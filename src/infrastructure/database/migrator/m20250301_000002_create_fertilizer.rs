//! Create fertilizer table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Fertilizer::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Fertilizer::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Fertilizer::Name).string().not_null())
                    .col(ColumnDef::new(Fertilizer::Brand).string().not_null())
                    .col(ColumnDef::new(Fertilizer::Composition).string().not_null())
                    .col(
                        ColumnDef::new(Fertilizer::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Fertilizer::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Fertilizer::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Fertilizer {
    Table,
    Id,
    Name,
    Brand,
    Composition,
    CreatedAt,
    UpdatedAt,
}
