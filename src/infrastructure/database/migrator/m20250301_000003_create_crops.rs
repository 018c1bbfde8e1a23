//! Create crops table

use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_farms::Farms;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Crops::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Crops::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Crops::Name).string().not_null())
                    .col(ColumnDef::new(Crops::PlantedArea).double().not_null())
                    .col(ColumnDef::new(Crops::FarmId).integer().not_null())
                    .col(ColumnDef::new(Crops::PlantingDate).date())
                    .col(ColumnDef::new(Crops::HarvestDate).date())
                    .col(
                        ColumnDef::new(Crops::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Crops::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_crops_farm")
                            .from(Crops::Table, Crops::FarmId)
                            .to(Farms::Table, Farms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_crops_farm_id")
                    .table(Crops::Table)
                    .col(Crops::FarmId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Crops::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Crops {
    Table,
    Id,
    Name,
    PlantedArea,
    FarmId,
    PlantingDate,
    HarvestDate,
    CreatedAt,
    UpdatedAt,
}
