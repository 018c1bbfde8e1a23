//! Create crop_fertilizer join table

use sea_orm_migration::prelude::*;

use super::m20250301_000002_create_fertilizer::Fertilizer;
use super::m20250301_000003_create_crops::Crops;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CropFertilizer::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CropFertilizer::CropId).integer().not_null())
                    .col(
                        ColumnDef::new(CropFertilizer::FertilizerId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CropFertilizer::CropId)
                            .col(CropFertilizer::FertilizerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_crop_fertilizer_crop")
                            .from(CropFertilizer::Table, CropFertilizer::CropId)
                            .to(Crops::Table, Crops::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_crop_fertilizer_fertilizer")
                            .from(CropFertilizer::Table, CropFertilizer::FertilizerId)
                            .to(Fertilizer::Table, Fertilizer::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CropFertilizer::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum CropFertilizer {
    Table,
    CropId,
    FertilizerId,
}
