//! Crop <-> fertilizer join table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "crop_fertilizer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub crop_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub fertilizer_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::crop::Entity",
        from = "Column::CropId",
        to = "super::crop::Column::Id",
        on_delete = "Cascade"
    )]
    Crop,
    #[sea_orm(
        belongs_to = "super::fertilizer::Entity",
        from = "Column::FertilizerId",
        to = "super::fertilizer::Column::Id",
        on_delete = "Cascade"
    )]
    Fertilizer,
}

impl Related<super::crop::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Crop.def()
    }
}

impl Related<super::fertilizer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fertilizer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
