//! Fertilizer entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fertilizer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub composition: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::crop_fertilizer::Entity")]
    CropFertilizer,
}

impl Related<super::crop::Entity> for Entity {
    fn to() -> RelationDef {
        super::crop_fertilizer::Relation::Crop.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::crop_fertilizer::Relation::Fertilizer.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
