//! Crop entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "crops")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub planted_area: f64,
    pub farm_id: i32,
    #[sea_orm(nullable)]
    pub planting_date: Option<Date>,
    #[sea_orm(nullable)]
    pub harvest_date: Option<Date>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::farm::Entity",
        from = "Column::FarmId",
        to = "super::farm::Column::Id",
        on_delete = "Cascade"
    )]
    Farm,
    #[sea_orm(has_many = "super::crop_fertilizer::Entity")]
    CropFertilizer,
}

impl Related<super::farm::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Farm.def()
    }
}

impl Related<super::fertilizer::Entity> for Entity {
    fn to() -> RelationDef {
        super::crop_fertilizer::Relation::Fertilizer.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::crop_fertilizer::Relation::Crop.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
