//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_farms;
mod m20250301_000002_create_fertilizer;
mod m20250301_000003_create_crops;
mod m20250301_000004_create_crop_fertilizer;
mod m20250301_000005_create_person;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_farms::Migration),
            Box::new(m20250301_000002_create_fertilizer::Migration),
            Box::new(m20250301_000003_create_crops::Migration),
            Box::new(m20250301_000004_create_crop_fertilizer::Migration),
            Box::new(m20250301_000005_create_person::Migration),
        ]
    }
}
