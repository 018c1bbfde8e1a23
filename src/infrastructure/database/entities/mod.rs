//! Database entities module

pub mod crop;
pub mod crop_fertilizer;
pub mod farm;
pub mod fertilizer;
pub mod person;

pub use crop::Entity as Crop;
pub use crop_fertilizer::Entity as CropFertilizer;
pub use farm::Entity as Farm;
pub use fertilizer::Entity as Fertilizer;
pub use person::Entity as Person;
