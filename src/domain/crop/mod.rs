//! Crop aggregate

pub mod errors;
pub mod model;
pub mod repository;

pub use errors::CropError;
pub use model::Crop;
pub use repository::CropRepository;
