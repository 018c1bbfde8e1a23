//! Fertilizer aggregate

pub mod errors;
pub mod model;
pub mod repository;

pub use errors::FertilizerError;
pub use model::Fertilizer;
pub use repository::FertilizerRepository;
