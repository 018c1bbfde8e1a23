//! Fertilizer use-cases

pub mod service;

pub use service::{FertilizerService, UpdateFertilizer};
