//! Farm aggregate

pub mod errors;
pub mod model;
pub mod repository;

pub use errors::FarmError;
pub use model::{Farm, FarmSize, MAX_FARM_SIZE};
pub use repository::FarmRepository;
