//! Crop endpoints, including the farm-scoped and fertilizer sub-resources

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
