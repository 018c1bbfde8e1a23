//! Farm use-cases

pub mod service;

pub use service::{FarmService, UpdateFarm};
