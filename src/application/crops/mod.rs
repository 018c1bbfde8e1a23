//! Crop use-cases, including fertilizer applications

pub mod service;

pub use service::{CropService, NewCrop, UpdateCrop};
