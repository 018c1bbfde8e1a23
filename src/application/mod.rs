//! Application layer: use-case orchestration over the domain repositories

pub mod crops;
pub mod farms;
pub mod fertilizers;
pub mod identity;

pub use crops::{CropService, NewCrop, UpdateCrop};
pub use farms::{FarmService, UpdateFarm};
pub use fertilizers::{FertilizerService, UpdateFertilizer};
pub use identity::{AuthResult, AuthService, PersonService};
