//! Person aggregate: accounts, roles and passwords

pub mod errors;
pub mod model;
pub mod password;
pub mod repository;
pub mod role;

pub use errors::PersonError;
pub use model::{Person, MIN_USERNAME_LENGTH};
pub use password::{Password, PasswordHasher, MIN_PASSWORD_LENGTH};
pub use repository::PersonRepository;
pub use role::{Resource, Role};
