//! # CropFlow API
//!
//! REST API for managing farms, the crops planted on them, the fertilizers
//! applied to those crops, and the people allowed to manage all of it.
//!
//! ## Architecture
//!
//! - **domain**: entities with validating constructors, roles, repository traits
//! - **application**: use-case services over the repositories
//! - **infrastructure**: SeaORM persistence, in-memory storage, bcrypt, JWT
//! - **interfaces**: axum HTTP handlers, auth middleware, Swagger docs
//! - **server**: process lifecycle (startup, admin seed, graceful shutdown)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use infrastructure::{
    init_database, DatabaseConfig, InMemoryRepositoryProvider, SeaOrmRepositoryProvider,
};

pub use interfaces::http::{create_api_router, ApiContext};
