//! HTTP REST API
//!
//! - `common`: response envelope, error mapping, extractors
//! - `middleware`: bearer-token authentication and role guards
//! - `modules`: one module per resource (DTOs + handlers)
//! - `router`: route table and Swagger documentation

pub mod common;
pub mod middleware;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiContext, ApiDoc};
