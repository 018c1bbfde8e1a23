//! Authentication: login and current-person lookup

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
