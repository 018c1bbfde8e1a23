pub mod auth;
pub mod crops;
pub mod farms;
pub mod fertilizers;
pub mod health;
pub mod metrics;
pub mod persons;
pub mod request_id;
