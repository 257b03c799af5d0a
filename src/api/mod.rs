//! Backend API access.

pub mod gateway;
pub mod jwt;

pub use gateway::{ApiGateway, DEFAULT_API_URL};
