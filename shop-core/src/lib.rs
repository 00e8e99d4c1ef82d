//! shop-core: Shared infrastructure for the perfume-shop services.
pub mod config;
pub mod error;
pub mod observability;
