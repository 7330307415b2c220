//! Vidup Core Library
//!
//! This crate provides the domain models, error types, configuration, and the
//! in-memory video registry shared by the other Vidup components.

pub mod config;
pub mod error;
pub mod models;
pub mod registry;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use registry::VideoRegistry;
