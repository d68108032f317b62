//! # Gymdesk Common Library
//!
//! Shared code for the Gymdesk client layer:
//! - Common error types
//! - Backend endpoint configuration loading

pub mod config;
pub mod error;

pub use config::BackendConfig;
pub use error::{Error, Result};
