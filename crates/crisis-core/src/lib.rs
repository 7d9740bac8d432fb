//! Crisis Core
//!
//! This crate provides the shared foundation for the crisis pipeline,
//! including error handling, configuration, and logging setup.

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{load_config, load_config_or_default, CrisisConfig};
pub use error::{CrisisError, Result};
pub use logging::init_logging;
