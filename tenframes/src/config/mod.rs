//! Configuration module
//!
//! Loads the optional YAML worksheet file and validates the effective
//! configuration after command-line overrides are applied.

pub mod loader;
pub mod validation;

pub use loader::{ConfigLoader, DEFAULT_MAX_CONFIG_SIZE};
pub use tenframes_core::config::*;
pub use validation::{ValidationResult, Validator};
