//! Core error types for `tenframes`
//!
//! Model construction and configuration error types shared across the
//! workspace.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Model Errors
// ============================================================================

/// Errors raised while constructing worksheet model values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A ten-frame holds at most ten markers.
    #[error("frame count {count} is out of range (expected 0..={max})")]
    CountOutOfRange {
        /// The rejected count
        count: u32,
        /// Largest representable count
        max: u8,
    },

    /// Page count outside what the artifact naming scheme can address.
    #[error("page count {pages} is out of range (expected 1..={max})")]
    PageCountOutOfRange {
        /// The rejected page count
        pages: usize,
        /// Largest supported page count
        max: usize,
    },
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed
    #[error("parse error in {path}{}: {message}", line.map_or_else(String::new, |l| format!(" (line {l})")))]
    ParseError {
        /// Path to the configuration file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Configuration validation failed
    #[error("validation failed for {path}: {}", summarize(errors))]
    ValidationError {
        /// Path to the configuration file, or `<cli>` for flag overrides
        path: String,
        /// List of validation issues found
        errors: Vec<ValidationIssue>,
    },

    /// Referenced configuration file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Configuration file exceeds the size limit
    #[error("config file {path} is {size} bytes (limit: {limit})")]
    TooLarge {
        /// Path to the configuration file
        path: PathBuf,
        /// Actual file size in bytes
        size: u64,
        /// Configured limit in bytes
        limit: u64,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },

    /// Reading the configuration file failed
    #[error("cannot read {path}: {source}")]
    Read {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

fn summarize(errors: &[ValidationIssue]) -> String {
    errors
        .iter()
        .filter(|issue| issue.severity == Severity::Error)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single validation issue found during configuration validation.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Dotted path to the problematic field (e.g., "renderer.command")
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Prevents the configuration from being used
    Error,
    /// Reported, but the configuration is still usable
    Warning,
}
