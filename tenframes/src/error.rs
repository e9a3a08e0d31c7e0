//! Error types for `tenframes`
//!
//! Aggregates the core, markup and renderer errors behind one top-level
//! type and maps each to a process exit code.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub use tenframes_core::error::{ConfigError, ModelError, Severity, ValidationIssue};
pub use tenframes_docs::error::MarkupError;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `tenframes` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// Configuration error (invalid YAML, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (cannot create or write working files)
    pub const IO_ERROR: i32 = 3;

    /// Renderer missing, failed, or timed out
    pub const RENDER_ERROR: i32 = 4;

    /// Generated markup failed its structural check
    pub const MARKUP_ERROR: i32 = 5;

    /// Usage error (invalid arguments)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `tenframes` operations.
#[derive(Debug, Error)]
pub enum TenFramesError {
    /// Configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Invalid model parameters (page count, frame count)
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Markup construction error
    #[error(transparent)]
    Markup(#[from] MarkupError),

    /// External renderer error
    #[error(transparent)]
    Render(#[from] RenderError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TenFramesError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Model(_) => ExitCode::USAGE_ERROR,
            Self::Markup(_) => ExitCode::MARKUP_ERROR,
            Self::Render(RenderError::Cancelled) => ExitCode::INTERRUPTED,
            Self::Render(_) => ExitCode::RENDER_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Renderer Errors
// ============================================================================

/// Failures while invoking the external renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The renderer command line is empty
    #[error("renderer command is empty")]
    EmptyCommand,

    /// The renderer command line has unbalanced quoting
    #[error("cannot parse renderer command: {0}")]
    InvalidCommand(String),

    /// The renderer program is not on `PATH`
    #[error("renderer '{program}' not found; is it installed and on PATH?")]
    NotFound {
        /// Program that could not be located
        program: String,
    },

    /// The renderer could not be started or awaited
    #[error("failed to run renderer '{program}': {source}")]
    SpawnFailed {
        /// Program being run
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The renderer exited unsuccessfully
    #[error("renderer '{program}' failed ({})", code.map_or_else(|| "killed by signal".to_string(), |c| format!("exit status {c}")))]
    NonZeroExit {
        /// Program that failed
        program: String,
        /// Exit status, if the process exited normally
        code: Option<i32>,
    },

    /// The renderer ran past the configured timeout
    #[error("renderer '{program}' did not finish within {}", humantime::format_duration(*after))]
    Timeout {
        /// Program that timed out
        program: String,
        /// Configured limit
        after: Duration,
    },

    /// Rendering was cancelled by a shutdown signal
    #[error("rendering cancelled")]
    Cancelled,

    /// Copying the rendered document out of the working directory failed
    #[error("cannot save rendered document to {path}: {source}")]
    Collect {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for `tenframes` operations.
pub type Result<T> = std::result::Result<T, TenFramesError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::CONFIG_ERROR, 2);
        assert_eq!(ExitCode::IO_ERROR, 3);
        assert_eq!(ExitCode::RENDER_ERROR, 4);
        assert_eq!(ExitCode::MARKUP_ERROR, 5);
        assert_eq!(ExitCode::USAGE_ERROR, 64);
        assert_eq!(ExitCode::INTERRUPTED, 130);
        assert_eq!(ExitCode::TERMINATED, 143);
    }

    #[test]
    fn test_exit_code_mapping() {
        let cases: Vec<(TenFramesError, i32)> = vec![
            (
                ConfigError::MissingFile {
                    path: PathBuf::from("/x"),
                }
                .into(),
                ExitCode::CONFIG_ERROR,
            ),
            (
                ModelError::PageCountOutOfRange { pages: 0, max: 100 }.into(),
                ExitCode::USAGE_ERROR,
            ),
            (
                MarkupError::Unclosed {
                    open: vec!["document".into()],
                }
                .into(),
                ExitCode::MARKUP_ERROR,
            ),
            (
                RenderError::NonZeroExit {
                    program: "pdflatex".into(),
                    code: Some(1),
                }
                .into(),
                ExitCode::RENDER_ERROR,
            ),
            (RenderError::Cancelled.into(), ExitCode::INTERRUPTED),
            (
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "x").into(),
                ExitCode::IO_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.exit_code(), expected, "Wrong exit code for {err}");
        }
    }

    #[test]
    fn test_non_zero_exit_display() {
        let err = RenderError::NonZeroExit {
            program: "pdflatex".into(),
            code: Some(1),
        };
        assert_eq!(err.to_string(), "renderer 'pdflatex' failed (exit status 1)");

        let err = RenderError::NonZeroExit {
            program: "pdflatex".into(),
            code: None,
        };
        assert_eq!(err.to_string(), "renderer 'pdflatex' failed (killed by signal)");
    }

    #[test]
    fn test_timeout_display() {
        let err = RenderError::Timeout {
            program: "pdflatex".into(),
            after: Duration::from_secs(90),
        };
        assert_eq!(
            err.to_string(),
            "renderer 'pdflatex' did not finish within 1m 30s"
        );
    }
}
