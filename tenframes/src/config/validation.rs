//! Configuration validation
//!
//! Semantic checks on the effective [`WorksheetConfig`], run after the
//! file has been loaded and command-line overrides applied. All issues
//! are collected rather than stopping at the first one.

use std::sync::LazyLock;

use regex::Regex;
use tenframes_core::config::WorksheetConfig;
use tenframes_core::error::{ConfigError, Severity, ValidationIssue};
use tenframes_core::model::MAX_PAGES;

/// Headings longer than this no longer fit on one line at `\Huge`.
const LONG_HEADING: usize = 40;

static FONT_SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]?pt$").expect("valid regex"));

static LENGTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(\.[0-9]+)?(pt|mm|cm|in|em|ex|bp|pc)$").expect("valid regex")
});

// ============================================================================
// Public API
// ============================================================================

/// Result of configuration validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (prevent the run).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts errors into a [`ConfigError::ValidationError`] for `origin`.
    ///
    /// # Errors
    ///
    /// Returns the validation error if any error-level issue was found.
    pub fn into_result(self, origin: &str) -> Result<Vec<ValidationIssue>, ConfigError> {
        if self.has_errors() {
            return Err(ConfigError::ValidationError {
                path: origin.to_string(),
                errors: self.errors,
            });
        }
        Ok(self.warnings)
    }
}

/// Configuration validator.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a configuration and returns every issue found.
    pub fn validate(&mut self, config: &WorksheetConfig) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        self.validate_pages(config);
        self.validate_heading(config);
        self.validate_style(config);
        self.validate_renderer(config);
        self.validate_output(config);

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    fn validate_pages(&mut self, config: &WorksheetConfig) {
        if config.pages == 0 {
            self.add_error("pages", "must be at least 1");
        } else if config.pages > MAX_PAGES {
            self.add_error("pages", &format!("must be at most {MAX_PAGES}"));
        }
    }

    fn validate_heading(&mut self, config: &WorksheetConfig) {
        if config.heading.trim().is_empty() {
            self.add_error("heading", "cannot be empty");
        } else if config.heading.chars().any(char::is_control) {
            self.add_error(
                "heading",
                "cannot contain line breaks or other control characters",
            );
        } else if config.heading.chars().count() > LONG_HEADING {
            self.add_warning(
                "heading",
                &format!("is longer than {LONG_HEADING} characters and may wrap"),
            );
        }
    }

    fn validate_style(&mut self, config: &WorksheetConfig) {
        if !FONT_SIZE.is_match(&config.style.font_size) {
            self.add_error(
                "style.font_size",
                &format!(
                    "'{}' is not a point size such as 12pt",
                    config.style.font_size
                ),
            );
        }
        if !LENGTH.is_match(&config.style.margin) {
            self.add_error(
                "style.margin",
                &format!("'{}' is not a length such as 10mm", config.style.margin),
            );
        }
    }

    fn validate_renderer(&mut self, config: &WorksheetConfig) {
        if config.renderer.timeout_secs == Some(0) {
            self.add_error("renderer.timeout_secs", "must be at least 1 second");
        }

        if !config.output.render {
            return;
        }
        match shlex::split(&config.renderer.command) {
            None => self.add_error("renderer.command", "has unbalanced quotes"),
            Some(words) if words.is_empty() => {
                self.add_error("renderer.command", "cannot be empty");
            }
            Some(_) => {}
        }
    }

    fn validate_output(&mut self, config: &WorksheetConfig) {
        if !config.output.echo && !config.output.render {
            self.add_warning(
                "output",
                "echo and render are both disabled; nothing will be produced",
            );
        }
        if config.output.dir.as_os_str().is_empty() {
            self.add_error("output.dir", "cannot be empty");
        }
    }

    // ========================================================================
    // Helper Methods
    // ========================================================================

    /// Adds an error to the collection.
    fn add_error(&mut self, path: &str, message: &str) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        });
    }

    /// Adds a warning to the collection.
    fn add_warning(&mut self, path: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Warning,
        });
    }
}

// ============================================================================
// Tests
// ============================================================================
