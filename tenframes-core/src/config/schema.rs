//! Configuration schema types
//!
//! These types are deserialized from an optional YAML worksheet file and
//! then overridden by command-line flags. Every field has a default, and
//! the defaults reproduce the classic worksheet: ten pages headed
//! "Ten Frames", A4 with 10mm margins, rendered by `pdflatex`.

use serde::Deserialize;
use std::path::PathBuf;

use crate::model::DEFAULT_PAGES;

// ============================================================================
// Top-Level Configuration
// ============================================================================

/// Root configuration for one worksheet run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields, default)]
pub struct WorksheetConfig {
    /// Number of pages to generate
    pub pages: usize,

    /// RNG seed; when absent the generator seeds from the OS
    pub seed: Option<u64>,

    /// Section heading printed at the top of every page
    pub heading: String,

    /// Page styling
    pub style: StyleConfig,

    /// External renderer invocation
    pub renderer: RendererConfig,

    /// Output handling
    pub output: OutputConfig,
}

impl Default for WorksheetConfig {
    fn default() -> Self {
        Self {
            pages: DEFAULT_PAGES,
            seed: None,
            heading: DEFAULT_HEADING.to_string(),
            style: StyleConfig::default(),
            renderer: RendererConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Heading used when none is configured.
pub const DEFAULT_HEADING: &str = "Ten Frames";

// ============================================================================
// Style
// ============================================================================

/// Document class and page geometry options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields, default)]
pub struct StyleConfig {
    /// Document class font size option, e.g. `24pt`
    pub font_size: String,

    /// Paper size
    pub paper: PaperSize,

    /// Page margin as a LaTeX length, e.g. `10mm`
    pub margin: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_size: "24pt".to_string(),
            paper: PaperSize::default(),
            margin: "10mm".to_string(),
        }
    }
}

/// Supported paper sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum PaperSize {
    /// ISO A4
    #[default]
    A4,
    /// ISO A5
    A5,
    /// US Letter
    Letter,
}

impl PaperSize {
    /// The `geometry` package option for this size.
    #[must_use]
    pub const fn geometry_option(self) -> &'static str {
        match self {
            Self::A4 => "a4paper",
            Self::A5 => "a5paper",
            Self::Letter => "letterpaper",
        }
    }
}

// ============================================================================
// Renderer
// ============================================================================

/// How the external renderer is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields, default)]
pub struct RendererConfig {
    /// Command line, split with shell quoting rules; the master document
    /// path is appended as the final argument
    pub command: String,

    /// Give up on the renderer after this many seconds
    pub timeout_secs: Option<u64>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_RENDERER.to_string(),
            timeout_secs: None,
        }
    }
}

/// Renderer used when none is configured.
pub const DEFAULT_RENDERER: &str = "pdflatex";

// ============================================================================
// Output
// ============================================================================

/// What happens to the generated artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields, default)]
pub struct OutputConfig {
    /// Directory that receives the rendered document
    pub dir: PathBuf,

    /// Echo the master markup to stdout
    pub echo: bool,

    /// Invoke the renderer at all
    pub render: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            echo: true,
            render: true,
        }
    }
}
