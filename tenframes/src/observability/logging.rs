//! Logging setup.
//!
//! Logs go to stderr, either as plain lines or as newline-delimited JSON.
//! `TENFRAMES_LOG_LEVEL` takes an `EnvFilter` directive and overrides the
//! `-v` count when it parses; an invalid value falls back to the count.

use std::io::IsTerminal;

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::cli::args::ColorChoice;

/// Environment variable holding a filter directive.
pub const LOG_LEVEL_ENV: &str = "TENFRAMES_LOG_LEVEL";

/// Log line format on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Plain text, coloured when stderr is a terminal.
    #[default]
    Human,
    /// One JSON object per event.
    Json,
}

/// Level for a `-v` count: warn, info, debug, then trace from `-vvv` on.
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds the event filter from the environment directive, if usable, or
/// the verbosity count.
#[must_use]
pub fn level_filter(env_directive: Option<&str>, verbosity: u8) -> EnvFilter {
    env_directive
        .filter(|directive| !directive.trim().is_empty())
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(verbosity_to_directive(verbosity)))
}

/// Whether human-format logs should carry ANSI colour codes.
///
/// `auto` colours only a terminal, and `NO_COLOR` turns it off.
#[must_use]
pub const fn use_ansi(color: ColorChoice, stderr_is_terminal: bool, no_color: bool) -> bool {
    match color {
        ColorChoice::Auto => stderr_is_terminal && !no_color,
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let env_directive = std::env::var(LOG_LEVEL_ENV).ok();
    let filter = level_filter(env_directive.as_deref(), verbosity);
    // module paths only help when debugging
    let show_target = verbosity >= 2;

    match format {
        LogFormat::Human => {
            let ansi = use_ansi(
                color,
                std::io::stderr().is_terminal(),
                std::env::var_os("NO_COLOR").is_some(),
            );
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(ansi)
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogFormat::Json => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}
