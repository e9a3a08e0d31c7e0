//! CLI argument definitions
//!
//! All Clap derive structs for `tenframes` command-line parsing. Running
//! the binary without a subcommand behaves like `tenframes generate`.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tenframes_core::config::PaperSize;
use tenframes_core::model::FrameCount;

use crate::error::ExitCode;
use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Printable ten-frame worksheet generator.
#[derive(Parser, Debug)]
#[command(name = "tenframes", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute (defaults to `generate`).
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "TENFRAMES_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true, env = "TENFRAMES_LOG_FORMAT")]
    pub log_format: LogFormat,
}

impl Cli {
    /// Parses `std::env::args`, exiting on error.
    ///
    /// Invalid arguments exit with [`ExitCode::USAGE_ERROR`]; `--help` and
    /// `--version` print to stdout and exit successfully.
    #[must_use]
    pub fn parse_with_default_command() -> Self {
        match Self::try_parse_with_default_from(std::env::args_os()) {
            Ok(cli) => cli,
            Err(e) if e.use_stderr() => {
                let _ = e.print();
                std::process::exit(ExitCode::USAGE_ERROR)
            }
            Err(e) => e.exit(),
        }
    }

    /// Parses `args`, treating a missing subcommand as `generate`.
    ///
    /// The arguments are parsed a second time with `generate` appended so
    /// that its flags pick up their environment variables and defaults.
    ///
    /// # Errors
    ///
    /// Returns the clap error for invalid arguments, `--help` or `--version`.
    pub fn try_parse_with_default_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let cli = Self::try_parse_from(&args)?;
        if cli.command.is_some() {
            return Ok(cli);
        }

        let mut with_default = args;
        with_default.push(OsString::from("generate"));
        Self::try_parse_from(with_default)
    }
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the worksheet and render it.
    Generate(GenerateArgs),

    /// Print the TikZ markup for a single ten frame.
    Frame(FrameArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version and build information.
    Version(VersionArgs),
}

// ============================================================================
// Generate Command
// ============================================================================

/// Arguments for `generate`.
///
/// Every flag overrides the matching field of the configuration file.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Path to a YAML worksheet configuration file.
    #[arg(short, long, env = "TENFRAMES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of pages to generate.
    #[arg(short, long, env = "TENFRAMES_PAGES")]
    pub pages: Option<usize>,

    /// Seed for the random page plans; omit for a fresh worksheet.
    #[arg(short, long, env = "TENFRAMES_SEED")]
    pub seed: Option<u64>,

    /// Heading printed on every page.
    #[arg(long)]
    pub heading: Option<String>,

    /// Paper size.
    #[arg(long)]
    pub paper: Option<PaperSize>,

    /// Renderer command line; the master document path is appended.
    #[arg(long, env = "TENFRAMES_RENDERER")]
    pub renderer: Option<String>,

    /// Give up on the renderer after this long (e.g. `90s`, `2m`).
    #[arg(long, value_parser = humantime::parse_duration)]
    pub render_timeout: Option<Duration>,

    /// Directory that receives the rendered document.
    #[arg(short, long, env = "TENFRAMES_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Write the markup but do not invoke the renderer.
    #[arg(long)]
    pub no_render: bool,

    /// Do not echo the master document to stdout.
    #[arg(long)]
    pub no_echo: bool,
}

// ============================================================================
// Frame Command
// ============================================================================

/// Arguments for `frame`.
#[derive(Args, Debug)]
pub struct FrameArgs {
    /// Number of filled cells (0-10).
    pub count: FrameCount,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: clap_complete::Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_args(cli: Cli) -> GenerateArgs {
        match cli.command {
            Some(Commands::Generate(args)) => args,
            other => panic!("Expected GenerateArgs, got {other:?}"),
        }
    }

    #[test]
    fn test_no_subcommand_defaults_to_generate() {
        let cli = Cli::try_parse_with_default_from(["tenframes"]).unwrap();
        let args = generate_args(cli);
        assert!(args.config.is_none());
        assert!(!args.no_render);
    }

    #[test]
    fn test_global_flags_without_subcommand() {
        let cli = Cli::try_parse_with_default_from(["tenframes", "-vv", "--quiet"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Some(Commands::Generate(_))));
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::try_parse_with_default_from([
            "tenframes",
            "generate",
            "--pages",
            "3",
            "--seed",
            "42",
            "--paper",
            "letter",
            "--render-timeout",
            "2m",
            "--no-render",
            "--no-echo",
        ])
        .unwrap();

        let args = generate_args(cli);
        assert_eq!(args.pages, Some(3));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.paper, Some(PaperSize::Letter));
        assert_eq!(args.render_timeout, Some(Duration::from_secs(120)));
        assert!(args.no_render);
        assert!(args.no_echo);
    }

    #[test]
    fn test_invalid_render_timeout() {
        let result =
            Cli::try_parse_with_default_from(["tenframes", "generate", "--render-timeout", "soon"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_frame_count_parsing() {
        let cli = Cli::try_parse_with_default_from(["tenframes", "frame", "7"]).unwrap();
        match cli.command {
            Some(Commands::Frame(args)) => assert_eq!(args.count.get(), 7),
            other => panic!("Expected FrameArgs, got {other:?}"),
        }

        assert!(Cli::try_parse_with_default_from(["tenframes", "frame", "11"]).is_err());
        assert!(Cli::try_parse_with_default_from(["tenframes", "frame", "-1"]).is_err());
    }

    #[test]
    fn test_help_output() {
        let result = Cli::try_parse_with_default_from(["tenframes", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_output() {
        let result = Cli::try_parse_with_default_from(["tenframes", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_version_json_format() {
        let cli =
            Cli::try_parse_with_default_from(["tenframes", "version", "--format", "json"]).unwrap();
        match cli.command {
            Some(Commands::Version(args)) => assert_eq!(args.format, OutputFormat::Json),
            other => panic!("Expected VersionArgs, got {other:?}"),
        }
    }

    #[test]
    fn test_completions_shell() {
        let cli =
            Cli::try_parse_with_default_from(["tenframes", "completions", "powershell"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completions(CompletionsArgs {
                shell: clap_complete::Shell::PowerShell
            }))
        ));
    }

    #[test]
    fn test_default_color() {
        let cli = Cli::try_parse_with_default_from(["tenframes", "version"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Human);
        assert_eq!(ColorChoice::default(), ColorChoice::Auto);
    }
}
