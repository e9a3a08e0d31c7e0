//! `generate` command
//!
//! Builds the effective configuration (defaults, then the optional YAML
//! file, then flags), validates it and runs the assembler.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::assembler::Assembler;
use crate::cli::args::GenerateArgs;
use crate::config::{ConfigLoader, Validator, WorksheetConfig};
use crate::error::{ConfigError, TenFramesError};

/// Origin reported for problems that come from flags rather than a file.
const CLI_ORIGIN: &str = "<command line>";

/// Generate and render the worksheet.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or any stage of the
/// run fails.
pub async fn run(args: &GenerateArgs, cancel: &CancellationToken) -> Result<(), TenFramesError> {
    let config = effective_config(args)?;

    let mut rng = match config.seed {
        Some(seed) => {
            info!(seed, "using fixed seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let mut stdout = std::io::stdout();
    let report = Assembler::new(config)
        .run(&mut rng, &mut stdout, cancel)
        .await?;
    report.log();
    Ok(())
}

/// Loads, overrides and validates the configuration for `args`.
///
/// Validation warnings are logged; errors abort.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be loaded, a flag value is
/// unusable, or validation finds an error.
pub fn effective_config(args: &GenerateArgs) -> Result<WorksheetConfig, ConfigError> {
    let (mut config, origin) = match &args.config {
        Some(path) => (
            ConfigLoader::with_defaults().load(path)?,
            path.display().to_string(),
        ),
        None => (WorksheetConfig::default(), CLI_ORIGIN.to_string()),
    };

    apply_overrides(&mut config, args)?;
    debug!(?config, "effective configuration");

    let warnings = Validator::new().validate(&config).into_result(&origin)?;
    for issue in &warnings {
        warn!(path = %issue.path, "{}", issue.message);
    }
    Ok(config)
}

/// Applies command-line flags on top of `config`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if `--render-timeout` is not a
/// whole number of seconds.
pub fn apply_overrides(
    config: &mut WorksheetConfig,
    args: &GenerateArgs,
) -> Result<(), ConfigError> {
    if let Some(pages) = args.pages {
        config.pages = pages;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(heading) = &args.heading {
        config.heading.clone_from(heading);
    }
    if let Some(paper) = args.paper {
        config.style.paper = paper;
    }
    if let Some(renderer) = &args.renderer {
        config.renderer.command.clone_from(renderer);
    }
    if let Some(timeout) = args.render_timeout {
        if timeout.subsec_nanos() != 0 || timeout.as_secs() == 0 {
            return Err(ConfigError::InvalidValue {
                field: "--render-timeout".to_string(),
                value: humantime::format_duration(timeout).to_string(),
                expected: "a whole number of seconds, at least 1s".to_string(),
            });
        }
        config.renderer.timeout_secs = Some(timeout.as_secs());
    }
    if let Some(dir) = &args.output_dir {
        config.output.dir.clone_from(dir);
    }
    if args.no_render {
        config.output.render = false;
    }
    if args.no_echo {
        config.output.echo = false;
    }
    Ok(())
}
