//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod frame;
pub mod generate;
pub mod version;

use tokio_util::sync::CancellationToken;

use crate::cli::args::{Cli, Commands, GenerateArgs};
use crate::error::TenFramesError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// A missing subcommand runs `generate` with default arguments.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli, cancel: CancellationToken) -> Result<(), TenFramesError> {
    match cli.command {
        Some(Commands::Generate(args)) => generate::run(&args, &cancel).await,
        None => generate::run(&GenerateArgs::default(), &cancel).await,
        Some(Commands::Frame(args)) => frame::run(&args),
        Some(Commands::Completions(args)) => {
            completions::run(&args);
            Ok(())
        }
        Some(Commands::Version(args)) => {
            version::run(&args);
            Ok(())
        }
    }
}
