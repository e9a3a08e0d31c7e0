//! `tenframes` - printable ten-frame worksheet generator

use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

use tenframes::cli::args::Cli;
use tenframes::cli::commands;
use tenframes::error::{ExitCode, RenderError, TenFramesError};
use tenframes::observability::init_logging;
use tokio_util::sync::CancellationToken;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse_with_default_command();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    let cancel = CancellationToken::new();
    let signal_exit = Arc::new(AtomicI32::new(ExitCode::INTERRUPTED));

    // First signal cancels the render, a second one exits immediately
    tokio::spawn({
        let cancel = cancel.clone();
        let signal_exit = Arc::clone(&signal_exit);
        async move {
            let mut sigterm =
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                    .expect("failed to register SIGTERM handler");

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = sigterm.recv() => signal_exit.store(ExitCode::TERMINATED, Ordering::SeqCst),
            }

            eprintln!("\nCancelling... (press Ctrl+C again to force)");
            cancel.cancel();

            tokio::select! {
                _ = tokio::signal::ctrl_c() => std::process::exit(ExitCode::INTERRUPTED),
                _ = sigterm.recv() => std::process::exit(ExitCode::TERMINATED),
            }
        }
    });

    let result = commands::dispatch(cli, cancel).await;

    match result {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e @ TenFramesError::Render(RenderError::Cancelled)) => {
            eprintln!("error: {e}");
            std::process::exit(signal_exit.load(Ordering::SeqCst));
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
