//! External renderer invocation.
//!
//! Runs the configured typesetting command (by default `pdflatex`) on the
//! master document. The command runs inside the working directory so the
//! master's relative `\input` references resolve. Its stdout is sent to our
//! stderr, keeping stdout for the echoed markup.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tenframes_core::config::RendererConfig;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::error::RenderError;

/// A parsed renderer command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    program: String,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl Renderer {
    /// Splits the configured command line with shell quoting rules.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidCommand`] for unbalanced quotes and
    /// [`RenderError::EmptyCommand`] if no program is named.
    pub fn from_config(config: &RendererConfig) -> Result<Self, RenderError> {
        let mut words = shlex::split(&config.command)
            .ok_or_else(|| RenderError::InvalidCommand(config.command.clone()))?
            .into_iter();
        let program = words.next().ok_or(RenderError::EmptyCommand)?;

        Ok(Self {
            program,
            args: words.collect(),
            timeout: config.timeout_secs.map(Duration::from_secs),
        })
    }

    /// Program name, as given on the command line.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Leading arguments; the master path follows them.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Configured time limit.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Renders `master` with `cwd` as the working directory.
    ///
    /// Nothing is spawned if `cancel` has already fired; a running child is
    /// killed if `cancel` fires or the timeout elapses.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::NotFound`] if the program is not installed,
    /// [`RenderError::SpawnFailed`] if it cannot be run,
    /// [`RenderError::NonZeroExit`] if it reports failure,
    /// [`RenderError::Timeout`] or [`RenderError::Cancelled`] if it was
    /// stopped early.
    pub async fn render(
        &self,
        master: &Path,
        cwd: &Path,
        cancel: &CancellationToken,
    ) -> Result<(), RenderError> {
        if cancel.is_cancelled() {
            return Err(RenderError::Cancelled);
        }
        debug!(program = %self.program, args = ?self.args, master = %master.display(), "starting renderer");

        let mut child = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .arg(master)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(std::io::stderr())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| self.spawn_error(source))?;

        let timeout = async {
            match self.timeout {
                Some(after) => tokio::time::sleep(after).await,
                None => std::future::pending().await,
            }
        };

        let stopped = tokio::select! {
            status = child.wait() => Stopped::Exited(status),
            () = cancel.cancelled() => Stopped::Cancelled,
            () = timeout => Stopped::TimedOut,
        };

        let status = match stopped {
            Stopped::Exited(status) => status.map_err(|source| self.spawn_error(source))?,
            Stopped::Cancelled => {
                let _ = child.kill().await;
                return Err(RenderError::Cancelled);
            }
            Stopped::TimedOut => {
                let _ = child.kill().await;
                return Err(RenderError::Timeout {
                    program: self.program.clone(),
                    after: self.timeout.unwrap_or_default(),
                });
            }
        };

        if !status.success() {
            return Err(RenderError::NonZeroExit {
                program: self.program.clone(),
                code: status.code(),
            });
        }

        info!(program = %self.program, "renderer finished");
        Ok(())
    }

    fn spawn_error(&self, source: std::io::Error) -> RenderError {
        if source.kind() == std::io::ErrorKind::NotFound {
            RenderError::NotFound {
                program: self.program.clone(),
            }
        } else {
            RenderError::SpawnFailed {
                program: self.program.clone(),
                source,
            }
        }
    }
}

enum Stopped {
    Exited(std::io::Result<std::process::ExitStatus>),
    Cancelled,
    TimedOut,
}
