//! Worksheet assembly.
//!
//! Plans the pages, writes every frame and the master document into a
//! scoped working directory, echoes the master, runs the renderer and
//! collects its output. The working directory is removed when the run
//! ends, whether it succeeded or not.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use rand::Rng;
use tempfile::TempDir;
use tenframes_core::config::WorksheetConfig;
use tenframes_core::model::{FrameCount, Page, Worksheet};
use tenframes_docs::frame::render_ten_frame;
use tenframes_docs::validate::check_nesting;
use tenframes_docs::worksheet::{LayoutOptions, MASTER_FILE_NAME, render_master};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::{RenderError, Result};
use crate::render::Renderer;

/// Name of the document the renderer is expected to produce.
pub const RENDERED_FILE_NAME: &str = "tenframes.pdf";

// ============================================================================
// Working Directory
// ============================================================================

/// Scoped directory holding one run's artifacts.
///
/// Dropping it deletes the directory and everything in it.
#[derive(Debug)]
pub struct WorkDir {
    dir: TempDir,
}

impl WorkDir {
    /// Creates a fresh directory under the system temp location.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be created.
    pub fn create() -> std::io::Result<Self> {
        let dir = tempfile::Builder::new().prefix("tenframes-").tempdir()?;
        debug!(path = %dir.path().display(), "created working directory");
        Ok(Self { dir })
    }

    /// Directory path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `contents` to `name` inside the directory.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn write(&self, name: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Deletes the directory, reporting any failure.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if removal fails.
    pub fn release(self) -> std::io::Result<()> {
        let path = self.dir.path().to_path_buf();
        self.dir.close()?;
        debug!(path = %path.display(), "released working directory");
        Ok(())
    }
}

// ============================================================================
// Run Report
// ============================================================================

/// What happened to the master document after it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Rendering was disabled.
    Skipped,
    /// The renderer succeeded; `output` is the collected document, if any.
    Rendered {
        /// Where the rendered document was copied
        output: Option<PathBuf>,
    },
}

/// Summary of one assembler run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Pages generated
    pub pages: usize,
    /// Frame files written
    pub frames_written: usize,
    /// Size of the master document
    pub master_bytes: usize,
    /// The count missing from each page, in page order
    pub excluded: Vec<FrameCount>,
    /// Renderer outcome
    pub render: RenderOutcome,
}

impl RunReport {
    /// Logs the report: totals at `info`, per-page detail at `debug`.
    pub fn log(&self) {
        match &self.render {
            RenderOutcome::Skipped => info!(
                pages = self.pages,
                frames = self.frames_written,
                master_bytes = self.master_bytes,
                "worksheet assembled, rendering skipped"
            ),
            RenderOutcome::Rendered { output } => info!(
                pages = self.pages,
                frames = self.frames_written,
                master_bytes = self.master_bytes,
                output = ?output,
                "worksheet rendered"
            ),
        }
        for (page, excluded) in self.excluded.iter().enumerate() {
            debug!(page, excluded = excluded.get(), "page plan");
        }
    }
}

// ============================================================================
// Assembler
// ============================================================================

/// Drives one worksheet run from configuration to rendered document.
#[derive(Debug, Clone)]
pub struct Assembler {
    config: WorksheetConfig,
}

impl Assembler {
    /// Creates an assembler for the effective configuration.
    #[must_use]
    pub const fn new(config: WorksheetConfig) -> Self {
        Self { config }
    }

    /// Runs the full pipeline, echoing the master document to `echo`.
    ///
    /// # Errors
    ///
    /// Fails on the first invalid parameter, I/O error, markup error or
    /// renderer failure. The working directory is removed on every path.
    pub async fn run<R, W>(
        &self,
        rng: &mut R,
        echo: &mut W,
        cancel: &CancellationToken,
    ) -> Result<RunReport>
    where
        R: Rng + ?Sized,
        W: Write + ?Sized,
    {
        let renderer = if self.config.output.render {
            Some(Renderer::from_config(&self.config.renderer)?)
        } else {
            None
        };

        let sheet = Worksheet::generate(self.config.pages, rng)?;
        let work = WorkDir::create()?;

        let mut frames_written = 0;
        for frame in sheet.frames() {
            let markup = render_ten_frame(frame.count()).to_markup();
            work.write(&frame.id().file_name(), &markup)?;
            frames_written += 1;
        }
        debug!(frames = frames_written, "wrote frame files");

        let master = render_master(&sheet, &LayoutOptions::from(&self.config))?;
        let nesting = check_nesting(&master)?;
        debug!(environments = nesting.total(), "master nesting checked");
        let master_path = work.write(MASTER_FILE_NAME, &master)?;

        if self.config.output.echo {
            echo.write_all(master.as_bytes())?;
            echo.flush()?;
        }

        let render = match renderer {
            None => RenderOutcome::Skipped,
            Some(renderer) => {
                renderer
                    .render(Path::new(MASTER_FILE_NAME), work.path(), cancel)
                    .await?;
                let output = self.collect(work.path())?;
                RenderOutcome::Rendered { output }
            }
        };
        debug!(master = %master_path.display(), "run complete");

        let report = RunReport {
            pages: sheet.pages().len(),
            frames_written,
            master_bytes: master.len(),
            excluded: sheet.pages().iter().map(Page::excluded).collect(),
            render,
        };

        work.release()?;
        Ok(report)
    }

    /// Copies the rendered document into the output directory.
    fn collect(&self, work: &Path) -> Result<Option<PathBuf>> {
        let rendered = work.join(RENDERED_FILE_NAME);
        if !rendered.is_file() {
            warn!(
                file = RENDERED_FILE_NAME,
                "renderer finished but produced no document"
            );
            return Ok(None);
        }

        let dir = &self.config.output.dir;
        let dest = dir.join(RENDERED_FILE_NAME);
        fs::create_dir_all(dir)
            .and_then(|()| fs::copy(&rendered, &dest))
            .map_err(|source| RenderError::Collect {
                path: dest.clone(),
                source,
            })?;

        info!(output = %dest.display(), "saved rendered document");
        Ok(Some(dest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tenframes_core::model::{DEFAULT_PAGES, FRAMES_PER_PAGE};

    use crate::error::TenFramesError;

    fn markup_only(pages: usize) -> WorksheetConfig {
        let mut config = WorksheetConfig::default();
        config.pages = pages;
        config.output.render = false;
        config
    }

    async fn run(config: WorksheetConfig, seed: u64) -> (Result<RunReport>, Vec<u8>) {
        let mut out = Vec::new();
        let result = Assembler::new(config)
            .run(
                &mut StdRng::seed_from_u64(seed),
                &mut out,
                &CancellationToken::new(),
            )
            .await;
        (result, out)
    }

    #[test]
    fn test_work_dir_lifecycle() {
        let work = WorkDir::create().unwrap();
        let path = work.path().to_path_buf();
        let file = work.write("tenframe00-00.tex", "x").unwrap();
        assert_eq!(file, path.join("tenframe00-00.tex"));
        assert!(file.is_file());

        work.release().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_work_dir_removed_on_drop() {
        let work = WorkDir::create().unwrap();
        let path = work.path().to_path_buf();
        drop(work);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_default_run_without_render() {
        let (result, out) = run(markup_only(DEFAULT_PAGES), 7).await;
        let report = result.unwrap();

        assert_eq!(report.pages, DEFAULT_PAGES);
        assert_eq!(report.frames_written, DEFAULT_PAGES * FRAMES_PER_PAGE);
        assert_eq!(report.excluded.len(), DEFAULT_PAGES);
        assert_eq!(report.render, RenderOutcome::Skipped);

        let master = String::from_utf8(out).unwrap();
        assert_eq!(master.len(), report.master_bytes);
        assert_eq!(master.matches("Ten Frames").count(), 10);
        assert_eq!(master.matches("\\pagebreak").count(), 10);
        assert!(master.contains("\\input{tenframe09-09.tex}"));
    }

    #[tokio::test]
    async fn test_same_seed_same_master() {
        let (a, first) = run(markup_only(3), 2024).await;
        let (b, second) = run(markup_only(3), 2024).await;
        assert_eq!(a.unwrap(), b.unwrap());
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_no_echo() {
        let mut config = markup_only(1);
        config.output.echo = false;
        let (result, out) = run(config, 1).await;
        assert!(result.unwrap().master_bytes > 0);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_page_count_rejected() {
        let (result, out) = run(markup_only(0), 1).await;
        assert!(matches!(result, Err(TenFramesError::Model(_))));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_bad_renderer_fails_before_writing() {
        let mut config = WorksheetConfig::default();
        config.renderer.command = String::new();
        let (result, out) = run(config, 1).await;
        assert!(matches!(
            result,
            Err(TenFramesError::Render(RenderError::EmptyCommand))
        ));
        assert!(out.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_render_collects_output() {
        let dest = tempfile::tempdir().unwrap();
        let mut config = markup_only(2);
        config.output.render = true;
        config.output.echo = false;
        config.output.dir = dest.path().join("out");
        config.renderer.command = r#"sh -c 'cp "$1" "${1%.tex}.pdf"' sh"#.to_string();

        let (result, _) = run(config, 5).await;
        let report = result.unwrap();
        let expected = dest.path().join("out").join(RENDERED_FILE_NAME);
        assert_eq!(
            report.render,
            RenderOutcome::Rendered {
                output: Some(expected.clone())
            }
        );
        let copied = fs::read_to_string(expected).unwrap();
        assert!(copied.starts_with("\\documentclass[24pt]{article}"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_cancelled_run_skips_renderer() {
        let dest = tempfile::tempdir().unwrap();
        let mut config = markup_only(1);
        config.output.render = true;
        config.output.echo = false;
        config.output.dir = dest.path().to_path_buf();
        config.renderer.command = r#"sh -c 'cp "$1" "${1%.tex}.pdf"' sh"#.to_string();

        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = Assembler::new(config)
            .run(&mut StdRng::seed_from_u64(3), &mut Vec::<u8>::new(), &cancel)
            .await;
        assert!(matches!(
            result,
            Err(TenFramesError::Render(RenderError::Cancelled))
        ));
        assert!(!dest.path().join(RENDERED_FILE_NAME).exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_render_without_output_warns() {
        let mut config = markup_only(1);
        config.output.render = true;
        config.output.echo = false;
        config.renderer.command = "true".to_string();

        let (result, _) = run(config, 5).await;
        assert_eq!(
            result.unwrap().render,
            RenderOutcome::Rendered { output: None }
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_render_failure_is_reported() {
        let mut config = markup_only(1);
        config.output.render = true;
        config.output.echo = false;
        config.renderer.command = "false".to_string();

        let (result, _) = run(config, 5).await;
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            TenFramesError::Render(RenderError::NonZeroExit { .. })
        ));
        assert_eq!(err.exit_code(), crate::error::ExitCode::RENDER_ERROR);
    }
}
