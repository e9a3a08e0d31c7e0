//! Master document layout.
//!
//! Every page gets a starred section heading and one full-width `figure*`
//! holding ten `.5\textwidth` subfigures, two per row. Each subfigure
//! pulls in its frame with `\input`, so the frame artifacts must sit next
//! to the master document when it is rendered.

use tenframes_core::config::{StyleConfig, WorksheetConfig};
use tenframes_core::model::{Frame, Page, Worksheet};

use crate::error::MarkupError;
use crate::escape::{escape_latex, is_safe_file_name};
use crate::latex::{Command, EndStyle, Environment, LatexWriter};

/// File name of the master document inside the working directory.
pub const MASTER_FILE_NAME: &str = "tenframes.tex";

/// Extra space above every row of two frames.
const ROW_SPACING: &str = "10mm";

/// Presentation settings for the master document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Heading text, unescaped
    pub heading: String,
    /// Document class and geometry
    pub style: StyleConfig,
}

impl From<&WorksheetConfig> for LayoutOptions {
    fn from(config: &WorksheetConfig) -> Self {
        Self {
            heading: config.heading.clone(),
            style: config.style.clone(),
        }
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::from(&WorksheetConfig::default())
    }
}

/// Renders the master document for `sheet`.
///
/// # Errors
///
/// Returns [`MarkupError`] if nesting breaks or a frame file name is not
/// safe to `\input`.
pub fn render_master(sheet: &Worksheet, options: &LayoutOptions) -> Result<String, MarkupError> {
    let mut w = LatexWriter::new();

    write_preamble(&mut w, &options.style);
    w.begin(&Environment::new("document"));

    let heading = escape_latex(&options.heading);
    for page in sheet.pages() {
        write_page(&mut w, page, &heading)?;
    }

    w.end("document", EndStyle::Line)?;
    w.finish()
}

fn write_preamble(w: &mut LatexWriter, style: &StyleConfig) {
    w.command(
        &Command::new("documentclass")
            .option(style.font_size.as_str())
            .arg("article"),
    );
    w.command(&Command::new("usepackage").arg("geometry"));
    w.command(&Command::new("geometry").arg(format!(
        "{}, margin={}",
        style.paper.geometry_option(),
        style.margin
    )));
    w.command(&Command::new("usepackage").arg("subcaption"));
    w.command(&Command::new("usepackage").arg("tikz"));
    w.blank();
    w.command(&Command::new("pagestyle").arg("empty"));
    w.blank();
}

fn write_page(w: &mut LatexWriter, page: &Page, heading: &str) -> Result<(), MarkupError> {
    w.command(&Command::new("section").starred().arg(format!("\\Huge{{{heading}}}")));
    w.begin(&Environment::new("figure*").option("h!"));

    for frame in page.frames() {
        write_frame_entry(w, frame)?;
    }

    w.end("figure*", EndStyle::Line)?;
    w.command(&Command::new("pagebreak"));
    Ok(())
}

fn write_frame_entry(w: &mut LatexWriter, frame: &Frame) -> Result<(), MarkupError> {
    let id = frame.id();
    let file_name = id.file_name();
    if !is_safe_file_name(&file_name) {
        return Err(MarkupError::UnsafeFileName(file_name));
    }

    if id.starts_row() {
        w.command(&Command::new("vspace").starred().arg(ROW_SPACING));
    }
    w.comment(&format!("FRAME: {file_name}"));

    let embed = Command::new("resizebox")
        .arg(".95\\textwidth")
        .arg("!")
        .arg(Command::new("input").arg(file_name).to_string());

    w.begin(&Environment::new("subfigure").arg(".5\\textwidth"));
    w.line("    \\centering{");
    w.line(format!("        {embed}"));
    w.line("    }");

    // Left-hand frames keep their partner on the same line.
    let style = if id.starts_row() {
        EndStyle::Joined
    } else {
        EndStyle::Paragraph
    };
    w.end("subfigure", style)
}
