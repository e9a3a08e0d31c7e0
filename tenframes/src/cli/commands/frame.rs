//! `frame` command
//!
//! Prints the TikZ markup for one ten frame, exactly as it would be
//! written into a worksheet.

use std::io::Write;

use tenframes_docs::frame::render_ten_frame;

use crate::cli::args::FrameArgs;
use crate::error::TenFramesError;

/// Print a single frame's markup to stdout.
///
/// # Errors
///
/// Returns an I/O error if stdout cannot be written.
pub fn run(args: &FrameArgs) -> Result<(), TenFramesError> {
    let picture = render_ten_frame(args.count);
    let mut out = std::io::stdout().lock();
    out.write_all(picture.to_markup().as_bytes())?;
    out.flush()?;
    Ok(())
}
