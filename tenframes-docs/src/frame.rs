//! Ten-frame diagram generation.
//!
//! A ten-frame is a 5 × 2 grid of unit cells with `count` discs placed in
//! column-major, bottom-to-top order.

use tenframes_core::model::{FrameCount, GRID_COLUMNS, GRID_ROWS};

use crate::tikz::{Point, TikzCommand, TikzPicture};

/// Disc radius in centimetres.
pub const MARKER_RADIUS_CM: f64 = 0.4;

/// Builds the diagram for a frame holding `count` markers.
#[must_use]
pub fn render_ten_frame(count: FrameCount) -> TikzPicture {
    let mut picture = TikzPicture::new();
    picture.push(TikzCommand::grid(GRID_COLUMNS, GRID_ROWS));
    for cell in count.cells() {
        picture.push(TikzCommand::filled_circle(
            Point::from(cell.center()),
            MARKER_RADIUS_CM,
        ));
    }
    picture
}
