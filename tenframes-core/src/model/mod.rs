//! Worksheet model.
//!
//! A [`Worksheet`] is an ordered list of [`Page`]s; each page holds ten
//! [`Frame`]s whose counts are a random permutation of `0..=10` with one
//! value left out.

pub mod frame;
pub mod page;

pub use frame::{CELL_COUNT, Cell, Frame, FrameCount, FrameId, GRID_COLUMNS, GRID_ROWS};
pub use page::{DEFAULT_PAGES, FRAMES_PER_PAGE, MAX_PAGES, Page, Worksheet};
