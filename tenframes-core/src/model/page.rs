//! Page planning.
//!
//! Each page draws its counts by shuffling `0..=10` with the caller's RNG
//! and dropping the last value, which leaves a uniformly random exclusion
//! and a uniformly random order of the other ten.

use rand::Rng;
use rand::seq::SliceRandom;

use super::frame::{CELL_COUNT, Frame, FrameCount, FrameId};
use crate::error::ModelError;

/// Frames on every page.
pub const FRAMES_PER_PAGE: usize = CELL_COUNT as usize;

/// Pages in a worksheet unless configured otherwise.
pub const DEFAULT_PAGES: usize = 10;

/// Upper bound on pages; page indices must fit two digits.
pub const MAX_PAGES: usize = 100;

/// One worksheet page: ten frames with distinct counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    index: usize,
    frames: Vec<Frame>,
    excluded: FrameCount,
}

impl Page {
    /// Plans page `index` using `rng`.
    pub fn plan<R: Rng + ?Sized>(index: usize, rng: &mut R) -> Self {
        let mut candidates: Vec<FrameCount> = FrameCount::all().collect();
        candidates.shuffle(rng);

        let excluded = candidates[FRAMES_PER_PAGE];
        let frames = candidates[..FRAMES_PER_PAGE]
            .iter()
            .enumerate()
            .map(|(slot, &count)| Frame::new(FrameId::new(index, slot), count))
            .collect();

        Self {
            index,
            frames,
            excluded,
        }
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Frames in slot order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The one count that does not appear on this page.
    #[must_use]
    pub const fn excluded(&self) -> FrameCount {
        self.excluded
    }
}

/// A complete worksheet: an ordered list of planned pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worksheet {
    pages: Vec<Page>,
}

impl Worksheet {
    /// Plans `page_count` pages, drawing from `rng` page by page.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::PageCountOutOfRange`] unless
    /// `1 <= page_count <= MAX_PAGES`.
    pub fn generate<R: Rng + ?Sized>(page_count: usize, rng: &mut R) -> Result<Self, ModelError> {
        if page_count == 0 || page_count > MAX_PAGES {
            return Err(ModelError::PageCountOutOfRange {
                pages: page_count,
                max: MAX_PAGES,
            });
        }

        let pages = (0..page_count).map(|index| Page::plan(index, rng)).collect();
        Ok(Self { pages })
    }

    /// Pages in order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Every frame on every page, in page then slot order.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.pages.iter().flat_map(|page| page.frames.iter())
    }
}
