//! Frame counts, identifiers and cell geometry.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Number of columns in a ten-frame grid.
pub const GRID_COLUMNS: u8 = 5;

/// Number of rows in a ten-frame grid.
pub const GRID_ROWS: u8 = 2;

/// Total cells in a ten-frame.
pub const CELL_COUNT: u8 = GRID_COLUMNS * GRID_ROWS;

/// Number of filled markers in a ten-frame, always within `0..=10`.
///
/// Out-of-range counts are rejected at construction, so a `FrameCount`
/// can never place markers outside the drawn grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameCount(pub(crate) u8);

impl FrameCount {
    /// An empty frame.
    pub const ZERO: Self = Self(0);

    /// A completely filled frame.
    pub const FULL: Self = Self(CELL_COUNT);

    /// Creates a count, rejecting anything above [`CELL_COUNT`].
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::CountOutOfRange`] if `count > 10`.
    pub const fn new(count: u8) -> Result<Self, ModelError> {
        if count > CELL_COUNT {
            return Err(ModelError::CountOutOfRange {
                count: count as u32,
                max: CELL_COUNT,
            });
        }
        Ok(Self(count))
    }

    /// Returns the raw count.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Iterates over every representable count, `0` through `10`.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=CELL_COUNT).map(Self)
    }

    /// Cells occupied by this count, in fill order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.0).map(Cell::for_marker)
    }
}

impl TryFrom<u8> for FrameCount {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for FrameCount {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s.trim().parse().map_err(|_| ModelError::CountOutOfRange {
            count: u32::MAX,
            max: CELL_COUNT,
        })?;
        let narrow = u8::try_from(value).map_err(|_| ModelError::CountOutOfRange {
            count: value,
            max: CELL_COUNT,
        })?;
        Self::new(narrow)
    }
}

impl fmt::Display for FrameCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A grid cell, addressed by zero-based column and row.
///
/// Row 0 is the bottom row in diagram coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Column, `0..5`
    pub column: u8,
    /// Row, `0..2`
    pub row: u8,
}

impl Cell {
    /// Cell for the `index`-th marker.
    ///
    /// Fills column-major, bottom to top: `(0,0)`, `(0,1)`, `(1,0)`, `(1,1)`, ...
    #[must_use]
    pub const fn for_marker(index: u8) -> Self {
        Self {
            column: index / GRID_ROWS,
            row: index % GRID_ROWS,
        }
    }

    /// Centre of the cell in grid-unit coordinates.
    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (f64::from(self.column) + 0.5, f64::from(self.row) + 0.5)
    }
}

/// Position of a frame within a worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameId {
    /// Zero-based page index
    pub page: usize,
    /// Zero-based slot index within the page
    pub slot: usize,
}

impl FrameId {
    /// Creates a frame identifier.
    #[must_use]
    pub const fn new(page: usize, slot: usize) -> Self {
        Self { page, slot }
    }

    /// Artifact file name, e.g. `tenframe03-07.tex`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("tenframe{self}.tex")
    }

    /// Whether this slot starts a new row of two.
    #[must_use]
    pub const fn starts_row(&self) -> bool {
        self.slot % 2 == 0
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.page, self.slot)
    }
}

/// A single ten-frame on a worksheet page. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    id: FrameId,
    count: FrameCount,
}

impl Frame {
    /// Creates a frame.
    #[must_use]
    pub const fn new(id: FrameId, count: FrameCount) -> Self {
        Self { id, count }
    }

    /// Position on the worksheet.
    #[must_use]
    pub const fn id(&self) -> FrameId {
        self.id
    }

    /// Number of filled markers.
    #[must_use]
    pub const fn count(&self) -> FrameCount {
        self.count
    }
}
