//! TikZ picture builders.
//!
//! A [`TikzPicture`] always renders as a balanced
//! `tikzpicture` environment; drawing commands are typed so coordinates
//! and radii are emitted consistently.

use std::fmt;

/// A point in grid-unit coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A single TikZ drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum TikzCommand {
    /// Thick unit grid spanning `from` to `to`.
    Grid {
        /// Lower-left corner
        from: Point,
        /// Upper-right corner
        to: Point,
    },
    /// Solid black disc.
    FilledCircle {
        /// Disc centre
        center: Point,
        /// Radius in centimetres
        radius_cm: f64,
    },
}

impl TikzCommand {
    /// Grid of `columns` × `rows` unit cells anchored at the origin.
    #[must_use]
    pub fn grid(columns: u8, rows: u8) -> Self {
        Self::Grid {
            from: Point::new(0.0, 0.0),
            to: Point::new(f64::from(columns), f64::from(rows)),
        }
    }

    /// Filled disc at `center`.
    #[must_use]
    pub const fn filled_circle(center: Point, radius_cm: f64) -> Self {
        Self::FilledCircle { center, radius_cm }
    }
}

impl fmt::Display for TikzCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid { from, to } => {
                write!(f, "\\draw[step=1cm,black,very thick] {from} grid {to};")
            }
            Self::FilledCircle { center, radius_cm } => {
                write!(f, "\\draw[fill=black]{center} circle ({radius_cm}cm);")
            }
        }
    }
}

/// An ordered list of drawing commands wrapped in `tikzpicture`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TikzPicture {
    commands: Vec<TikzCommand>,
}

impl TikzPicture {
    /// Creates an empty picture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a drawing command.
    pub fn push(&mut self, command: TikzCommand) {
        self.commands.push(command);
    }

    /// Centres of all filled circles, in drawing order.
    pub fn marker_centers(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|command| match command {
            TikzCommand::FilledCircle { center, .. } => Some(*center),
            TikzCommand::Grid { .. } => None,
        })
    }

    /// Number of grid commands.
    #[must_use]
    pub fn grid_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, TikzCommand::Grid { .. }))
            .count()
    }

    /// Standalone markup, newline-terminated, ready to be written to a file.
    #[must_use]
    pub fn to_markup(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for TikzPicture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\\begin{tikzpicture}\n")?;
        for command in &self.commands {
            writeln!(f, "{command}")?;
        }
        f.write_str("\\end{tikzpicture}")
    }
}
