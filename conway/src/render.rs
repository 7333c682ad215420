// render.rs - Text rendering of a grid

use std::fmt;

use crate::grid::Grid;

pub const DEFAULT_ALIVE_REPRESENTATION: &str = "*";
pub const DEFAULT_DEAD_REPRESENTATION: &str = "-";
pub const DEFAULT_DELIMITER: &str = " ";

/// Strings used for live cells, dead cells, and between cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Representation {
    pub alive: String,
    pub dead: String,
    pub delimiter: String,
}

impl Default for Representation {
    fn default() -> Self {
        Self {
            alive: DEFAULT_ALIVE_REPRESENTATION.to_string(),
            dead: DEFAULT_DEAD_REPRESENTATION.to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

/// Borrowed grid paired with a representation, ready for `{}` formatting.
pub struct GridDisplay<'a> {
    grid: &'a Grid,
    repr: &'a Representation,
}

impl fmt::Display for GridDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.grid.rows() {
            for &cell in self.grid.row_slice(row) {
                let symbol = if cell { &self.repr.alive } else { &self.repr.dead };
                write!(f, "{symbol}{}", self.repr.delimiter)?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

impl Grid {
    pub fn display_with<'a>(&'a self, repr: &'a Representation) -> GridDisplay<'a> {
        GridDisplay { grid: self, repr }
    }

    /// Prints the grid to standard output, followed by a blank line.
    pub fn display(&self, repr: &Representation) {
        print!("{}", self.display_with(repr));
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(&Representation::default()), f)
    }
}
