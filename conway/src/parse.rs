// parse.rs - Loading a generation from a text file
//
// One line per row, one character per column. The grid keeps its size: short
// lines are padded dead, extra columns and extra lines are ignored.

use std::fs::File;
use std::io::{BufReader, Read};
use std::ops::ControlFlow;
use std::path::Path;

use log::{debug, info};

use crate::error::{LifeError, Result};
use crate::grid::Grid;

/// Position of the next cell to fill.
#[derive(Debug, Default)]
struct RowCursor {
    row: usize,
    column: usize,
    after_cr: bool,
}

impl RowCursor {
    /// Consumes one character. Breaks once every row has been terminated.
    fn feed(&mut self, grid: &mut Grid, ch: char, alive_char: char) -> ControlFlow<()> {
        let after_cr = std::mem::replace(&mut self.after_cr, ch == '\r');

        match ch {
            '\n' if after_cr => ControlFlow::Continue(()),  // "\r\n" ends one row, not two
            '\r' | '\n' => self.end_row(grid),
            _ => {
                if self.column < grid.columns() {
                    grid.row_mut(self.row)[self.column] = ch == alive_char;
                    self.column += 1;
                }
                ControlFlow::Continue(())
            }
        }
    }

    fn end_row(&mut self, grid: &mut Grid) -> ControlFlow<()> {
        let columns = grid.columns();
        grid.row_mut(self.row)[self.column.min(columns)..].fill(false);

        self.row += 1;
        self.column = 0;
        if self.row >= grid.rows() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl Grid {
    /// Fills the grid from `reader`, treating `alive_char` as a live cell and
    /// everything else as dead. Rows the input never reaches are left as they were.
    pub fn parse_from_reader<R: Read>(&mut self, mut reader: R, alive_char: char) -> std::io::Result<()> {
        if self.rows() == 0 {
            return Ok(());
        }

        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = String::from_utf8_lossy(&bytes);

        let mut cursor = RowCursor::default();
        for ch in text.chars() {
            if cursor.feed(self, ch, alive_char).is_break() {
                debug!("all {} rows filled, ignoring the rest of the input", self.rows());
                break;
            }
        }
        Ok(())
    }

    /// Opens `path` and fills the grid from it. The file is closed on return.
    pub fn parse_from_file(&mut self, path: impl AsRef<Path>, alive_char: char) -> Result<()> {
        let path = path.as_ref();
        let file_access = |source| LifeError::FileAccess { path: path.to_path_buf(), source };

        let file = File::open(path).map_err(file_access)?;
        self.parse_from_reader(BufReader::new(file), alive_char)
            .map_err(file_access)?;

        info!("loaded {} live cells from {}", self.population(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str, rows: usize, columns: usize) -> Grid {
        let mut grid = Grid::new(false, rows, columns);
        grid.parse_from_reader(text.as_bytes(), '*').unwrap();
        grid
    }

    #[test]
    fn test_short_rows_are_padded_dead() {
        let mut grid = Grid::new(true, 2, 4);
        grid.parse_from_reader("*\n**\n".as_bytes(), '*').unwrap();

        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(0, 0), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let grid = parse("-*-***\n*\n", 2, 3);
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_extra_rows_are_ignored() {
        let grid = parse("*\n*\n*\n*\n", 2, 1);
        assert_eq!(grid.population(), 2);
        assert_eq!(grid.rows(), 2);
    }

    #[test]
    fn test_alive_char_mismatch_is_dead() {
        let grid = parse("ooo\nooo\n", 2, 3);
        assert_eq!(grid.population(), 0);

        let mut grid = Grid::new(false, 2, 3);
        grid.parse_from_reader("ooo\nooo\n".as_bytes(), 'o').unwrap();
        assert_eq!(grid.population(), 6);
    }

    #[test]
    fn test_crlf_is_one_terminator() {
        let grid = parse("*-\r\n-*\r\n", 2, 2);
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_lone_cr_and_blank_lines_end_rows() {
        let grid = parse("*\r\r-*\n", 3, 2);
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(0, 0), (2, 1)]);
    }

    #[test]
    fn test_unterminated_last_line() {
        let grid = parse("**\n*", 3, 2);
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn test_multibyte_alive_char_is_one_column() {
        let mut grid = Grid::new(false, 1, 3);
        grid.parse_from_reader("█-█\n".as_bytes(), '█').unwrap();
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(0, 0), (0, 2)]);
    }

    #[test]
    fn test_empty_grid_accepts_any_input() {
        let grid = parse("***\n***\n", 0, 0);
        assert_eq!(grid.population(), 0);

        let grid = parse("***\n***\n", 2, 0);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_parse_from_file() {
        let path = std::env::temp_dir().join(format!("conway-parse-{}.txt", std::process::id()));
        std::fs::write(&path, "-*-\n--*\n***\n").unwrap();

        let mut grid = Grid::new(false, 5, 5);
        grid.parse_from_file(&path, '*').unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            grid.live_cells().collect::<Vec<_>>(),
            vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn test_missing_file_is_file_access_error() {
        let mut grid = Grid::new(false, 2, 2);
        let err = grid.parse_from_file("this/file/does/not/exist.txt", '*').unwrap_err();

        assert!(matches!(err, LifeError::FileAccess { .. }));
        assert_eq!(grid, Grid::new(false, 2, 2));
    }
}
