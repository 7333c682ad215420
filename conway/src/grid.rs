// grid.rs - Grid type and generation stepping for Conway's Game of Life
//
// Edges are hard boundaries: anything outside [0, rows) x [0, columns) is dead.

use log::{debug, trace};

pub type TRow = Vec<bool>;

// Wrapping adds keep extreme coordinates well defined; they land out of range.
const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Fixed-size rectangular grid of cells, stored row by row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<TRow>,
    columns: usize,
}

impl Grid {
    /// Creates a `rows` x `columns` grid with every cell set to `default_val`.
    pub fn new(default_val: bool, rows: usize, columns: usize) -> Self {
        Self {
            cells: vec![vec![default_val; columns]; rows],
            columns,
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Whether `(row, column)` lies inside the grid. A grid without rows or
    /// without columns has no valid coordinate at all.
    pub fn inspect_coord(&self, row: isize, column: isize) -> bool {
        if self.rows() == 0 || self.columns() == 0 { return false; }
        if row < 0 || column < 0 { return false; }
        (row as usize) < self.rows() && (column as usize) < self.columns()
    }

    /// State of the cell at `(row, column)`. Out-of-range cells are dead.
    pub fn inspect_cell(&self, row: isize, column: isize) -> bool {
        if !self.inspect_coord(row, column) { return false; }
        self.cells[row as usize][column as usize]
    }

    /// Sets a cell. Writes outside the grid are dropped.
    pub fn set_cell(&mut self, row: isize, column: isize, alive: bool) {
        if self.inspect_coord(row, column) {
            self.cells[row as usize][column as usize] = alive;
        }
    }

    /// Number of live cells among the 8 surrounding positions.
    pub fn live_neighbours(&self, row: isize, column: isize) -> usize {
        NEIGHBOUR_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| self.inspect_cell(row.wrapping_add(dr), column.wrapping_add(dc)))
            .count()
    }

    /// State the cell at `(row, column)` will have in the next generation (B3/S23).
    pub fn predict_cell(&self, row: isize, column: isize) -> bool {
        if !self.inspect_coord(row, column) { return false; }

        let count = self.live_neighbours(row, column);
        trace!("cell at ({row:>2}, {column:>2}) neighbours {count}");

        match (self.inspect_cell(row, column), count) {
            (_, 3)    => true,   // Birth or survival
            (true, 2) => true,   // Survival
            _         => false,  // Death or stays dead
        }
    }

    /// Advances one generation. Every prediction reads the old generation only.
    pub fn iterate(&mut self) {
        let mut next_grid = Grid::new(false, self.rows(), self.columns());

        for row in 0..self.rows() {
            for column in 0..self.columns() {
                let prediction = self.predict_cell(row as isize, column as isize);
                trace!("cell at ({row:>2}, {column:>2}) predicts {prediction}");
                next_grid.cells[row][column] = prediction;
            }
        }

        *self = next_grid;
        debug!("generation stepped, population {}", self.population());
    }

    /// Advances `times` generations, one after the other.
    pub fn iterate_times(&mut self, times: usize) {
        for _ in 0..times {
            self.iterate();
        }
    }

    /// Live coordinates in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, &alive)| alive)
                .map(move |(column, _)| (row, column))
        })
    }

    pub fn population(&self) -> usize {
        self.cells.iter().map(|row| row.iter().filter(|&&c| c).count()).sum()
    }

    pub(crate) fn row_slice(&self, row: usize) -> &[bool] {
        &self.cells[row]
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut TRow {
        &mut self.cells[row]
    }

    pub(crate) fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(false);
        }
    }
}
