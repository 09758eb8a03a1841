//! Grid module - fixed-size sparse cell store
//!
//! The grid is `columns x rows` cells, each empty or holding one item.
//! Uses a flat vector in row-major order (`row * columns + column`).
//! Coordinates: (column, row) where column grows left to right and row grows
//! top to bottom, so `rows - 1` is the floor.
//!
//! Indexing outside the grid is a caller defect: [`Grid::get`], [`Grid::set`] and
//! [`Grid::take`] panic instead of clamping. Use [`Grid::contains`] first when the
//! coordinates come from a speculative move.

/// A `columns x rows` store holding at most one item per cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    columns: i32,
    rows: i32,
    cells: Vec<Option<T>>,
}

impl<T: Copy> Grid<T> {
    /// Create an empty grid
    ///
    /// # Panics
    ///
    /// Panics if either dimension is not positive, or if the cell count
    /// does not fit in an `i32`.
    pub fn new(columns: i32, rows: i32) -> Self {
        assert!(
            columns > 0 && rows > 0,
            "grid dimensions must be positive, got {columns}x{rows}"
        );
        let Some(len) = columns.checked_mul(rows) else {
            panic!("grid of {columns}x{rows} cells is too large");
        };
        Self {
            columns,
            rows,
            cells: vec![None; len as usize],
        }
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Whether (column, row) lies inside the grid
    #[inline(always)]
    pub fn contains(&self, column: i32, row: i32) -> bool {
        column >= 0 && column < self.columns && row >= 0 && row < self.rows
    }

    #[inline(always)]
    fn index(&self, column: i32, row: i32) -> usize {
        assert!(
            self.contains(column, row),
            "cell ({column}, {row}) is outside the {}x{} grid",
            self.columns,
            self.rows
        );
        (row as usize) * (self.columns as usize) + (column as usize)
    }

    /// Get the item at (column, row), if any
    pub fn get(&self, column: i32, row: i32) -> Option<T> {
        self.cells[self.index(column, row)]
    }

    /// Store or clear the item at (column, row)
    pub fn set(&mut self, column: i32, row: i32, item: Option<T>) {
        let idx = self.index(column, row);
        self.cells[idx] = item;
    }

    /// Remove and return the item at (column, row)
    pub fn take(&mut self, column: i32, row: i32) -> Option<T> {
        let idx = self.index(column, row);
        self.cells[idx].take()
    }

    /// Inside the grid and holding an item
    pub fn is_occupied(&self, column: i32, row: i32) -> bool {
        self.contains(column, row) && self.get(column, row).is_some()
    }

    /// Check if every column of `row` holds an item
    pub fn is_row_complete(&self, row: i32) -> bool {
        if row < 0 || row >= self.rows {
            return false;
        }
        let start = (row as usize) * (self.columns as usize);
        let end = start + self.columns as usize;
        self.cells[start..end].iter().all(Option::is_some)
    }

    /// Items of one row, left to right
    pub fn row_items(&self, row: i32) -> impl Iterator<Item = T> + '_ {
        (0..self.columns).filter_map(move |column| self.get(column, row))
    }

    /// Every stored item in row-major order
    pub fn items(&self) -> impl Iterator<Item = T> + '_ {
        self.cells.iter().filter_map(|cell| *cell)
    }

    pub fn len(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Empty the whole grid
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}
