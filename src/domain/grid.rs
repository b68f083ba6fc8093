/// A dense rectangular boolean matrix, row-major.
///
/// Filled strictly in increasing row order by the engine; once a row is
/// finalized it is never mutated. Downstream renderers read it whole.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Allocate an all-dead grid. The engine fills it row by row.
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Overwrite row `i` in place. Engine-internal; rows are written
    /// exactly once, in order.
    pub(crate) fn fill_row(&mut self, i: usize, row: &[bool]) {
        debug_assert!(i < self.rows);
        debug_assert_eq!(row.len(), self.cols);
        self.cells[i * self.cols..(i + 1) * self.cols].copy_from_slice(row);
    }

    /// Grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at (row, col), with bounds checking
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        (row < self.rows && col < self.cols).then(|| self.cells[row * self.cols + col])
    }

    /// Row `i` as a slice
    pub fn row(&self, i: usize) -> &[bool] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterate over rows in order
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    /// Render one row as a '0'/'1' string, the seed format
    pub fn row_bit_string(&self, i: usize) -> String {
        row_to_bit_string(self.row(i))
    }

    /// Count live cells in the whole grid
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|&&b| b).count()
    }
}

/// Render a boolean row as a '0'/'1' string.
pub fn row_to_bit_string(row: &[bool]) -> String {
    row.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_dead() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.dimensions(), (3, 4));
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_fill_and_read_rows() {
        let mut grid = Grid::new(2, 3);
        grid.fill_row(0, &[true, false, true]);
        grid.fill_row(1, &[false, true, false]);
        assert_eq!(grid.row(0), &[true, false, true]);
        assert_eq!(grid.get(1, 1), Some(true));
        assert_eq!(grid.get(1, 3), None);
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.count_alive(), 3);
    }

    #[test]
    fn test_bit_string_rendering() {
        let mut grid = Grid::new(1, 5);
        grid.fill_row(0, &[false, false, true, false, false]);
        assert_eq!(grid.row_bit_string(0), "00100");
    }

    #[test]
    fn test_iter_rows_in_order() {
        let mut grid = Grid::new(2, 2);
        grid.fill_row(0, &[true, true]);
        grid.fill_row(1, &[false, true]);
        let rows: Vec<&[bool]> = grid.iter_rows().collect();
        assert_eq!(rows, vec![&[true, true][..], &[false, true][..]]);
    }
}
