use crate::{
    error::Error,
    life::{write_world, Life},
};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A world of any size, stored as rows of cells.
///
/// All rows have the same length.
#[derive(Hash, Clone, Default, Eq, PartialEq, Debug)]
pub struct GridWorld {
    cells: Vec<Vec<bool>>,
}

impl GridWorld {
    /// A dead world with `rows` rows and `cols` columns.
    pub fn new(rows: usize, cols: usize) -> Self {
        GridWorld {
            cells: vec![vec![false; cols]; rows],
        }
    }

    pub fn from_rows(cells: Vec<Vec<bool>>) -> Result<Self, Error> {
        let expected = cells.first().map_or(0, Vec::len);
        if let Some((row, found)) = cells
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(Error::RaggedRows {
                row,
                expected,
                found,
            });
        }
        Ok(GridWorld { cells })
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.cells
    }

    fn index(&self, col: i64, row: i64) -> Option<(usize, usize)> {
        if col >= 0 && col < self.width() && row >= 0 && row < self.height() {
            Some((row as usize, col as usize))
        } else {
            None
        }
    }
}

impl Life for GridWorld {
    fn width(&self) -> i64 {
        self.cells.first().map_or(0, Vec::len) as i64
    }

    fn height(&self) -> i64 {
        self.cells.len() as i64
    }

    fn empty_like(&self) -> Self {
        GridWorld::new(self.height() as usize, self.width() as usize)
    }

    fn get_cell(&self, col: i64, row: i64) -> bool {
        self.index(col, row).map_or(false, |(row, col)| self.cells[row][col])
    }

    /// Writing outside the grid does nothing.
    fn set_cell(&mut self, col: i64, row: i64, state: bool) -> &mut Self {
        if let Some((row, col)) = self.index(col, row) {
            self.cells[row][col] = state;
        }
        self
    }
}

impl Display for GridWorld {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write_world(self, f)
    }
}
