use crate::rule::Rule;
use std::fmt::{Result as FmtResult, Write};

/// Offsets of the eight neighbours of a cell, as `(col, row)`.
const NEIGHBOURHOOD: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A bounded Life world.
///
/// Cells outside the world are always dead. Only the storage is left to
/// the implementor; the rule, the neighbour count and the generation
/// step are shared.
pub trait Life: Clone {
    /// Number of columns.
    fn width(&self) -> i64;

    /// Number of rows.
    fn height(&self) -> i64;

    /// A world of the same dimensions with every cell dead.
    fn empty_like(&self) -> Self;

    /// Whether the cell at `(col, row)` is alive. Out of range is dead.
    fn get_cell(&self, col: i64, row: i64) -> bool;

    /// Sets the cell at `(col, row)`. What happens out of range depends on
    /// the world.
    fn set_cell(&mut self, col: i64, row: i64, state: bool) -> &mut Self;

    fn count_neighbours(&self, col: i64, row: i64) -> u8 {
        NEIGHBOURHOOD
            .iter()
            .filter(|&&(dc, dr)| {
                col.checked_add(dc)
                    .zip(row.checked_add(dr))
                    .map_or(false, |(col, row)| self.get_cell(col, row))
            })
            .count() as u8
    }

    /// The state of the cell at `(col, row)` in the next generation.
    fn compute_cell(&self, col: i64, row: i64) -> bool {
        Rule::life().next_state(self.get_cell(col, row), self.count_neighbours(col, row))
    }

    /// Builds the next generation. `self` is left untouched.
    fn next_generation(&self) -> Self {
        let mut next = self.empty_like();
        for row in 0..self.height() {
            for col in 0..self.width() {
                next.set_cell(col, row, self.compute_cell(col, row));
            }
        }
        next
    }

    fn population(&self) -> u64 {
        let mut population = 0;
        for row in 0..self.height() {
            for col in 0..self.width() {
                population += self.get_cell(col, row) as u64;
            }
        }
        population
    }

    /// A `-` separator line, then one line per row with `#` for living
    /// cells and `_` for dead ones.
    fn render(&self) -> String {
        let mut s = String::new();
        write_world(self, &mut s).unwrap();
        s
    }
}

pub(crate) fn write_world<L: Life, W: Write>(world: &L, f: &mut W) -> FmtResult {
    f.write_str("-\n")?;
    for row in 0..world.height() {
        for col in 0..world.width() {
            f.write_char(if world.get_cell(col, row) { '#' } else { '_' })?;
        }
        f.write_char('\n')?;
    }
    Ok(())
}
