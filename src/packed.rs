use crate::{
    error::Error,
    life::{write_world, Life},
    read::parse_literal,
};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Side length of a packed world.
pub const SIDE: i64 = 8;

/// An 8x8 world packed into a 64-bit integer.
///
/// The cell at `(col, row)` is bit `row * 8 + col`.
#[derive(Hash, Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct PackedWorld(u64);

impl PackedWorld {
    pub const fn new(bits: u64) -> Self {
        PackedWorld(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    const fn in_range(col: i64, row: i64) -> bool {
        col >= 0 && col < SIDE && row >= 0 && row < SIDE
    }
}

impl FromStr for PackedWorld {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_literal(s).map(PackedWorld)
    }
}

impl Life for PackedWorld {
    fn width(&self) -> i64 {
        SIDE
    }

    fn height(&self) -> i64 {
        SIDE
    }

    fn empty_like(&self) -> Self {
        PackedWorld(0)
    }

    fn get_cell(&self, col: i64, row: i64) -> bool {
        Self::in_range(col, row) && (self.0 >> (row * SIDE + col)) & 1 == 1
    }

    /// Writing outside the board clears the whole board.
    fn set_cell(&mut self, col: i64, row: i64, state: bool) -> &mut Self {
        if !Self::in_range(col, row) {
            self.0 = 0;
        } else if state {
            self.0 |= 1u64 << (row * SIDE + col);
        } else {
            self.0 &= !(1u64 << (row * SIDE + col));
        }
        self
    }

    fn population(&self) -> u64 {
        self.0.count_ones() as u64
    }
}

impl Display for PackedWorld {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write_world(self, f)
    }
}

#[cfg(test)]
#[allow(clippy::bool_assert_comparison)]
mod tests {
    use super::*;

    const GLIDER: u64 = 0x_0000_0000_0007_0402;

    #[test]
    fn test_get_cell() {
        let world = PackedWorld::new(GLIDER);
        assert_eq!(world.get_cell(1, 0), true);
        assert_eq!(world.get_cell(2, 1), true);
        assert_eq!(world.get_cell(0, 2), true);
        assert_eq!(world.get_cell(1, 2), true);
        assert_eq!(world.get_cell(2, 2), true);
        assert_eq!(world.get_cell(0, 0), false);
        assert_eq!(world.get_cell(-1, 0), false);
        assert_eq!(world.get_cell(8, 0), false);
        assert_eq!(world.get_cell(0, 8), false);
        assert_eq!(world.get_cell(i64::MAX, i64::MIN), false);
        assert_eq!(PackedWorld::new(1u64 << 63).get_cell(7, 7), true);
    }

    #[test]
    fn test_set_cell() {
        let mut world = PackedWorld::default();
        for row in 0..SIDE {
            for col in 0..SIDE {
                world.set_cell(col, row, true);
                assert_eq!(world.get_cell(col, row), true);
                assert_eq!(world.population(), (row * SIDE + col + 1) as u64);
            }
        }
        assert_eq!(world.bits(), u64::MAX);
        world.set_cell(3, 4, false);
        assert_eq!(world.get_cell(3, 4), false);
        assert_eq!(world.bits(), !(1u64 << 35));
    }

    #[test]
    fn test_set_cell_out_of_range_clears() {
        for &bits in &[0, 1, GLIDER, u64::MAX] {
            let mut world = PackedWorld::new(bits);
            world.set_cell(9, 0, true);
            assert_eq!(world.bits(), 0);
        }
        let mut world = PackedWorld::new(GLIDER);
        world.set_cell(0, -1, false);
        assert_eq!(world, PackedWorld::default());
    }

    #[test]
    fn test_count_neighbours() {
        let empty = PackedWorld::default();
        let full = PackedWorld::new(u64::MAX);
        for row in 0..SIDE {
            for col in 0..SIDE {
                assert_eq!(empty.count_neighbours(col, row), 0);
            }
        }
        assert_eq!(full.count_neighbours(0, 0), 3);
        assert_eq!(full.count_neighbours(3, 0), 5);
        assert_eq!(full.count_neighbours(3, 3), 8);
        assert_eq!(full.count_neighbours(-1, -1), 1);
        let glider = PackedWorld::new(GLIDER);
        assert_eq!(glider.count_neighbours(1, 1), 5);
        assert_eq!(glider.count_neighbours(2, 2), 2);
    }

    #[test]
    fn test_extreme_coordinates() {
        let full = PackedWorld::new(u64::MAX);
        assert_eq!(full.count_neighbours(i64::MAX, 0), 0);
        assert_eq!(full.count_neighbours(0, i64::MIN), 0);
        assert_eq!(full.compute_cell(i64::MIN, i64::MIN), false);
        assert_eq!(full.compute_cell(i64::MAX, i64::MAX), false);
    }

    #[test]
    fn test_next_generation() {
        let glider = PackedWorld::new(GLIDER);
        let next = glider.next_generation();
        assert_eq!(glider.bits(), GLIDER);
        assert_eq!(next.bits(), 0x_0000_0000_0206_0500);
        assert_eq!(next.population(), 5);
        let single = PackedWorld::new(1u64 << 27);
        assert_eq!(single.next_generation().bits(), 0);
    }

    #[test]
    fn test_display() {
        let world = PackedWorld::new(GLIDER);
        assert_eq!(
            world.to_string(),
            "-\n_#______\n__#_____\n###_____\n________\n\
             ________\n________\n________\n________\n"
        );
        assert_eq!(world.render(), world.to_string());
    }

    #[test]
    fn test_from_str() -> Result<(), Error> {
        assert_eq!("0x70402".parse::<PackedWorld>()?.bits(), GLIDER);
        assert_eq!("-1".parse::<PackedWorld>()?.bits(), u64::MAX);
        assert!("glider".parse::<PackedWorld>().is_err());
        Ok(())
    }
}
