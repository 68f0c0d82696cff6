use crate::{
    error::Error,
    grid::GridWorld,
    life::Life,
    packed::{PackedWorld, SIDE},
};
use ca_formats::{rle::Rle, Input};

/// Parses a 64-bit literal: an optional sign, then `0x`, `0X` or `#` for
/// hexadecimal, a leading `0` for octal, or plain decimal.
///
/// Negative values are taken as two's complement, so `-1` is all ones.
pub fn parse_literal(literal: &str) -> Result<u64, Error> {
    let invalid = || Error::InvalidLiteral(literal.to_string());
    let (negative, unsigned) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };
    let (radix, digits) = if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .or_else(|| unsigned.strip_prefix('#'))
    {
        (16, hex)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };
    // `from_str_radix` would accept a second sign.
    if digits.starts_with(&['+', '-'][..]) {
        return Err(invalid());
    }
    let magnitude = u64::from_str_radix(digits, radix).map_err(|_| invalid())?;
    if !negative {
        Ok(magnitude)
    } else if magnitude <= i64::MIN.unsigned_abs() {
        Ok(magnitude.wrapping_neg())
    } else {
        Err(invalid())
    }
}

impl PackedWorld {
    pub fn from_rle<I: Input>(rle: Rle<I>) -> Result<Self, Error> {
        let mut world = PackedWorld::default();
        for cell in rle {
            let (col, row) = cell?.position;
            if !(0..SIDE).contains(&col) || !(0..SIDE).contains(&row) {
                return Err(Error::CellOutOfBounds { col, row });
            }
            world.set_cell(col, row, true);
        }
        Ok(world)
    }
}

impl GridWorld {
    /// A `size` by `size` world with `pattern` placed at its centre,
    /// offset by `size / 2 - 4` in both directions.
    ///
    /// On grids smaller than the pattern, cells that do not fit are dropped.
    pub fn embed(size: usize, pattern: PackedWorld) -> Self {
        let mut world = GridWorld::new(size, size);
        let offset = size as i64 / 2 - SIDE / 2;
        for row in 0..SIDE {
            for col in 0..SIDE {
                world.set_cell(offset + col, offset + row, pattern.get_cell(col, row));
            }
        }
        world
    }

    pub fn from_rle<I: Input>(rle: Rle<I>, rows: usize, cols: usize) -> Result<Self, Error> {
        let mut world = GridWorld::new(rows, cols);
        for cell in rle {
            let (col, row) = cell?.position;
            if col < 0 || col >= world.width() || row < 0 || row >= world.height() {
                return Err(Error::CellOutOfBounds { col, row });
            }
            world.set_cell(col, row, true);
        }
        Ok(world)
    }
}
