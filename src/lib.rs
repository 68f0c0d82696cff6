#![allow(clippy::bool_assert_comparison)]

mod error;
mod grid;
mod life;
mod packed;
mod play;
mod read;
mod rule;

pub use ca_formats;
pub use error::Error;
pub use grid::GridWorld;
pub use life::Life;
pub use packed::{PackedWorld, SIDE};
pub use play::{play, step, Generations, Input, PlayConfig, Step, StopReason, Summary};
pub use read::parse_literal;
pub use rule::Rule;
