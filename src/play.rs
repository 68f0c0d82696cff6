//! Driving a world from a stream of input symbols.

use crate::{error::Error, life::Life};
use std::{
    io::{Read, Write},
    mem,
};

/// One symbol of input, already classified.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Input {
    Quit,
    Key(u8),
    /// The input is exhausted. Advances like any key.
    EndOfInput,
}

/// The outcome of feeding one symbol to [`step`].
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Step<L> {
    Continue(L),
    Halt(L),
}

/// Why [`play`] returned.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum StopReason {
    Quit,
    GenerationLimit,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct PlayConfig {
    pub quit_key: u8,
    /// Stop after this many generations even without a quit key.
    pub generation_limit: Option<u64>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            quit_key: b'q',
            generation_limit: None,
        }
    }
}

impl PlayConfig {
    pub fn classify(&self, byte: Option<u8>) -> Input {
        match byte {
            Some(b) if b == self.quit_key => Input::Quit,
            Some(b) => Input::Key(b),
            None => Input::EndOfInput,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Summary<L> {
    /// The last world rendered.
    pub world: L,
    pub generations: u64,
    pub reason: StopReason,
}

/// Advances `world` by one generation unless `input` is the quit symbol.
pub fn step<L: Life>(world: L, input: Input) -> Step<L> {
    match input {
        Input::Quit => Step::Halt(world),
        Input::Key(_) | Input::EndOfInput => Step::Continue(world.next_generation()),
    }
}

/// The successive generations of a world, starting with the world itself.
///
/// The sequence never ends; cloning it restarts from the current point.
#[derive(Clone, Debug)]
pub struct Generations<L> {
    world: L,
}

impl<L: Life> Generations<L> {
    pub fn new(world: L) -> Self {
        Generations { world }
    }
}

impl<L: Life> Iterator for Generations<L> {
    type Item = L;

    fn next(&mut self) -> Option<L> {
        let next = self.world.next_generation();
        Some(mem::replace(&mut self.world, next))
    }
}

/// Renders `world` to `output`, then reads one byte from `input` and
/// steps, until the quit key is read or the generation limit is reached.
///
/// Without a limit this never returns on exhausted input.
pub fn play<L, R, W>(
    world: L,
    input: R,
    mut output: W,
    config: &PlayConfig,
) -> Result<Summary<L>, Error>
where
    L: Life,
    R: Read,
    W: Write,
{
    let mut bytes = input.bytes();
    let mut world = world;
    let mut generations = 0;
    loop {
        output.write_all(world.render().as_bytes())?;
        output.flush()?;
        if config.generation_limit.map_or(false, |limit| generations >= limit) {
            return Ok(Summary {
                world,
                generations,
                reason: StopReason::GenerationLimit,
            });
        }
        let byte = bytes.next().transpose()?;
        match step(world, config.classify(byte)) {
            Step::Continue(next) => {
                world = next;
                generations += 1;
            }
            Step::Halt(last) => {
                return Ok(Summary {
                    world: last,
                    generations,
                    reason: StopReason::Quit,
                })
            }
        }
    }
}
