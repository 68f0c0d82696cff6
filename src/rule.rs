use ca_rules::ParseLife;
use std::{
    fmt::{Debug, Formatter, Result as DebugResult},
    sync::OnceLock,
};

/// The Life rule as a lookup table, indexed by the state of the cell
/// and its number of living neighbours.
#[derive(Clone, PartialEq, Eq)]
pub struct Rule {
    rule_table: [[bool; 9]; 2],
}

impl Debug for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> DebugResult {
        f.debug_struct("Rule").finish()
    }
}

impl ParseLife for Rule {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        let mut rule_table = [[false; 9]; 2];
        b.into_iter().for_each(|n| rule_table[0][n as usize] = true);
        s.into_iter().for_each(|n| rule_table[1][n as usize] = true);
        Rule { rule_table }
    }
}

impl Rule {
    /// Conway's Game of Life, B3/S23.
    pub fn life() -> &'static Rule {
        static LIFE: OnceLock<Rule> = OnceLock::new();
        LIFE.get_or_init(|| Rule::parse_rule("B3/S23").unwrap())
    }

    /// Whether a cell is alive in the next generation.
    pub fn next_state(&self, alive: bool, neighbours: u8) -> bool {
        self.rule_table[alive as usize]
            .get(neighbours as usize)
            .copied()
            .unwrap_or(false)
    }
}
