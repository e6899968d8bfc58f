//! Injectable source of uniform integer draws.
//!
//! Every random decision in a fight (stamina, filiation bonus, attack choice,
//! roster selection) goes through [`Randomizer::next`], so a fight is fully
//! reproducible from the sequence of values it draws.

use rand::{RngCore, SeedableRng};
use rand_pcg::Lcg64Xsh32;

/// Produces a uniformly distributed integer in `[0, ceil)`.
pub trait Randomizer {
    /// `ceil` must be positive; implementations return 0 when it is not.
    fn next(&mut self, ceil: u32) -> u32;
}

/// PCG-backed randomizer. Two instances built from the same seed draw the
/// same sequence.
#[derive(Debug, Clone)]
pub struct SeededRandomizer {
    rng: Lcg64Xsh32,
}

impl SeededRandomizer {
    pub fn from_seed(seed: u64) -> Self {
        let mut seed_bytes: [u8; 16] = [0u8; 16];
        // fill with two copies of the u64
        seed_bytes[0..8].copy_from_slice(&seed.to_le_bytes());
        seed_bytes[8..16].copy_from_slice(&seed.to_le_bytes());
        SeededRandomizer {
            rng: Lcg64Xsh32::from_seed(seed_bytes),
        }
    }

    pub fn from_entropy() -> Self {
        SeededRandomizer {
            rng: Lcg64Xsh32::from_entropy(),
        }
    }

    /// Seeded when a seed is given, entropy-seeded otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::from_seed(s),
            None => Self::from_entropy(),
        }
    }
}

impl Randomizer for SeededRandomizer {
    fn next(&mut self, ceil: u32) -> u32 {
        if ceil == 0 {
            return 0;
        }
        // Same floor(random * ceil) mapping a unit-interval float source would give.
        let unit = (self.rng.next_u32() as f64) / (u32::MAX as f64 + 1.0);
        (unit * ceil as f64) as u32
    }
}

/// Replays a fixed script of values, cycling when it runs out.
///
/// Each value is reduced modulo the requested ceiling so a script can be
/// shared between draws with different bounds.
#[derive(Debug, Clone)]
pub struct ScriptedRandomizer {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRandomizer {
    pub fn new(values: Vec<u32>) -> Self {
        ScriptedRandomizer { values, cursor: 0 }
    }

    /// Always draws `value` (modulo the ceiling).
    pub fn repeat(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws served so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl Randomizer for ScriptedRandomizer {
    fn next(&mut self, ceil: u32) -> u32 {
        if ceil == 0 || self.values.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % ceil
    }
}
