//! Uniform random seam used by the allocation engine.
//!
//! Production code draws from a PCG generator; tests replay a fixed
//! sequence so exact picks can be asserted.

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;

/// Uniform integer source.
pub trait UniformSource {
    /// Integer in `[0, n)`. `n` is always at least 1.
    fn uniform(&mut self, n: usize) -> usize;
}

/// PCG-backed source, optionally seeded for reproducible runs.
#[derive(Debug, Clone)]
pub struct PcgSource {
    rng: Mcg128Xsl64,
}

impl PcgSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mcg128Xsl64::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Mcg128Xsl64::from_entropy(),
        }
    }

    /// Seeded when `seed` is set, entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }
}

impl UniformSource for PcgSource {
    fn uniform(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }
}

/// Replays `values` in order (wrapping), each reduced modulo `n`.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<usize>,
    cursor: usize,
    draws: usize,
}

impl ScriptedSource {
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
            draws: 0,
        }
    }

    /// Always picks the first candidate.
    pub fn first() -> Self {
        Self::new(vec![0])
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl UniformSource for ScriptedSource {
    fn uniform(&mut self, n: usize) -> usize {
        self.draws += 1;
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % n
    }
}
