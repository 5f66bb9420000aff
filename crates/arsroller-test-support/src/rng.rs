//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use arsroller_core::rng::DeterministicRng;

/// An RNG that returns the same value on every draw, ignoring the requested
/// range. `FixedRng(1)` drives a stressed roll into an endless explosion.
#[derive(Debug, Clone, Copy)]
pub struct FixedRng(pub u32);

impl DeterministicRng for FixedRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        self.0
    }
}

/// An RNG that returns values from a predetermined sequence. Panics if the
/// sequence is exhausted, so a test fails loudly when a resolver draws more
/// dice than the scenario scripted.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.index
    }

    /// Number of scripted values not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len() - self.index
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        let val = *self
            .values
            .get(self.index)
            .unwrap_or_else(|| panic!("SequenceRng exhausted after {} draws", self.index));
        self.index += 1;
        val
    }
}
