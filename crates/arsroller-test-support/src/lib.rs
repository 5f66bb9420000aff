//! Shared test doubles for the Ars Magica die roller.

mod rng;

pub use rng::{FixedRng, SequenceRng};
