//! Simple die resolution: one draw, no explosion, no botch.

use arsroller_core::error::RollError;
use arsroller_core::rng::DeterministicRng;
use serde::Serialize;
use tracing::debug;

use super::die::{roll_die, scored_value};
use super::ensure_non_negative;

/// Result of a simple roll. Simple dice never carry an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimpleRoll {
    /// The single scored draw.
    pub rolls: Vec<i64>,
    /// Draw plus modifier.
    pub total: i64,
}

/// Resolves a simple roll. The zero face scores 10.
///
/// # Errors
///
/// Returns `RollError::InvalidArgument` if `modifier` is negative.
pub fn simple_roll(modifier: i64, rng: &mut dyn DeterministicRng) -> Result<SimpleRoll, RollError> {
    ensure_non_negative("modifier", modifier)?;

    let value = scored_value(roll_die(rng));
    let total = value.saturating_add(modifier);
    debug!(modifier, value, total, "simple roll resolved");

    Ok(SimpleRoll {
        rolls: vec![value],
        total,
    })
}
