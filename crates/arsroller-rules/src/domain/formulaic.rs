//! Formulaic spellcasting: a stressed roll plus casting score against the
//! spell's level.

use arsroller_core::error::RollError;
use arsroller_core::rng::DeterministicRng;
use serde::Serialize;
use tracing::debug;

use super::ensure_non_negative;
use super::outcome::{FORMULAIC_OUTCOMES, Outcome};
use super::stressed::stressed_roll;

/// Result of a formulaic spell roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpellRoll {
    /// Recorded stressed-die values in draw order.
    pub rolls: Vec<i64>,
    /// Die value plus casting score, or 0 on a botch.
    pub total: i64,
    /// Classification of `total - target`, or `Botch`.
    pub outcome: Outcome,
}

/// Resolves a formulaic spell.
///
/// # Errors
///
/// Returns `RollError::InvalidArgument` if `casting_score` or `target` is
/// negative.
pub fn formulaic_roll(
    casting_score: i64,
    target: i64,
    rng: &mut dyn DeterministicRng,
) -> Result<SpellRoll, RollError> {
    ensure_non_negative("casting_score", casting_score)?;
    ensure_non_negative("target", target)?;

    let roll = stressed_roll(casting_score, rng);
    let outcome = match roll.outcome {
        Some(outcome) => outcome,
        None => FORMULAIC_OUTCOMES.classify(roll.total.saturating_sub(target)),
    };
    debug!(casting_score, target, total = roll.total, %outcome, "formulaic spell resolved");

    Ok(SpellRoll {
        rolls: roll.rolls,
        total: roll.total,
        outcome,
    })
}
