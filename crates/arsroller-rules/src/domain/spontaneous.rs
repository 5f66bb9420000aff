//! Spontaneous spellcasting.
//!
//! Both variants halve the casting total, rounding down, before comparing
//! it with the spell's level. The non-fatiguing variant draws no die and
//! so can never botch.

use arsroller_core::error::RollError;
use arsroller_core::rng::DeterministicRng;
use serde::Serialize;
use tracing::debug;

use super::ensure_non_negative;
use super::outcome::{Outcome, SPONTANEOUS_OUTCOMES};
use super::stressed::stressed_roll;

/// Result of a spontaneous spell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpontaneousRoll {
    /// Recorded stressed-die values; empty for the non-fatiguing variant.
    pub rolls: Vec<i64>,
    /// Casting total before halving.
    pub total: i64,
    /// `total` halved, rounding down.
    pub modified_total: i64,
    /// Classification of `modified_total - target`, or `Botch`.
    pub outcome: Outcome,
}

fn halve(total: i64) -> i64 {
    total.div_euclid(2)
}

/// Resolves a non-fatiguing spontaneous spell from the casting score alone.
///
/// # Errors
///
/// Returns `RollError::InvalidArgument` if `casting_score` or `target` is
/// negative.
pub fn spont_non_roll(casting_score: i64, target: i64) -> Result<SpontaneousRoll, RollError> {
    ensure_non_negative("casting_score", casting_score)?;
    ensure_non_negative("target", target)?;

    let modified_total = halve(casting_score);
    let outcome = SPONTANEOUS_OUTCOMES.classify(modified_total - target);
    debug!(casting_score, target, modified_total, %outcome, "spontaneous spell resolved");

    Ok(SpontaneousRoll {
        rolls: Vec::new(),
        total: casting_score,
        modified_total,
        outcome,
    })
}

/// Resolves a fatiguing spontaneous spell with a stressed roll.
///
/// A botch short-circuits classification; both totals are then 0.
///
/// # Errors
///
/// Returns `RollError::InvalidArgument` if `casting_score` or `target` is
/// negative.
pub fn fatiguing_spont_roll(
    casting_score: i64,
    target: i64,
    rng: &mut dyn DeterministicRng,
) -> Result<SpontaneousRoll, RollError> {
    ensure_non_negative("casting_score", casting_score)?;
    ensure_non_negative("target", target)?;

    let roll = stressed_roll(casting_score, rng);
    let modified_total = halve(roll.total);
    let outcome = match roll.outcome {
        Some(outcome) => outcome,
        None => SPONTANEOUS_OUTCOMES.classify(modified_total.saturating_sub(target)),
    };
    debug!(
        casting_score,
        target,
        total = roll.total,
        modified_total,
        %outcome,
        "fatiguing spontaneous spell resolved"
    );

    Ok(SpontaneousRoll {
        rolls: roll.rolls,
        total: roll.total,
        modified_total,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use arsroller_test_support::SequenceRng;

    #[test]
    fn test_non_roll_halves_and_fails_short_of_target() {
        let spell = spont_non_roll(20, 15).unwrap();
        assert!(spell.rolls.is_empty());
        assert_eq!(spell.total, 20);
        assert_eq!(spell.modified_total, 10);
        assert_eq!(spell.outcome, Outcome::Failure);
    }

    #[test]
    fn test_non_roll_rounds_down() {
        let spell = spont_non_roll(21, 10).unwrap();
        assert_eq!(spell.modified_total, 10);
        assert_eq!(spell.outcome, Outcome::MarginalSuccess);
    }

    #[test]
    fn test_non_roll_success_bands() {
        assert_eq!(spont_non_roll(30, 10).unwrap().outcome, Outcome::SolidSuccess);
        assert_eq!(spont_non_roll(40, 10).unwrap().outcome, Outcome::MajorSuccess);
        assert_eq!(spont_non_roll(19, 10).unwrap().outcome, Outcome::Failure);
    }

    #[test]
    fn test_non_roll_rejects_negative_inputs() {
        assert!(spont_non_roll(-2, 5).is_err());
        assert!(spont_non_roll(5, -2).is_err());
    }

    #[test]
    fn test_fatiguing_halves_rolled_total() {
        let mut rng = SequenceRng::new(vec![7]);
        let spell = fatiguing_spont_roll(12, 8, &mut rng).unwrap();
        assert_eq!(spell.rolls, vec![7]);
        assert_eq!(spell.total, 19);
        assert_eq!(spell.modified_total, 9);
        assert_eq!(spell.outcome, Outcome::MarginalSuccess);
    }

    #[test]
    fn test_fatiguing_explosion_is_halved_after_doubling() {
        let mut rng = SequenceRng::new(vec![1, 6]);
        let spell = fatiguing_spont_roll(9, 5, &mut rng).unwrap();
        assert_eq!(spell.rolls, vec![1, 12]);
        assert_eq!(spell.total, 21);
        assert_eq!(spell.modified_total, 10);
        assert_eq!(spell.outcome, Outcome::SolidSuccess);
    }

    #[test]
    fn test_fatiguing_botch_propagates() {
        let mut rng = SequenceRng::new(vec![0]);
        let spell = fatiguing_spont_roll(30, 5, &mut rng).unwrap();
        assert_eq!(spell.rolls, vec![0]);
        assert_eq!(spell.total, 0);
        assert_eq!(spell.modified_total, 0);
        assert_eq!(spell.outcome, Outcome::Botch);
    }

    #[test]
    fn test_fatiguing_failure() {
        let mut rng = SequenceRng::new(vec![3]);
        let spell = fatiguing_spont_roll(5, 10, &mut rng).unwrap();
        assert_eq!(spell.modified_total, 4);
        assert_eq!(spell.outcome, Outcome::Failure);
    }

    #[test]
    fn test_same_draws_give_same_result() {
        let first = fatiguing_spont_roll(10, 5, &mut SequenceRng::new(vec![1, 1, 2])).unwrap();
        let second = fatiguing_spont_roll(10, 5, &mut SequenceRng::new(vec![1, 1, 2])).unwrap();
        assert_eq!(first, second);
        assert_eq!(spont_non_roll(17, 4).unwrap(), spont_non_roll(17, 4).unwrap());
    }
}
