//! Stressed die resolution.
//!
//! A stressed die botches on the zero face and explodes on a 1: the die is
//! rolled again and the result doubled, and every further 1 doubles the
//! multiplier again. Re-rolls cannot botch, so a re-rolled zero scores 10.

use arsroller_core::rng::DeterministicRng;
use serde::Serialize;
use tracing::{debug, warn};

use super::die::{BOTCH_FACE, EXPLODE_FACE, roll_die, scored_value};
use super::outcome::Outcome;

/// Upper bound on re-rolls in one explosion chain. A fair die ends the
/// chain with probability 1 long before this; a scripted die that always
/// shows 1 stops here.
pub const MAX_EXPLOSIONS: usize = 1_000;

/// Result of a stressed roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StressedRoll {
    /// Recorded values in draw order. Re-rolls are recorded multiplied.
    pub rolls: Vec<i64>,
    /// Final die value plus modifier, or 0 on a botch.
    pub total: i64,
    /// `Some(Outcome::Botch)` on a botch, otherwise `None`.
    pub outcome: Option<Outcome>,
}

impl StressedRoll {
    /// Whether the roll botched.
    #[must_use]
    pub fn is_botch(&self) -> bool {
        self.outcome == Some(Outcome::Botch)
    }
}

/// Resolves a stressed roll with the given modifier.
///
/// A `1,5` sequence records `[1, 10]` and totals `10 + modifier`; `1,1,3`
/// records `[1, 2, 12]` and totals `12 + modifier`.
pub fn stressed_roll(modifier: i64, rng: &mut dyn DeterministicRng) -> StressedRoll {
    let first = roll_die(rng);

    if first == BOTCH_FACE {
        debug!(modifier, "stressed roll botched");
        return StressedRoll {
            rolls: vec![0],
            total: 0,
            outcome: Some(Outcome::Botch),
        };
    }

    if first != EXPLODE_FACE {
        let value = i64::from(first);
        let total = value.saturating_add(modifier);
        debug!(modifier, value, total, "stressed roll resolved");
        return StressedRoll {
            rolls: vec![value],
            total,
            outcome: None,
        };
    }

    let mut rolls = vec![i64::from(EXPLODE_FACE)];
    let mut multiplier: i64 = 1;
    let mut value = i64::from(EXPLODE_FACE);
    let mut exploding = true;

    for _ in 0..MAX_EXPLOSIONS {
        multiplier = multiplier.saturating_mul(2);
        let face = roll_die(rng);
        value = multiplier.saturating_mul(scored_value(face));
        rolls.push(value);
        if face != EXPLODE_FACE {
            exploding = false;
            break;
        }
    }

    if exploding {
        warn!(
            rerolls = MAX_EXPLOSIONS,
            "explosion chain hit the re-roll cap; keeping the last value"
        );
    }

    let total = value.saturating_add(modifier);
    debug!(modifier, rerolls = rolls.len() - 1, value, total, "stressed roll exploded");

    StressedRoll {
        rolls,
        total,
        outcome: None,
    }
}
