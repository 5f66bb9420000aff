//! Botch dice: count the zeros among N dice and grade the botch.

use arsroller_core::error::RollError;
use arsroller_core::rng::DeterministicRng;
use serde::Serialize;
use tracing::debug;

use super::die::{BOTCH_FACE, roll_die};
use super::outcome::{BOTCH_SEVERITIES, BotchSeverity};

/// Result of rolling botch dice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BotchRoll {
    /// Faces as drawn; zeros are botches.
    pub rolls: Vec<u32>,
    /// Number of dice showing the botch face.
    pub botches: u32,
    /// Severity graded from `botches`.
    pub severity: BotchSeverity,
}

/// Rolls `number` botch dice.
///
/// # Errors
///
/// Returns `RollError::InvalidArgument` if `number` is zero.
pub fn botch_roll(number: u32, rng: &mut dyn DeterministicRng) -> Result<BotchRoll, RollError> {
    if number == 0 {
        return Err(RollError::invalid("number", "must be at least 1, got 0"));
    }

    let rolls: Vec<u32> = (0..number).map(|_| roll_die(rng)).collect();
    let botches = rolls.iter().fold(0u32, |count, face| {
        if *face == BOTCH_FACE { count + 1 } else { count }
    });
    let severity = BOTCH_SEVERITIES.classify(i64::from(botches));
    debug!(number, botches, %severity, "botch dice resolved");

    Ok(BotchRoll {
        rolls,
        botches,
        severity,
    })
}
