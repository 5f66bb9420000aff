//! Roll resolvers and the tables that classify their results.

pub mod botch;
pub mod die;
pub mod formulaic;
pub mod outcome;
pub mod simple;
pub mod spontaneous;
pub mod stressed;

pub use botch::{BotchRoll, botch_roll};
pub use formulaic::{SpellRoll, formulaic_roll};
pub use outcome::{BotchSeverity, Outcome, ThresholdTable};
pub use simple::{SimpleRoll, simple_roll};
pub use spontaneous::{SpontaneousRoll, fatiguing_spont_roll, spont_non_roll};
pub use stressed::{StressedRoll, stressed_roll};

use arsroller_core::error::RollError;

/// Rejects a negative value for a parameter the rules require to be >= 0.
pub(crate) fn ensure_non_negative(name: &str, value: i64) -> Result<(), RollError> {
    if value < 0 {
        return Err(RollError::invalid(
            name,
            format!("must not be negative, got {value}"),
        ));
    }
    Ok(())
}
