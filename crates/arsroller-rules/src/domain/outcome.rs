//! Outcome classification.
//!
//! Success margins and botch counts are classified against ordered
//! threshold tables rather than chained conditionals, so tuning a game rule
//! means editing a table. A table is a list of `(lower bound, value)` bands
//! with strictly increasing bounds, the first starting at `i64::MIN`; an
//! input takes the value of the last band whose bound it reaches.

use std::fmt;

use arsroller_core::error::RollError;
use serde::Serialize;

/// Result classification of a stressed roll or spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The stressed die came up on the botch face.
    Botch,
    /// The total fell short of the target.
    Failure,
    /// A formulaic spell fell short by 10 or less: it still works, but the
    /// caster loses a Fatigue level.
    FatiguedSuccess,
    /// The total met the target with less than 5 to spare.
    MarginalSuccess,
    /// The total beat the target by 5 to 9.
    SolidSuccess,
    /// The total beat the target by 10 or more.
    MajorSuccess,
}

impl Outcome {
    /// Display label shown to players.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Botch => "Botch!",
            Self::Failure => "Failure",
            Self::FatiguedSuccess => "Success, but lose a Fatigue level",
            Self::MarginalSuccess => "Marginal Success",
            Self::SolidSuccess => "Solid Success",
            Self::MajorSuccess => "Major Success",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Severity of a set of botch dice, by the number of zeros rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BotchSeverity {
    /// No die showed the botch face.
    NoBotch,
    /// One zero.
    Botch,
    /// Two zeros.
    DoubleBotch,
    /// Three zeros.
    TripleBotch,
    /// Four or more zeros.
    Catastrophe,
}

impl BotchSeverity {
    /// Display label shown to players.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NoBotch => "No Botch",
            Self::Botch => "Botched!",
            Self::DoubleBotch => "Double Botch!",
            Self::TripleBotch => "Triple Botch!",
            Self::Catastrophe => "Catastrophic Botch!",
        }
    }
}

impl fmt::Display for BotchSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An ordered table of `(lower bound, value)` bands.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdTable<T: 'static> {
    bands: &'static [(i64, T)],
}

impl<T: Copy> ThresholdTable<T> {
    /// Builds a table after checking its shape.
    ///
    /// # Errors
    ///
    /// Returns `RollError::InvalidArgument` if the table is empty, does not
    /// start at `i64::MIN`, or its bounds are not strictly increasing.
    pub fn new(bands: &'static [(i64, T)]) -> Result<Self, RollError> {
        match bands.first() {
            None => return Err(RollError::invalid("threshold table", "must not be empty")),
            Some((bound, _)) if *bound != i64::MIN => {
                return Err(RollError::invalid(
                    "threshold table",
                    "must start at i64::MIN",
                ));
            }
            Some(_) => {}
        }
        if bands.windows(2).any(|pair| pair[0].0 >= pair[1].0) {
            return Err(RollError::invalid(
                "threshold table",
                "bounds must be strictly increasing",
            ));
        }
        Ok(Self { bands })
    }

    /// Returns the value of the last band whose lower bound is `<= value`.
    #[must_use]
    pub fn classify(&self, value: i64) -> T {
        // Every table starts at i64::MIN, so at least one band matches.
        let matched = self.bands.partition_point(|(bound, _)| *bound <= value);
        self.bands[matched.saturating_sub(1)].1
    }

    /// The bands in ascending order of lower bound.
    #[must_use]
    pub fn bands(&self) -> &'static [(i64, T)] {
        self.bands
    }
}

/// Formulaic spells: margin = casting total - spell level.
pub const FORMULAIC_OUTCOMES: ThresholdTable<Outcome> = ThresholdTable {
    bands: &[
        (i64::MIN, Outcome::Failure),
        (-10, Outcome::FatiguedSuccess),
        (0, Outcome::MarginalSuccess),
        (5, Outcome::SolidSuccess),
        (10, Outcome::MajorSuccess),
    ],
};

/// Spontaneous spells: margin = halved total - spell level. Falling short
/// is always a failure.
pub const SPONTANEOUS_OUTCOMES: ThresholdTable<Outcome> = ThresholdTable {
    bands: &[
        (i64::MIN, Outcome::Failure),
        (0, Outcome::MarginalSuccess),
        (5, Outcome::SolidSuccess),
        (10, Outcome::MajorSuccess),
    ],
};

/// Botch dice: number of zeros rolled.
pub const BOTCH_SEVERITIES: ThresholdTable<BotchSeverity> = ThresholdTable {
    bands: &[
        (i64::MIN, BotchSeverity::NoBotch),
        (1, BotchSeverity::Botch),
        (2, BotchSeverity::DoubleBotch),
        (3, BotchSeverity::TripleBotch),
        (4, BotchSeverity::Catastrophe),
    ],
};
