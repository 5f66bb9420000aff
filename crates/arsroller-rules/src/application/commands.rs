//! Command registration table.
//!
//! Each command is registered as data: its name, a description, the
//! integer parameters it accepts, and the handler that resolves it. Callers
//! (the HTTP layer, a chat gateway) look commands up by name and never bind
//! resolvers directly.

use std::collections::BTreeMap;
use std::fmt;

use arsroller_core::error::RollError;
use arsroller_core::rng::DeterministicRng;
use serde::Serialize;
use tracing::debug;

use crate::domain::{
    BotchRoll, SimpleRoll, SpellRoll, SpontaneousRoll, StressedRoll, botch_roll,
    fatiguing_spont_roll, formulaic_roll, simple_roll, spont_non_roll, stressed_roll,
};

/// Raw arguments supplied by a caller, keyed by parameter name.
pub type CommandArgs = BTreeMap<String, i64>;

/// Signature every registered handler has.
pub type Handler = fn(&ResolvedArgs, &mut dyn DeterministicRng) -> Result<RollReport, RollError>;

/// An integer parameter a command accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParamSpec {
    /// Parameter name as callers supply it.
    pub name: &'static str,
    /// Help text.
    pub description: &'static str,
    /// Value used when the caller omits the parameter. `None` means required.
    pub default: Option<i64>,
    /// Smallest accepted value, if bounded.
    pub minimum: Option<i64>,
}

impl ParamSpec {
    /// Whether the caller must supply this parameter.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// A registered command.
#[derive(Clone, Copy, Serialize)]
pub struct CommandSpec {
    /// Command name, e.g. `stressed`.
    pub name: &'static str,
    /// Help text.
    pub description: &'static str,
    /// Accepted parameters, in display order.
    pub params: &'static [ParamSpec],
    #[serde(skip)]
    handler: Handler,
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Arguments after defaults and bounds have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArgs {
    values: BTreeMap<&'static str, i64>,
}

impl ResolvedArgs {
    /// Value of a resolved parameter.
    ///
    /// # Errors
    ///
    /// Returns `RollError::InvalidArgument` if the command does not declare
    /// `name`.
    pub fn get(&self, name: &str) -> Result<i64, RollError> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| RollError::invalid(name, "is not a parameter of this command"))
    }
}

impl CommandSpec {
    /// Applies defaults and checks bounds.
    ///
    /// # Errors
    ///
    /// Returns `RollError::InvalidArgument` for an unknown parameter name, a
    /// missing required parameter, or a value below its minimum.
    pub fn resolve_args(&self, args: &CommandArgs) -> Result<ResolvedArgs, RollError> {
        if let Some(unknown) = args
            .keys()
            .find(|key| !self.params.iter().any(|p| p.name == key.as_str()))
        {
            return Err(RollError::invalid(
                unknown,
                format!("is not a parameter of /{}", self.name),
            ));
        }

        let mut values = BTreeMap::new();
        for param in self.params {
            let value = match (args.get(param.name), param.default) {
                (Some(value), _) => *value,
                (None, Some(default)) => default,
                (None, None) => return Err(RollError::invalid(param.name, "is required")),
            };
            if let Some(minimum) = param.minimum {
                if value < minimum {
                    return Err(RollError::invalid(
                        param.name,
                        format!("must be at least {minimum}, got {value}"),
                    ));
                }
            }
            values.insert(param.name, value);
        }
        Ok(ResolvedArgs { values })
    }

    /// Resolves the arguments and runs the handler.
    ///
    /// # Errors
    ///
    /// Returns `RollError::InvalidArgument` if the arguments are rejected by
    /// the table or by the resolver.
    pub fn run(
        &self,
        args: &CommandArgs,
        rng: &mut dyn DeterministicRng,
    ) -> Result<RollReport, RollError> {
        let resolved = self.resolve_args(args)?;
        debug!(command = self.name, args = ?resolved, "dispatching command");
        (self.handler)(&resolved, rng)
    }
}

/// Structured result of a command, with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RollReport {
    /// `/stressed`
    Stressed {
        /// Modifier added to the roll.
        modifier: i64,
        /// The resolved roll.
        roll: StressedRoll,
    },
    /// `/simple`
    Simple {
        /// Modifier added to the roll.
        modifier: i64,
        /// The resolved roll.
        roll: SimpleRoll,
    },
    /// `/formulaic`
    Formulaic {
        /// Stamina + Art + Form + Aura.
        casting_score: i64,
        /// Spell level.
        target: i64,
        /// The resolved spell.
        roll: SpellRoll,
    },
    /// `/spontaneous`
    Spontaneous {
        /// Stamina + Art + Form + Aura.
        casting_score: i64,
        /// Spell level.
        target: i64,
        /// The resolved spell.
        roll: SpontaneousRoll,
    },
    /// `/fspont`
    FatiguingSpontaneous {
        /// Stamina + Art + Form + Aura.
        casting_score: i64,
        /// Spell level.
        target: i64,
        /// The resolved spell.
        roll: SpontaneousRoll,
    },
    /// `/botch`
    Botch {
        /// Number of botch dice rolled.
        number: u32,
        /// The resolved dice.
        roll: BotchRoll,
    },
    /// `/about`
    About,
}

const STRESSED_MODIFIER: ParamSpec = ParamSpec {
    name: "modifier",
    description: "modifier to add to the roll (optional)",
    default: Some(0),
    minimum: None,
};

const SIMPLE_MODIFIER: ParamSpec = ParamSpec {
    minimum: Some(0),
    ..STRESSED_MODIFIER
};

const CASTING_SCORE: ParamSpec = ParamSpec {
    name: "casting_score",
    description: "The casting score (Stamina + Art + Form + Aura) to add to the roll",
    default: None,
    minimum: Some(0),
};

const TARGET: ParamSpec = ParamSpec {
    name: "target",
    description: "The target level of the spell",
    default: None,
    minimum: Some(0),
};

const BOTCH_NUMBER: ParamSpec = ParamSpec {
    name: "number",
    description: "number of dice to roll (optional, defaults to 1)",
    default: Some(1),
    minimum: Some(1),
};

const SPELL_PARAMS: &[ParamSpec] = &[CASTING_SCORE, TARGET];

static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "stressed",
        description: "A stressed die (with optional modifier)",
        params: &[STRESSED_MODIFIER],
        handler: run_stressed,
    },
    CommandSpec {
        name: "simple",
        description: "A simple die (with optional modifier)",
        params: &[SIMPLE_MODIFIER],
        handler: run_simple,
    },
    CommandSpec {
        name: "formulaic",
        description: "A formulaic spell",
        params: SPELL_PARAMS,
        handler: run_formulaic,
    },
    CommandSpec {
        name: "spontaneous",
        description: "A non-fatiguing spont (no roll, but does the appropriate calculation)",
        params: SPELL_PARAMS,
        handler: run_spontaneous,
    },
    CommandSpec {
        name: "fspont",
        description: "A fatiguing spont",
        params: SPELL_PARAMS,
        handler: run_fatiguing_spontaneous,
    },
    CommandSpec {
        name: "botch",
        description: "Roll the given number of botch dice",
        params: &[BOTCH_NUMBER],
        handler: run_botch,
    },
    CommandSpec {
        name: "about",
        description: "this message",
        params: &[],
        handler: run_about,
    },
];

/// Every registered command, in display order.
#[must_use]
pub fn commands() -> &'static [CommandSpec] {
    COMMANDS
}

/// Looks a command up by name.
#[must_use]
pub fn find_command(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|command| command.name == name)
}

/// Runs the named command.
///
/// # Errors
///
/// Returns `RollError::UnknownCommand` if nothing is registered under
/// `name`, or `RollError::InvalidArgument` if the arguments are rejected.
pub fn dispatch(
    name: &str,
    args: &CommandArgs,
    rng: &mut dyn DeterministicRng,
) -> Result<RollReport, RollError> {
    let command = find_command(name).ok_or_else(|| RollError::UnknownCommand(name.to_owned()))?;
    command.run(args, rng)
}

fn run_stressed(
    args: &ResolvedArgs,
    rng: &mut dyn DeterministicRng,
) -> Result<RollReport, RollError> {
    let modifier = args.get("modifier")?;
    Ok(RollReport::Stressed {
        modifier,
        roll: stressed_roll(modifier, rng),
    })
}

fn run_simple(args: &ResolvedArgs, rng: &mut dyn DeterministicRng) -> Result<RollReport, RollError> {
    let modifier = args.get("modifier")?;
    Ok(RollReport::Simple {
        modifier,
        roll: simple_roll(modifier, rng)?,
    })
}

fn run_formulaic(
    args: &ResolvedArgs,
    rng: &mut dyn DeterministicRng,
) -> Result<RollReport, RollError> {
    let casting_score = args.get("casting_score")?;
    let target = args.get("target")?;
    Ok(RollReport::Formulaic {
        casting_score,
        target,
        roll: formulaic_roll(casting_score, target, rng)?,
    })
}

fn run_spontaneous(
    args: &ResolvedArgs,
    _rng: &mut dyn DeterministicRng,
) -> Result<RollReport, RollError> {
    let casting_score = args.get("casting_score")?;
    let target = args.get("target")?;
    Ok(RollReport::Spontaneous {
        casting_score,
        target,
        roll: spont_non_roll(casting_score, target)?,
    })
}

fn run_fatiguing_spontaneous(
    args: &ResolvedArgs,
    rng: &mut dyn DeterministicRng,
) -> Result<RollReport, RollError> {
    let casting_score = args.get("casting_score")?;
    let target = args.get("target")?;
    Ok(RollReport::FatiguingSpontaneous {
        casting_score,
        target,
        roll: fatiguing_spont_roll(casting_score, target, rng)?,
    })
}

fn run_botch(args: &ResolvedArgs, rng: &mut dyn DeterministicRng) -> Result<RollReport, RollError> {
    let requested = args.get("number")?;
    let number = u32::try_from(requested)
        .map_err(|_| RollError::invalid("number", format!("is out of range, got {requested}")))?;
    Ok(RollReport::Botch {
        number,
        roll: botch_roll(number, rng)?,
    })
}

fn run_about(_args: &ResolvedArgs, _rng: &mut dyn DeterministicRng) -> Result<RollReport, RollError> {
    Ok(RollReport::About)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BotchSeverity, Outcome};
    use arsroller_test_support::SequenceRng;

    fn args(pairs: &[(&str, i64)]) -> CommandArgs {
        pairs.iter().map(|(k, v)| ((*k).to_owned(), *v)).collect()
    }

    #[test]
    fn test_command_names_are_unique() {
        let mut names: Vec<&str> = commands().iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), commands().len());
    }

    #[test]
    fn test_registered_commands_match_bot_commands() {
        let names: Vec<&str> = commands().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec!["stressed", "simple", "formulaic", "spontaneous", "fspont", "botch", "about"]
        );
    }

    #[test]
    fn test_stressed_defaults_modifier_to_zero() {
        let mut rng = SequenceRng::new(vec![6]);
        let report = dispatch("stressed", &CommandArgs::new(), &mut rng).unwrap();
        match report {
            RollReport::Stressed { modifier, roll } => {
                assert_eq!(modifier, 0);
                assert_eq!(roll.total, 6);
            }
            other => panic!("expected Stressed, got {other:?}"),
        }
    }

    #[test]
    fn test_stressed_accepts_negative_modifier() {
        let mut rng = SequenceRng::new(vec![6]);
        let report = dispatch("stressed", &args(&[("modifier", -3)]), &mut rng).unwrap();
        assert!(matches!(report, RollReport::Stressed { roll, .. } if roll.total == 3));
    }

    #[test]
    fn test_simple_rejects_negative_modifier_before_rolling() {
        let mut rng = SequenceRng::new(vec![]);
        let err = dispatch("simple", &args(&[("modifier", -1)]), &mut rng).unwrap_err();
        assert_eq!(
            err,
            RollError::InvalidArgument("modifier must be at least 0, got -1".to_owned())
        );
        assert_eq!(rng.drawn(), 0);
    }

    #[test]
    fn test_formulaic_requires_both_parameters() {
        let mut rng = SequenceRng::new(vec![]);
        let err = dispatch("formulaic", &args(&[("casting_score", 10)]), &mut rng).unwrap_err();
        assert_eq!(
            err,
            RollError::InvalidArgument("target is required".to_owned())
        );
    }

    #[test]
    fn test_formulaic_dispatch() {
        let mut rng = SequenceRng::new(vec![1, 5]);
        let report = dispatch(
            "formulaic",
            &args(&[("casting_score", 12), ("target", 20)]),
            &mut rng,
        )
        .unwrap();
        assert_eq!(
            report,
            RollReport::Formulaic {
                casting_score: 12,
                target: 20,
                roll: SpellRoll {
                    rolls: vec![1, 10],
                    total: 22,
                    outcome: Outcome::MarginalSuccess,
                },
            }
        );
    }

    #[test]
    fn test_spontaneous_dispatch_draws_nothing() {
        let mut rng = SequenceRng::new(vec![]);
        let report = dispatch(
            "spontaneous",
            &args(&[("casting_score", 20), ("target", 15)]),
            &mut rng,
        )
        .unwrap();
        match report {
            RollReport::Spontaneous { roll, .. } => {
                assert_eq!(roll.modified_total, 10);
                assert_eq!(roll.outcome, Outcome::Failure);
            }
            other => panic!("expected Spontaneous, got {other:?}"),
        }
    }

    #[test]
    fn test_fspont_dispatch() {
        let mut rng = SequenceRng::new(vec![0]);
        let report = dispatch(
            "fspont",
            &args(&[("casting_score", 20), ("target", 5)]),
            &mut rng,
        )
        .unwrap();
        assert!(matches!(
            report,
            RollReport::FatiguingSpontaneous { roll, .. } if roll.outcome == Outcome::Botch
        ));
    }

    #[test]
    fn test_botch_defaults_to_one_die() {
        let mut rng = SequenceRng::new(vec![0]);
        let report = dispatch("botch", &CommandArgs::new(), &mut rng).unwrap();
        match report {
            RollReport::Botch { number, roll } => {
                assert_eq!(number, 1);
                assert_eq!(roll.severity, BotchSeverity::Botch);
            }
            other => panic!("expected Botch, got {other:?}"),
        }
    }

    #[test]
    fn test_botch_rejects_zero_dice() {
        let mut rng = SequenceRng::new(vec![]);
        let err = dispatch("botch", &args(&[("number", 0)]), &mut rng).unwrap_err();
        assert!(matches!(err, RollError::InvalidArgument(_)));
    }

    #[test]
    fn test_botch_rejects_count_beyond_u32() {
        let mut rng = SequenceRng::new(vec![]);
        let err = dispatch("botch", &args(&[("number", i64::MAX)]), &mut rng).unwrap_err();
        assert!(matches!(err, RollError::InvalidArgument(_)));
    }

    #[test]
    fn test_unknown_parameter_is_rejected() {
        let mut rng = SequenceRng::new(vec![]);
        let err = dispatch("stressed", &args(&[("bonus", 2)]), &mut rng).unwrap_err();
        assert_eq!(
            err,
            RollError::InvalidArgument("bonus is not a parameter of /stressed".to_owned())
        );
    }

    #[test]
    fn test_unknown_command() {
        let mut rng = SequenceRng::new(vec![]);
        let err = dispatch("fireball", &CommandArgs::new(), &mut rng).unwrap_err();
        assert_eq!(err, RollError::UnknownCommand("fireball".to_owned()));
    }

    #[test]
    fn test_about_takes_no_parameters() {
        let mut rng = SequenceRng::new(vec![]);
        assert_eq!(
            dispatch("about", &CommandArgs::new(), &mut rng).unwrap(),
            RollReport::About
        );
    }

    #[test]
    fn test_report_serializes_with_kind_tag() {
        let mut rng = SequenceRng::new(vec![0, 5, 0]);
        let report = dispatch("botch", &args(&[("number", 3)]), &mut rng).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "botch");
        assert_eq!(json["number"], 3);
        assert_eq!(json["roll"]["botches"], 2);
        assert_eq!(json["roll"]["severity"], "double_botch");
    }

    #[test]
    fn test_command_spec_serializes_without_handler() {
        let json = serde_json::to_value(find_command("botch").unwrap()).unwrap();
        assert_eq!(json["name"], "botch");
        assert_eq!(json["params"][0]["name"], "number");
        assert_eq!(json["params"][0]["default"], 1);
        assert!(json.get("handler").is_none());
    }
}
