//! Renders roll reports as Markdown chat replies.

use std::fmt::{Debug, Display, Write};

use arsroller_rules::application::commands::{RollReport, commands};

const ABOUT_HEADER: &str = "A simple Ars Magica 5th Edition die roller";

/// `Roll: 7` for a single draw, `Rolls: [1, 10]` otherwise.
fn roll_prefix<T: Debug + Display>(rolls: &[T]) -> String {
    match rolls {
        [single] => format!("Roll: {single}"),
        _ => format!("Rolls: {rolls:?}"),
    }
}

/// Help text listing every registered command. Required parameters are
/// shown as `<name>`, optional ones as `[name]`.
#[must_use]
pub fn about_text() -> String {
    let mut text = format!("{ABOUT_HEADER}\n\nSupported commands\n\n");
    for command in commands() {
        text.push('/');
        text.push_str(command.name);
        for param in command.params {
            if param.is_required() {
                let _ = write!(text, " <{}>", param.name);
            } else {
                let _ = write!(text, " [{}]", param.name);
            }
        }
        let _ = writeln!(text, " - {}", command.description);
    }
    text
}

/// Renders a report the way the chat bot replies.
#[must_use]
pub fn render(report: &RollReport) -> String {
    match report {
        RollReport::Stressed { modifier, roll } => {
            let mut reply = format!(
                "{}. Total (with modifier {modifier}): **{}**",
                roll_prefix(&roll.rolls),
                roll.total
            );
            if let Some(outcome) = roll.outcome {
                let _ = write!(reply, "\n**{outcome}**\n");
            }
            reply
        }
        RollReport::Simple { modifier, roll } => format!(
            "{}. Total (with modifier {modifier}): **{}**",
            roll_prefix(&roll.rolls),
            roll.total
        ),
        RollReport::Formulaic {
            casting_score,
            target,
            roll,
        } => format!(
            "{}. Total (with casting score {casting_score}): **{}** (against {target})\n**{}**\n",
            roll_prefix(&roll.rolls),
            roll.total,
            roll.outcome
        ),
        RollReport::Spontaneous { target, roll, .. } => format!(
            "Total: {}. Final total **{}** (against {target})\n**{}**\n",
            roll.total, roll.modified_total, roll.outcome
        ),
        RollReport::FatiguingSpontaneous {
            casting_score,
            target,
            roll,
        } => format!(
            "{}. Total (with casting score {casting_score}): {}. Final total **{}** (against {target})\n**{}**\n",
            roll_prefix(&roll.rolls),
            roll.total,
            roll.modified_total,
            roll.outcome
        ),
        RollReport::Botch { number, roll } => {
            if *number > 1 {
                format!(
                    "Rolls: {:?}. Botches **{}**  -- **{}**",
                    roll.rolls, roll.botches, roll.severity
                )
            } else {
                let face = roll.rolls.first().copied().unwrap_or_default();
                format!("Roll: **{face}** -- **{}**", roll.severity)
            }
        }
        RollReport::About => about_text(),
    }
}
