//! Routes for the roll commands.

use std::sync::PoisonError;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use arsroller_core::error::RollError;
use arsroller_rules::application::commands::{self, CommandArgs, CommandSpec, RollReport};

use crate::error::ApiError;
use crate::reply;
use crate::state::AppState;

/// Response body for GET /.
#[derive(Debug, Serialize)]
pub struct CommandListResponse {
    /// Every registered command with its parameters.
    pub commands: &'static [CommandSpec],
}

/// Response body returned after a command is resolved.
#[derive(Debug, Serialize)]
pub struct RollResponse {
    /// The command that ran.
    pub command: String,
    /// Identifier tying this response to its log lines.
    pub correlation_id: Uuid,
    /// Structured result.
    pub result: RollReport,
    /// The result rendered as a chat reply.
    pub message: String,
}

/// GET /
async fn list_commands() -> Json<CommandListResponse> {
    Json(CommandListResponse {
        commands: commands::commands(),
    })
}

/// Rejects botch requests above the configured dice limit.
fn check_limits(command: &str, args: &CommandArgs, state: &AppState) -> Result<(), RollError> {
    if command != "botch" {
        return Ok(());
    }
    match args.get("number") {
        Some(number) if *number > i64::from(state.max_botch_dice) => Err(RollError::invalid(
            "number",
            format!("must be at most {}, got {number}", state.max_botch_dice),
        )),
        _ => Ok(()),
    }
}

/// POST /{command}
#[instrument(skip(state, args))]
async fn run_command(
    State(state): State<AppState>,
    Path(command): Path<String>,
    Json(args): Json<CommandArgs>,
) -> Result<Json<RollResponse>, ApiError> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, ?args, "handling roll command");

    check_limits(&command, &args, &state)?;

    let result = {
        // Generator state stays valid across a panic; recover from poisoning.
        let mut rng = state.rng.lock().unwrap_or_else(PoisonError::into_inner);
        commands::dispatch(&command, &args, &mut *rng)?
    };
    let message = reply::render(&result);

    info!(%correlation_id, "roll command resolved");

    Ok(Json(RollResponse {
        command,
        correlation_id,
        result,
        message,
    }))
}

/// Returns the router for the roll commands.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_commands))
        .route("/{command}", post(run_command))
}
