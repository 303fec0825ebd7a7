//! Host-side request boundary
//!
//! The shape a host (HTTP route, UI form) hands to the bridge: a single
//! `command` field. Route wiring itself lives with the host; this module
//! only validates the request and converts a bridge rejection into the
//! failure result the host returns to its user.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bridge::ProcessBridge;
use crate::command::result::CommandResult;
use crate::core::error::VoxError;

/// Request body carrying one free-text command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteRequest {
    #[serde(default)]
    pub command: String,
}

/// Validate a request and execute it through the bridge
///
/// An absent or blank command yields an immediate local failure without
/// touching the bridge. A bridge rejection becomes a failure result here;
/// the bridge itself never produces one.
pub async fn execute(bridge: &ProcessBridge, request: ExecuteRequest) -> CommandResult {
    let command = request.command.trim();
    if command.is_empty() {
        tracing::warn!("execute request with no command");
        return CommandResult::failure("Failed to execute command", "No command provided");
    }

    match bridge.invoke(command).await {
        Ok(result) => result,
        Err(err) => {
            tracing::error!(command = %command, error = %err, "bridge rejected command");
            rejection_to_result(&err)
        }
    }
}

/// Convert a bridge rejection into the failure result returned to the host
///
/// A malformed payload keeps the captured stderr in `additional_data` so
/// the diagnostic context survives the conversion.
fn rejection_to_result(err: &VoxError) -> CommandResult {
    let result = CommandResult::failure("Failed to execute command", err.to_string());
    match err {
        VoxError::MalformedPayload { stderr } if !stderr.trim().is_empty() => {
            result.with_data("stderr", Value::String(stderr.trim_end().to_string()))
        }
        _ => result,
    }
}
