//! Local command execution pipeline
//!
//! parse -> registry lookup -> handler invoke -> normalize. Every outcome,
//! including handler faults, is converted into a [`CommandResult`]; nothing
//! escapes this boundary as an error.

use serde_json::Value;

use crate::command::handlers::CommandHandler;
use crate::command::parser;
use crate::command::registry::CommandRegistry;
use crate::command::result::CommandResult;

/// Executes commands against an explicit registry instance
pub struct CommandExecutor {
    registry: CommandRegistry,
}

impl CommandExecutor {
    pub fn new(registry: CommandRegistry) -> Self {
        Self { registry }
    }

    /// Executor over the built-in handler set
    pub fn with_defaults() -> Self {
        Self::new(CommandRegistry::with_defaults())
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Execute a full command string, e.g. `"youtube play despacito"`
    ///
    /// Always returns a result; unknown verbs and handler faults come back
    /// as `success: false` rather than as errors.
    pub fn execute(&self, command_text: &str) -> CommandResult {
        tracing::debug!(command = %command_text, "executing command");

        let (raw_verb, remainder) = parser::parse(command_text);
        let verb = raw_verb.to_lowercase();

        let handler = match self.registry.get(&verb) {
            Some(handler) if !verb.is_empty() => handler,
            _ => {
                tracing::warn!(verb = %verb, "command not found");
                return CommandResult::failure(
                    format!("Unknown command: {verb}"),
                    format!("Command '{verb}' not found"),
                );
            }
        };

        match handler.execute(remainder) {
            Ok(result) => result.normalize(&verb),
            Err(fault) => {
                tracing::error!(command = %command_text, error = %fault, "command handler failed");
                CommandResult::failure("Error executing command", fault.to_string())
                    .with_data("command", Value::String(command_text.to_string()))
                    .with_data("detail", Value::String(format!("{fault:?}")))
            }
        }
    }
}
