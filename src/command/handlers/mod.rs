//! Command handler contract and built-in handlers
//!
//! A handler exposes three operations: execute with an argument string,
//! report its own name, and report help text. Handlers surface their own
//! usage problems (missing sub-action, missing query) as failed
//! [`CommandResult`]s; a typed `Err` is reserved for genuine faults and is
//! converted by the executor, never propagated to callers.

pub mod volume;
pub mod youtube;

pub use volume::VolumeCommand;
pub use youtube::YoutubeCommand;

use crate::command::result::CommandResult;
use crate::core::error::Result;

/// Capability contract every command handler implements
pub trait CommandHandler: Send + Sync {
    /// Run the command with the remainder text parsed off the verb
    fn execute(&self, args: &str) -> Result<CommandResult>;

    /// Name the handler registers under (case-insensitive)
    fn name(&self) -> &str;

    /// Human-readable usage text
    fn help(&self) -> &str {
        "No help available for this command."
    }
}
