//! System volume commands

use serde_json::Value;

use crate::command::handlers::CommandHandler;
use crate::command::parser;
use crate::command::result::CommandResult;
use crate::core::error::Result;

const DEFAULT_STEP: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VolumeAction {
    Up,
    Down,
    Set,
    Mute,
    Unmute,
}

impl VolumeAction {
    fn from_verb(verb: &str) -> Option<Self> {
        Some(match verb {
            "up" => Self::Up,
            "down" => Self::Down,
            "set" => Self::Set,
            "mute" => Self::Mute,
            "unmute" => Self::Unmute,
            _ => return None,
        })
    }
}

/// Handler for the `volume` verb
pub struct VolumeCommand;

impl CommandHandler for VolumeCommand {
    fn execute(&self, args: &str) -> Result<CommandResult> {
        let (verb, query) = parser::parse(args);
        let verb = verb.to_lowercase();

        if verb.is_empty() {
            return Ok(CommandResult::failure(
                "Command failed",
                "No action provided. Usage: volume <up|down|set|mute|unmute> [value]",
            ));
        }

        let action = match VolumeAction::from_verb(&verb) {
            Some(action) => action,
            None => {
                return Ok(CommandResult::failure(
                    "Command failed",
                    format!("Unknown volume action: {verb}"),
                ))
            }
        };

        let result = match action {
            VolumeAction::Up | VolumeAction::Down => {
                let step = if query.is_empty() {
                    DEFAULT_STEP
                } else {
                    match query.parse::<u8>() {
                        Ok(step) if step <= 100 => step,
                        _ => {
                            return Ok(CommandResult::failure(
                                "Command failed",
                                format!("Invalid volume step: {query}"),
                            ))
                        }
                    }
                };
                let direction = if action == VolumeAction::Up { "up" } else { "down" };
                CommandResult::ok(format!("Volume {direction} by {step}"))
                    .with_data("direction", Value::String(direction.into()))
                    .with_data("step", Value::from(step))
            }
            VolumeAction::Set => {
                if query.is_empty() {
                    return Ok(CommandResult::failure(
                        "Command failed",
                        "No volume level provided. Usage: volume set <0-100>",
                    ));
                }
                match query.parse::<u8>() {
                    Ok(level) if level <= 100 => {
                        CommandResult::ok(format!("Volume set to {level}"))
                            .with_data("level", Value::from(level))
                    }
                    _ => {
                        return Ok(CommandResult::failure(
                            "Command failed",
                            format!("Invalid volume level: {query}"),
                        ))
                    }
                }
            }
            VolumeAction::Mute => {
                CommandResult::ok("Volume muted").with_data("muted", Value::Bool(true))
            }
            VolumeAction::Unmute => {
                CommandResult::ok("Volume unmuted").with_data("muted", Value::Bool(false))
            }
        };

        Ok(result.with_action(verb))
    }

    fn name(&self) -> &str {
        "volume"
    }

    fn help(&self) -> &str {
        "Volume Command - Control system volume\n\
         \n\
         Usage: volume <action> [value]\n\
         \n\
         Actions:\n\
         \x20 up [step]    - Raise volume (default step 10)\n\
         \x20 down [step]  - Lower volume (default step 10)\n\
         \x20 set <0-100>  - Set volume to an absolute level\n\
         \x20 mute         - Mute audio\n\
         \x20 unmute       - Unmute audio"
    }
}
