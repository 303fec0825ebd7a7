//! YouTube playback and search commands
//!
//! Sub-actions are an enumerated type dispatched through a single match,
//! so the mapping of verb -> query requirement -> behavior is exhaustively
//! checkable. Actions resolve to either a target URL or a player keyboard
//! shortcut, reported in `additional_data` for the host to act on.

use serde_json::Value;

use crate::command::handlers::CommandHandler;
use crate::command::parser;
use crate::command::result::CommandResult;
use crate::core::error::Result;

/// YouTube sub-action vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum YoutubeAction {
    Search,
    Play,
    Open,
    Pause,
    Resume,
    Fullscreen,
    Rewind,
    Forward,
    VolumeUp,
    VolumeDown,
    Mute,
    Captions,
    Theater,
    Miniplayer,
    SkipNext,
    SkipPrev,
    Start,
    End,
}

impl YoutubeAction {
    fn from_verb(verb: &str) -> Option<Self> {
        Some(match verb {
            "search" => Self::Search,
            "play" => Self::Play,
            "open" => Self::Open,
            "pause" => Self::Pause,
            "resume" => Self::Resume,
            "fullscreen" => Self::Fullscreen,
            "rewind" => Self::Rewind,
            "forward" => Self::Forward,
            "volume_up" => Self::VolumeUp,
            "volume_down" => Self::VolumeDown,
            "mute" => Self::Mute,
            "captions" => Self::Captions,
            "theater" => Self::Theater,
            "miniplayer" => Self::Miniplayer,
            "skip_next" => Self::SkipNext,
            "skip_prev" => Self::SkipPrev,
            "start" => Self::Start,
            "end" => Self::End,
            _ => return None,
        })
    }

    fn requires_query(self) -> bool {
        matches!(self, Self::Search | Self::Play)
    }

    /// Player keyboard shortcut for key-press style actions
    fn shortcut_key(self) -> Option<&'static str> {
        Some(match self {
            Self::Pause | Self::Resume => "k",
            Self::Fullscreen => "f",
            Self::Rewind => "j",
            Self::Forward => "l",
            Self::VolumeUp => "ArrowUp",
            Self::VolumeDown => "ArrowDown",
            Self::Mute => "m",
            Self::Captions => "c",
            Self::Theater => "t",
            Self::Miniplayer => "i",
            Self::SkipNext => "Shift+ArrowRight",
            Self::SkipPrev => "Shift+ArrowLeft",
            Self::Start => "0",
            Self::End => "End",
            Self::Search | Self::Play | Self::Open => return None,
        })
    }
}

/// Handler for the `youtube` verb
pub struct YoutubeCommand;

impl CommandHandler for YoutubeCommand {
    fn execute(&self, args: &str) -> Result<CommandResult> {
        let (verb, query) = parser::parse(args);
        let verb = verb.to_lowercase();

        if verb.is_empty() {
            return Ok(CommandResult::failure(
                "Command failed",
                "No action provided. Usage: youtube <action> [query]",
            ));
        }

        let action = match YoutubeAction::from_verb(&verb) {
            Some(action) => action,
            None => {
                return Ok(CommandResult::failure(
                    "Command failed",
                    format!("Unknown YouTube action: {verb}"),
                ))
            }
        };

        if action.requires_query() && query.is_empty() {
            return Ok(CommandResult::failure(
                "Command failed",
                format!("No search query provided. Usage: youtube {verb} <query>"),
            ));
        }

        let result = match action {
            YoutubeAction::Open => CommandResult::ok("Opened YouTube homepage")
                .with_data("url", Value::String("https://www.youtube.com".into())),
            YoutubeAction::Search => {
                CommandResult::ok(format!("Searched YouTube for: {query}"))
                    .with_data("url", Value::String(search_url(query)))
            }
            YoutubeAction::Play => {
                // Direct video links open as-is; anything else goes through search
                let url = if query.starts_with("http") && query.contains("youtube.com/watch") {
                    query.to_string()
                } else {
                    search_url(query)
                };
                CommandResult::ok(format!("Playing YouTube video: {query}"))
                    .with_data("url", Value::String(url))
            }
            key_action => {
                let key = key_action
                    .shortcut_key()
                    .unwrap_or_default();
                CommandResult::ok(format!("Successfully executed {verb}"))
                    .with_data("key", Value::String(key.into()))
            }
        };

        Ok(result.with_action(verb))
    }

    fn name(&self) -> &str {
        "youtube"
    }

    fn help(&self) -> &str {
        "YouTube Command - Control YouTube playback and search for videos\n\
         \n\
         Usage: youtube <action> [query]\n\
         \n\
         Actions:\n\
         \x20 search <query>     - Search for videos on YouTube\n\
         \x20 play <query>       - Play a video on YouTube\n\
         \x20 pause              - Pause the current video\n\
         \x20 resume             - Resume the current video\n\
         \x20 fullscreen         - Toggle fullscreen mode\n\
         \x20 open               - Open YouTube homepage\n\
         \x20 rewind             - Rewind the video\n\
         \x20 forward            - Fast forward the video\n\
         \x20 volume_up          - Increase volume\n\
         \x20 volume_down        - Decrease volume\n\
         \x20 mute               - Toggle mute\n\
         \x20 captions           - Toggle captions\n\
         \x20 theater            - Toggle theater mode\n\
         \x20 miniplayer         - Toggle miniplayer\n\
         \x20 skip_next          - Skip to next video\n\
         \x20 skip_prev          - Skip to previous video\n\
         \x20 start              - Go to start of video\n\
         \x20 end                - Go to end of video"
    }
}

fn search_url(query: &str) -> String {
    format!(
        "https://www.youtube.com/results?search_query={}",
        encode_query(query)
    )
}

/// Percent-encode a search query for safe URL embedding
fn encode_query(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    for byte in query.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
