//! The shared result schema for command execution
//!
//! Both the local executor and the subprocess bridge produce this shape,
//! so callers never need to know which path served a request. On the wire
//! every field is present: an empty `error` means no error and
//! `additional_data` is an empty map rather than null.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outcome of one command execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub additional_data: Map<String, Value>,
}

impl Default for CommandResult {
    fn default() -> Self {
        Self {
            success: false,
            message: String::new(),
            error: String::new(),
            action: String::new(),
            additional_data: Map::new(),
        }
    }
}

impl CommandResult {
    /// Successful result with a user-facing message
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            ..Self::default()
        }
    }

    /// Failed result with a user-facing message and an error detail
    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: error.into(),
            ..Self::default()
        }
    }

    /// Attach the verb that was actually performed
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Attach one entry of auxiliary data
    pub fn with_data(mut self, key: impl Into<String>, value: Value) -> Self {
        self.additional_data.insert(key.into(), value);
        self
    }

    /// Fill unset optional fields with their defaults
    ///
    /// `action` falls back to the resolved verb and a blank `message` gets
    /// generic wording, so callers never see a partially populated result.
    pub fn normalize(mut self, verb: &str) -> Self {
        if self.action.is_empty() {
            self.action = verb.to_string();
        }
        if self.message.is_empty() {
            self.message = if self.success {
                "Command executed successfully".into()
            } else {
                "Command failed".into()
            };
        }
        self
    }
}
