//! Registry mapping verbs to command handlers
//!
//! Names are case-folded on both registration and lookup. Re-registering
//! a name silently replaces the previous handler; listing is always
//! lexicographically sorted so tests and UI listings are deterministic.

use std::collections::BTreeMap;

use crate::command::handlers::CommandHandler;

/// Verb-to-handler mapping, case-insensitive, last registration wins
#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, Box<dyn CommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the built-in handlers
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(crate::command::handlers::YoutubeCommand));
        registry.register(Box::new(crate::command::handlers::VolumeCommand));
        registry
    }

    /// Store a handler under its self-reported name, replacing any previous one
    pub fn register(&mut self, handler: Box<dyn CommandHandler>) {
        let name = handler.name().to_lowercase();
        tracing::debug!(command = %name, "registered command");
        self.commands.insert(name, handler);
    }

    /// Look up a handler by name, case-insensitively
    pub fn get(&self, name: &str) -> Option<&dyn CommandHandler> {
        self.commands.get(&name.to_lowercase()).map(|h| h.as_ref())
    }

    /// All registered names in lexicographic order
    pub fn list(&self) -> Vec<&str> {
        self.commands.keys().map(|k| k.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::result::CommandResult;
    use crate::core::error::Result;

    struct NamedHandler {
        name: &'static str,
        reply: &'static str,
    }

    impl CommandHandler for NamedHandler {
        fn execute(&self, _args: &str) -> Result<CommandResult> {
            Ok(CommandResult::ok(self.reply))
        }

        fn name(&self) -> &str {
            self.name
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut registry = CommandRegistry::new();
        registry.register(Box::new(NamedHandler {
            name: "youtube",
            reply: "hi",
        }));

        assert!(registry.get("YouTube").is_some());
        assert!(registry.get("YOUTUBE").is_some());
        assert!(registry.get("spotify").is_none());
    }

    #[test]
    fn test_registration_name_is_folded() {
        let mut registry = CommandRegistry::new();
        registry.register(Box::new(NamedHandler {
            name: "MixedCase",
            reply: "hi",
        }));

        assert!(registry.get("mixedcase").is_some());
        assert_eq!(registry.list(), vec!["mixedcase"]);
    }

    #[test]
    fn test_reregistration_replaces() {
        let mut registry = CommandRegistry::new();
        registry.register(Box::new(NamedHandler {
            name: "echo",
            reply: "first",
        }));
        registry.register(Box::new(NamedHandler {
            name: "echo",
            reply: "second",
        }));

        let result = registry.get("echo").unwrap().execute("").unwrap();
        assert_eq!(result.message, "second");
        assert_eq!(registry.list().len(), 1);
    }

    #[test]
    fn test_list_is_sorted() {
        let mut registry = CommandRegistry::new();
        for name in ["zulu", "alpha", "mike"] {
            registry.register(Box::new(NamedHandler { name, reply: "" }));
        }
        assert_eq!(registry.list(), vec!["alpha", "mike", "zulu"]);
    }
}
