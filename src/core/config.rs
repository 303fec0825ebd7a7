//! Bridge configuration
//!
//! Paths and binaries the process bridge needs to reach the external
//! interpreter and the handler logic it imports.

use std::path::PathBuf;

/// Configuration for the process bridge
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// External interpreter binary used to run remote commands
    pub interpreter: String,
    /// Directory holding the importable handler logic (`command_executor` module)
    pub handlers_dir: PathBuf,
    /// Append-only log file for command traffic
    pub log_path: PathBuf,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            interpreter: "python3".into(),
            handlers_dir: PathBuf::from("commands"),
            log_path: PathBuf::from("logs/command-api.log"),
        }
    }
}

impl BridgeConfig {
    /// Create a config from environment variables
    ///
    /// Optional: VOX_INTERPRETER (defaults to `python3`)
    /// Optional: VOX_HANDLERS_DIR (defaults to `commands`)
    /// Optional: VOX_LOG_FILE (defaults to `logs/command-api.log`)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            interpreter: std::env::var("VOX_INTERPRETER").unwrap_or(defaults.interpreter),
            handlers_dir: std::env::var("VOX_HANDLERS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.handlers_dir),
            log_path: std::env::var("VOX_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_path),
        }
    }
}
