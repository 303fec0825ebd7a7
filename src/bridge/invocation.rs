//! Interpreter invocation construction
//!
//! The entry program handed to the interpreter is a fixed constant; the
//! command text and the handler-logic directory travel as argv entries
//! after it. Nothing is ever spliced into the program source, so there is
//! no escaping to get wrong and no way for command text to corrupt the
//! generated program.

use chrono::{DateTime, Utc};

use crate::core::config::BridgeConfig;

/// Entry program run inside the external interpreter
///
/// Reads the raw command from `sys.argv[1]` and the handler-logic
/// directory from `sys.argv[2]`. All diagnostics go to stderr; stdout
/// carries exactly one JSON object line, on every branch, as the last
/// line of output.
pub const ENTRY_PROGRAM: &str = r#"
import json
import logging
import sys
import traceback

logging.basicConfig(
    stream=sys.stderr,
    level=logging.DEBUG,
    format="%(asctime)s - %(name)s - %(levelname)s - %(message)s",
)
log = logging.getLogger("voxbridge")


def emit(payload):
    print(json.dumps(payload))


command = sys.argv[1] if len(sys.argv) > 1 else ""
handlers_dir = sys.argv[2] if len(sys.argv) > 2 else ""

log.debug("python version: %s", sys.version)
log.debug("adding to sys.path: %s", handlers_dir)
sys.path.append(handlers_dir)

try:
    log.debug("importing CommandExecutor")
    from command_executor import CommandExecutor

    log.debug("executing command: %r", command)
    result = CommandExecutor.execute(command)
    log.debug("raw result: %r", result)

    if not isinstance(result, dict):
        log.warning("result is not a dict: %r", result)
        result = {
            "success": True,
            "message": "Command executed with non-dict result: %r" % (result,),
            "action": command,
            "error": "",
            "additional_data": {"raw_result": str(result)},
        }
    emit(result)
except ImportError as exc:
    log.error("import error: %s", exc)
    log.error("sys.path: %s", sys.path)
    log.error(traceback.format_exc())
    emit({
        "success": False,
        "error": "Import error: %s" % exc,
        "message": "Failed to import CommandExecutor",
        "action": "",
        "additional_data": {"sys_path": sys.path, "traceback": traceback.format_exc()},
    })
except Exception as exc:
    log.error("execution error: %s", exc)
    log.error(traceback.format_exc())
    emit({
        "success": False,
        "error": "Execution error: %s" % exc,
        "message": "Failed to execute command",
        "action": "",
        "additional_data": {"traceback": traceback.format_exc()},
    })
"#;

/// One execution attempt against a single command string
///
/// Ephemeral: owned by the bridge call that created it and dropped when
/// the call settles.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub raw_command: String,
    pub program: String,
    pub args: Vec<String>,
    pub started_at: DateTime<Utc>,
}

impl Invocation {
    /// Arbitrary program invocation
    ///
    /// Used by hosts embedding a different interpreter, and by tests that
    /// exercise the bridge without a real one.
    pub fn new(program: impl Into<String>, args: Vec<String>, raw_command: impl Into<String>) -> Self {
        Self {
            raw_command: raw_command.into(),
            program: program.into(),
            args,
            started_at: Utc::now(),
        }
    }

    /// Standard remote invocation: entry program inline, command and
    /// handler directory as structured arguments
    pub fn for_command(config: &BridgeConfig, command: &str) -> Self {
        let args = vec![
            "-c".to_string(),
            ENTRY_PROGRAM.to_string(),
            command.to_string(),
            config.handlers_dir.display().to_string(),
        ];
        Self::new(config.interpreter.clone(), args, command)
    }
}
