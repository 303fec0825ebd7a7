//! Asynchronous subprocess execution bridge
//!
//! One invocation per call: spawn the interpreter with the entry program
//! inline, stream stdout and stderr into per-invocation buffers (mirroring
//! every line to the command log), then settle on exit by extracting the
//! single trailing JSON payload line from stdout. Anything that cannot
//! yield a valid [`CommandResult`] settles as an error; the bridge never
//! downgrades a failure into a false-success result.
//!
//! There is no built-in timeout or retry. A hung child keeps the call
//! pending; callers needing bounded latency wrap `invoke` in their own
//! timeout. Dropping the returned future kills the child
//! (`kill_on_drop`), so a cancelled call does not leak a process.

use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

use crate::bridge::invocation::Invocation;
use crate::bridge::log::CommandLog;
use crate::command::result::CommandResult;
use crate::core::config::BridgeConfig;
use crate::core::error::{Result, VoxError};

/// Bridge to the external interpreter process
pub struct ProcessBridge {
    config: BridgeConfig,
    log: CommandLog,
}

impl ProcessBridge {
    /// Create a bridge, opening the command log
    pub fn new(config: BridgeConfig) -> Result<Self> {
        let log = CommandLog::open(&config.log_path)?;
        Ok(Self { config, log })
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Execute a command string through the external interpreter
    pub async fn invoke(&self, command: &str) -> Result<CommandResult> {
        self.log
            .append(&format!("Executing remote command: \"{command}\""));
        let invocation = Invocation::for_command(&self.config, command);
        self.run(invocation).await
    }

    /// Run one prepared invocation to completion
    pub async fn run(&self, invocation: Invocation) -> Result<CommandResult> {
        tracing::debug!(
            program = %invocation.program,
            command = %invocation.raw_command,
            "spawning interpreter"
        );

        let mut child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| VoxError::SpawnFailure {
                program: invocation.program.clone(),
                source,
            })?;

        // Streams must drain concurrently or a chatty child can deadlock
        // on a full pipe before exiting.
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let (stdout_buf, stderr_buf) = tokio::join!(
            drain(stdout, self.log.clone(), "stdout"),
            drain(stderr, self.log.clone(), "stderr"),
        );

        let status = child.wait().await?;
        self.log
            .append(&format!("interpreter exited with status {status}"));
        tracing::debug!(code = ?status.code(), "interpreter exited");

        if status.success() && !stdout_buf.is_empty() {
            let line = extract_payload(&stdout_buf).ok_or_else(|| VoxError::MalformedPayload {
                stderr: stderr_buf.clone(),
            })?;
            serde_json::from_str::<CommandResult>(line).map_err(|err| {
                tracing::warn!(error = %err, "payload line failed to parse");
                VoxError::MalformedPayload {
                    stderr: stderr_buf.clone(),
                }
            })
        } else {
            let detail = stderr_buf.trim_end();
            let message = if detail.is_empty() {
                "unknown error executing command".to_string()
            } else {
                detail.to_string()
            };
            Err(VoxError::CommandFailed(message))
        }
    }
}

/// Collect a child stream line by line, mirroring each line to the log
///
/// Lines are read as raw bytes and converted lossily, so a stray
/// non-UTF-8 diagnostic byte mangles only its own line and can never
/// discard the payload or the stderr capture behind it.
async fn drain(
    stream: Option<impl AsyncRead + Unpin>,
    log: CommandLog,
    label: &'static str,
) -> String {
    let Some(stream) = stream else {
        return String::new();
    };
    let mut reader = BufReader::new(stream);
    let mut buffer = String::new();
    let mut chunk = Vec::new();
    loop {
        chunk.clear();
        match reader.read_until(b'\n', &mut chunk).await {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&chunk);
                let line = line.trim_end_matches('\n').trim_end_matches('\r');
                log.append(&format!("interpreter {label}: {line}"));
                buffer.push_str(line);
                buffer.push('\n');
            }
            Err(err) => {
                tracing::warn!(stream = label, error = %err, "interpreter stream read failed");
                break;
            }
        }
    }
    buffer
}

/// Find the trailing payload line in captured stdout
///
/// Scans from the last line backward for the first line whose trimmed text
/// starts with `{` and ends with `}`. Scanning backward tolerates
/// diagnostic lines before the payload and stray blank lines after it.
fn extract_payload(stdout: &str) -> Option<&str> {
    stdout
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| line.starts_with('{') && line.ends_with('}'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_payload_ignores_debug_lines() {
        let stdout = "loading modules\nimport ok\nrunning command\n{\"success\": true, \"message\": \"ok\", \"error\": \"\", \"action\": \"open\", \"additional_data\": {}}\n";
        let line = extract_payload(stdout).unwrap();
        let result: CommandResult = serde_json::from_str(line).unwrap();
        assert!(result.success);
        assert_eq!(result.action, "open");
    }

    #[test]
    fn test_extract_payload_tolerates_trailing_blanks() {
        let stdout = "{\"success\": true}\n\n   \n";
        assert_eq!(extract_payload(stdout), Some("{\"success\": true}"));
    }

    #[test]
    fn test_extract_payload_takes_last_json_shaped_line() {
        let stdout = "{\"stale\": 1}\ndebug text\n{\"fresh\": 2}\n";
        assert_eq!(extract_payload(stdout), Some("{\"fresh\": 2}"));
    }

    #[test]
    fn test_extract_payload_none_when_absent() {
        assert_eq!(extract_payload("just logs\nno json here\n"), None);
        assert_eq!(extract_payload(""), None);
    }
}
