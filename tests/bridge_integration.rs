//! Integration tests for the subprocess execution bridge
//!
//! Invocations are driven through `sh -c` so the spawn/stream/settle
//! machinery is exercised without requiring a Python interpreter on the
//! test host.

use std::path::PathBuf;

use voxbridge::bridge::{Invocation, ProcessBridge};
use voxbridge::command::{CommandExecutor, CommandResult};
use voxbridge::core::config::BridgeConfig;
use voxbridge::core::error::VoxError;

fn bridge(tag: &str) -> (ProcessBridge, PathBuf) {
    let log_path =
        std::env::temp_dir().join(format!("voxbridge-it-{tag}-{}.log", std::process::id()));
    let _ = std::fs::remove_file(&log_path);
    let config = BridgeConfig {
        log_path: log_path.clone(),
        ..BridgeConfig::default()
    };
    (ProcessBridge::new(config).unwrap(), log_path)
}

fn sh(script: &str) -> Invocation {
    Invocation::new("sh", vec!["-c".into(), script.into()], script)
}

#[tokio::test]
async fn test_resolves_trailing_payload_after_debug_lines() {
    let (bridge, log_path) = bridge("payload");
    let script = r#"echo debug one; echo debug two; echo debug three; echo '{"success": true, "message": "ok", "error": "", "action": "open", "additional_data": {}}'"#;

    let result = bridge.run(sh(script)).await.unwrap();
    assert!(result.success);
    assert_eq!(result.message, "ok");
    assert_eq!(result.action, "open");
    assert_eq!(result.error, "");
    assert!(result.additional_data.is_empty());

    let _ = std::fs::remove_file(&log_path);
}

#[tokio::test]
async fn test_non_utf8_diagnostic_line_does_not_lose_payload() {
    let (bridge, log_path) = bridge("rawbytes");
    let script = r#"printf '\377\n'; echo '{"success": true, "message": "ok", "error": "", "action": "open", "additional_data": {}}'"#;

    let result = bridge.run(sh(script)).await.unwrap();
    assert!(result.success);
    assert_eq!(result.action, "open");

    let _ = std::fs::remove_file(&log_path);
}

#[tokio::test]
async fn test_non_utf8_stderr_is_still_captured() {
    let (bridge, log_path) = bridge("rawerr");

    let err = bridge
        .run(sh(r#"printf '\377\n' >&2; echo boom >&2; exit 1"#))
        .await
        .unwrap_err();
    match err {
        VoxError::CommandFailed(message) => assert!(message.contains("boom")),
        other => panic!("expected CommandFailed, got {other:?}"),
    }

    let _ = std::fs::remove_file(&log_path);
}

#[tokio::test]
async fn test_rejects_nonzero_exit_with_stderr_as_message() {
    let (bridge, log_path) = bridge("exit1");

    let err = bridge
        .run(sh("echo boom >&2; exit 1"))
        .await
        .unwrap_err();
    match err {
        VoxError::CommandFailed(message) => assert_eq!(message, "boom"),
        other => panic!("expected CommandFailed, got {other:?}"),
    }

    let _ = std::fs::remove_file(&log_path);
}

#[tokio::test]
async fn test_rejects_empty_stdout_with_generic_message() {
    let (bridge, log_path) = bridge("empty");

    let err = bridge.run(sh("exit 0")).await.unwrap_err();
    match err {
        VoxError::CommandFailed(message) => {
            assert_eq!(message, "unknown error executing command")
        }
        other => panic!("expected CommandFailed, got {other:?}"),
    }

    let _ = std::fs::remove_file(&log_path);
}

#[tokio::test]
async fn test_rejects_output_without_payload() {
    let (bridge, log_path) = bridge("nopayload");

    let err = bridge
        .run(sh("echo just a log line; echo another"))
        .await
        .unwrap_err();
    assert!(matches!(err, VoxError::MalformedPayload { .. }));

    let _ = std::fs::remove_file(&log_path);
}

#[tokio::test]
async fn test_rejects_unparseable_payload_and_captures_stderr() {
    let (bridge, log_path) = bridge("badjson");

    let err = bridge
        .run(sh("echo triage context >&2; echo '{not json}'"))
        .await
        .unwrap_err();
    match err {
        VoxError::MalformedPayload { stderr } => assert!(stderr.contains("triage context")),
        other => panic!("expected MalformedPayload, got {other:?}"),
    }

    let _ = std::fs::remove_file(&log_path);
}

#[tokio::test]
async fn test_spawn_failure_is_rejected() {
    let (bridge, log_path) = bridge("spawn");

    let err = bridge
        .run(Invocation::new(
            "voxbridge-no-such-interpreter",
            vec![],
            "youtube open",
        ))
        .await
        .unwrap_err();
    match err {
        VoxError::SpawnFailure { program, .. } => {
            assert_eq!(program, "voxbridge-no-such-interpreter")
        }
        other => panic!("expected SpawnFailure, got {other:?}"),
    }

    let _ = std::fs::remove_file(&log_path);
}

#[tokio::test]
async fn test_stream_traffic_lands_in_command_log() {
    let (bridge, log_path) = bridge("log");

    let _ = bridge
        .run(sh(r#"echo hello from child; echo '{"success": true}'"#))
        .await
        .unwrap();

    let contents = std::fs::read_to_string(&log_path).unwrap();
    assert!(contents.lines().all(|line| line.starts_with('[')));
    assert!(contents.contains("interpreter stdout: hello from child"));
    assert!(contents.contains("interpreter exited with status"));

    let _ = std::fs::remove_file(&log_path);
}

#[tokio::test]
async fn test_local_and_remote_results_are_indistinguishable() {
    // A result produced by a local handler and the same result relayed
    // through the subprocess path must match field for field.
    let executor = CommandExecutor::with_defaults();
    let local = executor.execute("youtube open");

    let wire = serde_json::to_string(&local).unwrap();
    let (bridge, log_path) = bridge("roundtrip");
    let remote: CommandResult = bridge
        .run(sh(&format!("echo going remote; echo '{wire}'")))
        .await
        .unwrap();

    assert_eq!(local, remote);

    let _ = std::fs::remove_file(&log_path);
}
