//! Voxbridge - Entry Point
//!
//! Interactive driver for the command pipeline. Input lines are dispatched
//! to the local executor, or through the Python bridge when --remote is
//! set, and results are printed as pretty JSON.

use voxbridge::bridge::ProcessBridge;
use voxbridge::command::CommandExecutor;
use voxbridge::core::config::BridgeConfig;
use voxbridge::core::error::Result;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "voxbridge", about = "Free-text command dispatch with a Python execution bridge")]
struct Args {
    /// External interpreter binary
    #[arg(long)]
    interpreter: Option<String>,

    /// Directory holding the importable handler logic
    #[arg(long)]
    handlers_dir: Option<PathBuf>,

    /// Append-only command log file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Route commands through the interpreter subprocess instead of
    /// the in-process handlers
    #[arg(long)]
    remote: bool,
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("voxbridge=debug")
        .init();

    let args = Args::parse();

    let mut config = BridgeConfig::from_env();
    if let Some(interpreter) = args.interpreter {
        config.interpreter = interpreter;
    }
    if let Some(handlers_dir) = args.handlers_dir {
        config.handlers_dir = handlers_dir;
    }
    if let Some(log_file) = args.log_file {
        config.log_path = log_file;
    }

    tracing::info!("Voxbridge starting...");

    // Async runtime for bridge calls
    let rt = Runtime::new()?;

    let executor = CommandExecutor::with_defaults();
    let bridge = if args.remote {
        Some(ProcessBridge::new(config)?)
    } else {
        None
    };

    // Display welcome message
    println!("\n=== VOXBRIDGE ===");
    println!("Type a command like \"youtube play despacito\"");
    println!();
    println!("Meta commands:");
    println!("  commands        - List registered commands");
    println!("  help <name>     - Show help for a command");
    println!("  quit / q        - Exit");
    if bridge.is_some() {
        println!();
        println!("Remote mode: commands run in the external interpreter");
    }
    println!();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "q" {
            break;
        }

        if input == "commands" {
            println!("Available: {}", executor.registry().list().join(", "));
            continue;
        }

        if let Some(name) = input.strip_prefix("help ") {
            match executor.registry().get(name.trim()) {
                Some(handler) => println!("{}", handler.help()),
                None => println!("No such command: {}", name.trim()),
            }
            continue;
        }

        let result = match &bridge {
            Some(bridge) => match rt.block_on(bridge.invoke(input)) {
                Ok(result) => result,
                Err(err) => {
                    println!("Bridge error: {err}");
                    continue;
                }
            },
            None => executor.execute(input),
        };

        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Failed to render result: {err}"),
        }
    }

    tracing::info!("Voxbridge shutting down");
    Ok(())
}
