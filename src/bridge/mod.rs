//! Cross-process execution bridge
//!
//! Builds an interpreter invocation for a command string, spawns the
//! interpreter, streams its output, and settles with the single trailing
//! structured result the entry program prints on stdout.

pub mod invocation;
pub mod log;
pub mod process;

pub use invocation::Invocation;
pub use log::CommandLog;
pub use process::ProcessBridge;
