//! Voxbridge - free-text command dispatch with a Python execution bridge
//!
//! Commands like `"youtube play despacito"` are routed either to an
//! in-process handler (the [`command`] pipeline) or to an external
//! interpreter subprocess (the [`bridge`]); both paths produce the same
//! [`command::CommandResult`] schema.

pub mod api;
pub mod bridge;
pub mod command;
pub mod core;
