//! Core infrastructure: errors and configuration

pub mod config;
pub mod error;
