//! Command-line interface
//!
//! Argument definitions and per-command handlers.

pub mod args;
pub mod commands;
