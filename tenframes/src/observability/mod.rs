//! Observability module
//!
//! Structured logging for `tenframes` runs. Logs go to stderr so that
//! stdout carries only the echoed master document.

pub mod logging;

pub use logging::{LogFormat, init_logging};
