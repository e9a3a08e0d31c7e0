//! `tenframes` Core - worksheet model and configuration schema
//!
//! This crate provides the ten-frame model (counts, frames, pages, whole
//! worksheets), the random page planner, and the configuration types shared
//! across `tenframes` (CLI) and `tenframes-docs` (markup generation).

pub mod config;
pub mod error;
pub mod model;
