//! `tenframes` Docs - LaTeX markup generation for ten-frame worksheets
//!
//! Generates the per-frame TikZ diagrams and the master LaTeX document
//! that lays them out two per row, ten per page.

pub mod error;
pub mod escape;
pub mod frame;
pub mod latex;
pub mod tikz;
pub mod validate;
pub mod worksheet;
