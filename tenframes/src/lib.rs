//! `tenframes` - printable ten-frame worksheet generator
//!
//! Plans random worksheet pages, writes one TikZ diagram per frame and a
//! master LaTeX document into a scoped temporary directory, then hands the
//! master to an external renderer (`pdflatex` by default).

pub mod assembler;
pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod render;
