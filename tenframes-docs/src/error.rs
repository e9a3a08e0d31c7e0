//! Error types for markup generation.

use thiserror::Error;

/// Errors raised while building or checking LaTeX markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// `\end{..}` does not match the innermost open environment.
    #[error("line {line}: \\end{{{found}}} closes \\begin{{{expected}}}")]
    MismatchedEnd {
        /// Innermost open environment
        expected: String,
        /// Environment named by the `\end`
        found: String,
        /// One-based line of the offending `\end`
        line: usize,
    },

    /// `\end{..}` with no environment open.
    #[error("line {line}: \\end{{{found}}} without matching \\begin")]
    UnexpectedEnd {
        /// Environment named by the `\end`
        found: String,
        /// One-based line of the offending `\end`
        line: usize,
    },

    /// Markup finished with environments still open.
    #[error("unclosed environment(s): {}", open.join(", "))]
    Unclosed {
        /// Open environments, outermost first
        open: Vec<String>,
    },

    /// A file name that cannot be passed to `\input` verbatim.
    #[error("file name {0:?} is not safe to \\input")]
    UnsafeFileName(String),
}
