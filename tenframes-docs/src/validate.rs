//! Structural validation of generated markup.
//!
//! Re-scans finished LaTeX for `\begin{..}` / `\end{..}` pairs so that
//! markup produced outside [`LatexWriter`](crate::latex::LatexWriter), or
//! edited by hand, can be checked the same way.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::MarkupError;

static ENVIRONMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\(begin|end)\{([^}]+)\}").expect("valid regex"));

/// Number of complete environments found, by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NestingReport {
    counts: BTreeMap<String, usize>,
}

impl NestingReport {
    /// How many times environment `name` was opened and closed.
    #[must_use]
    pub fn count(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Total closed environments of any kind.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Checks that every environment in `markup` is closed in LIFO order.
///
/// Text after an unescaped `%` on a line is treated as a comment and
/// ignored.
///
/// # Errors
///
/// Returns the first [`MarkupError`] encountered.
pub fn check_nesting(markup: &str) -> Result<NestingReport, MarkupError> {
    let mut open: Vec<&str> = Vec::new();
    let mut report = NestingReport::default();

    for (index, raw) in markup.lines().enumerate() {
        let line = strip_comment(raw);
        for caps in ENVIRONMENT.captures_iter(line) {
            let name = caps.get(2).map_or("", |m| m.as_str());
            if &caps[1] == "begin" {
                open.push(name);
                continue;
            }
            match open.pop() {
                Some(innermost) if innermost == name => {
                    *report.counts.entry(name.to_string()).or_default() += 1;
                }
                Some(innermost) => {
                    return Err(MarkupError::MismatchedEnd {
                        expected: innermost.to_string(),
                        found: name.to_string(),
                        line: index + 1,
                    });
                }
                None => {
                    return Err(MarkupError::UnexpectedEnd {
                        found: name.to_string(),
                        line: index + 1,
                    });
                }
            }
        }
    }

    if open.is_empty() {
        Ok(report)
    } else {
        Err(MarkupError::Unclosed {
            open: open.into_iter().map(str::to_string).collect(),
        })
    }
}

/// Drops everything from the first unescaped `%`.
fn strip_comment(line: &str) -> &str {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        match c {
            '\\' => escaped = !escaped,
            '%' if !escaped => return &line[..i],
            _ => escaped = false,
        }
    }
    line
}
