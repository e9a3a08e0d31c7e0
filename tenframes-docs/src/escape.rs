//! LaTeX text escaping.
//!
//! User-supplied text (the page heading) must not be able to inject
//! commands or unbalance braces, and comment text must stay on one line.

/// Escape LaTeX special characters in running text.
///
/// Backslash, tilde and caret become text commands; the other reserved
/// characters (`{ } $ & # _ %`) are prefixed with a backslash. Control
/// characters become spaces, since a blank line ends a command argument.
#[must_use]
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '{' | '}' | '$' | '&' | '#' | '_' | '%' => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

/// Collapse text onto a single line so it can follow a `%`.
#[must_use]
pub fn comment_text(text: &str) -> String {
    text.split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether `name` can be handed to `\input` unquoted.
///
/// Allows ASCII letters, digits, `.`, `-` and `_`; rejects empty names and
/// anything with path separators or spaces.
#[must_use]
pub fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
}
