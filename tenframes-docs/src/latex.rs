//! Typed LaTeX builders.
//!
//! [`Command`] and [`Environment`] render single control sequences;
//! [`LatexWriter`] accumulates lines and tracks open environments so a
//! document cannot be finished with a mismatched or missing `\end`.

use std::fmt;

use crate::error::MarkupError;

/// A LaTeX control sequence with optional star, options and arguments.
///
/// Arguments are emitted verbatim; escape user text before passing it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    name: String,
    starred: bool,
    options: Vec<String>,
    args: Vec<String>,
}

impl Command {
    /// Starts a command named `name` (without the backslash).
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            starred: false,
            options: Vec::new(),
            args: Vec::new(),
        }
    }

    /// Uses the starred form, e.g. `\section*`.
    #[must_use]
    pub fn starred(mut self) -> Self {
        self.starred = true;
        self
    }

    /// Adds a bracketed option.
    #[must_use]
    pub fn option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }

    /// Adds a braced argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\\{}", self.name)?;
        if self.starred {
            f.write_str("*")?;
        }
        if !self.options.is_empty() {
            write!(f, "[{}]", self.options.join(","))?;
        }
        for arg in &self.args {
            write!(f, "{{{arg}}}")?;
        }
        Ok(())
    }
}

/// A `\begin{..}` header: environment name plus options and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    name: String,
    options: Vec<String>,
    args: Vec<String>,
}

impl Environment {
    /// Starts an environment header.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
            args: Vec::new(),
        }
    }

    /// Adds a bracketed option.
    #[must_use]
    pub fn option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }

    /// Adds a braced argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Environment name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\\begin{{{}}}", self.name)?;
        if !self.options.is_empty() {
            write!(f, "[{}]", self.options.join(","))?;
        }
        for arg in &self.args {
            write!(f, "{{{arg}}}")?;
        }
        Ok(())
    }
}

/// How the line carrying an `\end{..}` is terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndStyle {
    /// Plain newline.
    Line,
    /// Trailing `%`, which swallows the newline so the next box sits on the
    /// same line.
    Joined,
    /// Newline followed by a blank line (paragraph break).
    Paragraph,
}

/// Line-oriented LaTeX builder that enforces environment nesting.
#[derive(Debug, Default)]
pub struct LatexWriter {
    out: String,
    open: Vec<String>,
    lines: usize,
}

impl LatexWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a raw line.
    pub fn line(&mut self, text: impl AsRef<str>) {
        self.out.push_str(text.as_ref());
        self.out.push('\n');
        self.lines += 1;
    }

    /// Appends an empty line.
    pub fn blank(&mut self) {
        self.line("");
    }

    /// Appends a command on its own line.
    pub fn command(&mut self, command: &Command) {
        self.line(command.to_string());
    }

    /// Appends a `% ` comment, flattened to a single line.
    pub fn comment(&mut self, text: &str) {
        self.line(format!("% {}", crate::escape::comment_text(text)));
    }

    /// Opens an environment.
    pub fn begin(&mut self, env: &Environment) {
        self.line(env.to_string());
        self.open.push(env.name.clone());
    }

    /// Closes the innermost environment, which must be `name`.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::UnexpectedEnd`] if nothing is open and
    /// [`MarkupError::MismatchedEnd`] if a different environment is
    /// innermost. The writer is left unchanged on error.
    pub fn end(&mut self, name: &str, style: EndStyle) -> Result<(), MarkupError> {
        let line = self.lines + 1;
        match self.open.last() {
            None => {
                return Err(MarkupError::UnexpectedEnd {
                    found: name.to_string(),
                    line,
                });
            }
            Some(innermost) if innermost != name => {
                return Err(MarkupError::MismatchedEnd {
                    expected: innermost.clone(),
                    found: name.to_string(),
                    line,
                });
            }
            Some(_) => {}
        }
        self.open.pop();

        match style {
            EndStyle::Line => self.line(format!("\\end{{{name}}}")),
            EndStyle::Joined => self.line(format!("\\end{{{name}}}%")),
            EndStyle::Paragraph => {
                self.line(format!("\\end{{{name}}}"));
                self.blank();
            }
        }
        Ok(())
    }

    /// Returns the accumulated markup.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::Unclosed`] if any environment is still open.
    pub fn finish(self) -> Result<String, MarkupError> {
        if self.open.is_empty() {
            Ok(self.out)
        } else {
            Err(MarkupError::Unclosed { open: self.open })
        }
    }
}
