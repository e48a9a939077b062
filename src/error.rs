use crate::cursor::Cursor;
use crate::position::Position;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

pub(crate) const EXPECTED_PREDICATE: &str = "expected predicate-matched character";
pub(crate) const EXPECTED_END_OF_INPUT: &str = "expected end of input";
pub(crate) const NO_ALTERNATIVE: &str = "no alternative matches";
pub(crate) const AT_LEAST_ONE: &str = "expected at least one occurrence";
pub(crate) const UNEXPECTED_MATCH: &str = "unexpected match";

#[derive(Debug, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub byte_offset: usize,
}

/// A location in the source text, kept alongside the text itself so that
/// diagnostics can point back into it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CodeLoc<'code> {
    code: &'code str,
    /// Byte offset in `code` where the failure happened
    loc: usize,
}

impl<'code> CodeLoc<'code> {
    pub fn new(code: &'code str, loc: usize) -> Self {
        Self { code, loc }
    }

    pub fn position(&self) -> Position {
        Position::new(self.loc)
    }

    pub fn code(&self) -> &'code str {
        self.code
    }

    /// Line number (1-based) and byte offset within that line.
    ///
    /// Columns are deliberately not computed: tab width and wide characters
    /// make them ambiguous, while the offset within the line is not.
    pub fn readable_position(&self) -> ReadablePosition {
        let mut line = 1;
        let mut line_start = 0;

        for (i, ch) in self.code.char_indices() {
            if i >= self.loc {
                break;
            }
            if ch == '\n' {
                line += 1;
                line_start = i + 1;
            }
        }

        ReadablePosition {
            line,
            byte_offset: self.loc.saturating_sub(line_start),
        }
    }

    /// Up to two lines of context on each side of the failing line, with a
    /// pointer under the failure.
    pub fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        // `split('\n')` yields a trailing empty line after a final newline,
        // which is exactly where an end-of-input failure points.
        for (index, content) in self.code.split('\n').enumerate() {
            let number = index + 1;
            if number < first || number > last {
                continue;
            }
            let prefix = if number == pos.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, content));

            if number == pos.line {
                let pointer_offset = prefix.len() + pos.byte_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

impl fmt::Display for CodeLoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.readable_position();
        write!(
            f,
            "line {}, byte offset {} (position {})",
            pos.line, pos.byte_offset, self.loc
        )
    }
}

/// A grammar mismatch.
///
/// This is an ordinary outcome of parsing, returned as a value and recovered
/// from by backtracking combinators. It carries a short message and the
/// location at which the failing parser was invoked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at {loc}")]
pub struct ParseError<'code> {
    message: Cow<'static, str>,
    loc: CodeLoc<'code>,
}

impl<'code> ParseError<'code> {
    /// Failure at the current position of `cursor`
    pub fn new(message: impl Into<Cow<'static, str>>, cursor: Cursor<'code>) -> Self {
        let (code, offset) = cursor.inner();
        Self {
            message: message.into(),
            loc: CodeLoc::new(code, offset),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn position(&self) -> Position {
        self.loc.position()
    }

    pub fn loc(&self) -> CodeLoc<'code> {
        self.loc
    }

    /// Multi-line rendering of the failure with surrounding source lines
    pub fn context(&self) -> String {
        let mut rendered = format!("{}\n\n", self);
        for line in self.loc.context_lines() {
            rendered.push_str(&line);
            rendered.push('\n');
        }
        rendered
    }
}

/// Programmer errors in grammar construction or cursor setup.
///
/// These never come out of a parse as a [`ParseError`]. Invoking a rule that
/// was never defined is reported by panicking with
/// [`UsageError::UndefinedRule`]'s message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("rule `{rule}` was invoked before it was defined")]
    UndefinedRule { rule: String },
    #[error("rule `{rule}` is already defined")]
    AlreadyDefined { rule: String },
    #[error("offset {offset} is not a character boundary of the {len}-byte input")]
    InvalidOffset { offset: usize, len: usize },
}
