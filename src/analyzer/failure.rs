use std::fmt;

/// A position in source text (1-indexed line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Line and column (in characters) of a byte offset into `source`.
    /// Offsets past the end clamp to the end; offsets inside a multi-byte
    /// character snap back to its start.
    #[must_use]
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &source[..offset];
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        Self {
            line: before.matches('\n').count() + 1,
            column: before[line_start..].chars().count() + 1,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Why a source text could not be turned into a [`SyntaxTree`](super::SyntaxTree).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    /// The text is not valid Python.
    Syntax {
        message: String,
        location: Option<Location>,
    },

    /// The text could not be processed for another reason (unreadable file,
    /// NUL bytes, ...).
    Processing { message: String },
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax {
                message,
                location: Some(location),
            } => write!(f, "{message} ({location})"),
            Self::Syntax { message, .. } | Self::Processing { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ParseFailure {}

impl ParseFailure {
    #[must_use]
    pub fn syntax(message: impl Into<String>, location: Location) -> Self {
        Self::Syntax {
            message: message.into(),
            location: Some(location),
        }
    }

    #[must_use]
    pub fn processing(message: impl Into<String>) -> Self {
        Self::Processing {
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }

    #[must_use]
    pub const fn location(&self) -> Option<Location> {
        match self {
            Self::Syntax { location, .. } => *location,
            Self::Processing { .. } => None,
        }
    }
}
