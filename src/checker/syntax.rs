use crate::analyzer::{Location, ParseFailure, PythonParser, SourceParser};

use super::issue::{IssueKind, ValidationIssue};

pub const SYNTAX_VALID_MESSAGE: &str = "Syntax is valid";

/// Result of the syntax check: validity plus a one-line message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxOutcome {
    valid: bool,
    message: String,
    location: Option<Location>,
}

impl SyntaxOutcome {
    #[must_use]
    pub fn passed() -> Self {
        Self {
            valid: true,
            message: SYNTAX_VALID_MESSAGE.to_string(),
            location: None,
        }
    }

    #[must_use]
    pub fn failed(failure: &ParseFailure) -> Self {
        let message = match failure {
            ParseFailure::Syntax { .. } => format!("Syntax error: {failure}"),
            ParseFailure::Processing { .. } => format!("Failed to process file: {failure}"),
        };
        Self {
            valid: false,
            message,
            location: failure.location(),
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The outcome as an error entry, or `None` when the syntax is valid.
    #[must_use]
    pub fn into_error(self) -> Option<ValidationIssue> {
        (!self.valid).then(|| {
            ValidationIssue::new(IssueKind::SyntaxError, self.message).with_location(self.location)
        })
    }
}

/// Checks that a source text parses.
#[derive(Debug, Default, Clone)]
pub struct SyntaxValidator<P: SourceParser = PythonParser> {
    parser: P,
}

impl SyntaxValidator<PythonParser> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            parser: PythonParser::new(),
        }
    }
}

impl<P: SourceParser> SyntaxValidator<P> {
    #[must_use]
    pub const fn with_parser(parser: P) -> Self {
        Self { parser }
    }

    #[must_use]
    pub fn check(&self, source: &str) -> SyntaxOutcome {
        match self.parser.parse(source) {
            Ok(_) => SyntaxOutcome::passed(),
            Err(failure) => SyntaxOutcome::failed(&failure),
        }
    }
}

#[cfg(test)]
#[path = "syntax_tests.rs"]
mod tests;
