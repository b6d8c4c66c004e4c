use std::path::PathBuf;

use crate::analyzer::{ParseFailure, PythonParser, SourceParser};

use super::documentation::{DocumentationOutcome, DocumentationValidator};
use super::naming::{NamingOutcome, NamingValidator};
use super::result::FileResult;
use super::syntax::{SyntaxOutcome, SyntaxValidator};

/// Runs the syntax, naming and documentation validators on one file.
///
/// The validators are independent: a syntax failure does not stop the other
/// two, each of which reports the same failure as its own warning.
#[derive(Debug, Default, Clone)]
pub struct FileValidator<P: SourceParser + Clone = PythonParser> {
    syntax: SyntaxValidator<P>,
    naming: NamingValidator<P>,
    documentation: DocumentationValidator<P>,
}

impl FileValidator<PythonParser> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            syntax: SyntaxValidator::new(),
            naming: NamingValidator::new(),
            documentation: DocumentationValidator::new(),
        }
    }
}

impl<P: SourceParser + Clone> FileValidator<P> {
    #[must_use]
    pub fn with_parser(parser: P) -> Self {
        Self {
            syntax: SyntaxValidator::with_parser(parser.clone()),
            naming: NamingValidator::with_parser(parser.clone()),
            documentation: DocumentationValidator::with_parser(parser),
        }
    }

    #[must_use]
    pub fn validate_file(&self, path: impl Into<PathBuf>, source: &str) -> FileResult {
        FileResult::new(
            path,
            self.syntax.check(source),
            self.naming.check(source),
            self.documentation.check(source),
        )
    }

    /// Result for a file that exists but whose content could not be obtained.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn validate_unreadable(
        &self,
        path: impl Into<PathBuf>,
        failure: &ParseFailure,
    ) -> FileResult {
        FileResult::new(
            path,
            SyntaxOutcome::failed(failure),
            NamingOutcome::failed(failure),
            DocumentationOutcome::failed(failure),
        )
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
