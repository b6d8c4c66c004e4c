use crate::analyzer::{Declaration, ParseFailure, PythonParser, SourceParser};

use super::issue::{IssueKind, ValidationIssue};

pub const MISSING_HEADER_MESSAGE: &str = "File has no documentation header";

/// Result of the documentation check. Valid iff there are no warnings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentationOutcome {
    warnings: Vec<ValidationIssue>,
}

impl DocumentationOutcome {
    #[must_use]
    pub fn failed(failure: &ParseFailure) -> Self {
        let issue = ValidationIssue::new(
            IssueKind::DocumentationWarning,
            format!("Failed to validate documentation: {failure}"),
        )
        .with_location(failure.location());
        Self {
            warnings: vec![issue],
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.warnings.is_empty()
    }

    #[must_use]
    pub fn warnings(&self) -> &[ValidationIssue] {
        &self.warnings
    }

    #[must_use]
    pub fn into_warnings(self) -> Vec<ValidationIssue> {
        self.warnings
    }
}

/// Requires a docstring on every function and class, and a docstring header at
/// the very start of the file.
#[derive(Debug, Default, Clone)]
pub struct DocumentationValidator<P: SourceParser = PythonParser> {
    parser: P,
}

impl DocumentationValidator<PythonParser> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            parser: PythonParser::new(),
        }
    }
}

impl<P: SourceParser> DocumentationValidator<P> {
    #[must_use]
    pub const fn with_parser(parser: P) -> Self {
        Self { parser }
    }

    #[must_use]
    pub fn check(&self, source: &str) -> DocumentationOutcome {
        let tree = match self.parser.parse(source) {
            Ok(tree) => tree,
            Err(failure) => return DocumentationOutcome::failed(&failure),
        };

        let mut warnings: Vec<ValidationIssue> = tree
            .declarations()
            .iter()
            .filter_map(missing_docstring)
            .collect();

        if !has_header(source) {
            warnings.push(ValidationIssue::new(
                IssueKind::DocumentationWarning,
                MISSING_HEADER_MESSAGE,
            ));
        }

        DocumentationOutcome { warnings }
    }
}

fn missing_docstring(declaration: &Declaration) -> Option<ValidationIssue> {
    if declaration.docstring.is_some() {
        return None;
    }
    let label = if declaration.is_function() {
        "Function"
    } else {
        "Class"
    };
    Some(
        ValidationIssue::new(
            IssueKind::DocumentationWarning,
            format!("{label} '{}' has no docstring", declaration.name),
        )
        .with_location(Some(declaration.location)),
    )
}

/// The header check looks at the raw text only: a leading comment, blank line
/// or encoding line means no header.
#[must_use]
pub fn has_header(source: &str) -> bool {
    source.starts_with("\"\"\"") || source.starts_with("'''")
}

#[cfg(test)]
#[path = "documentation_tests.rs"]
mod tests;
