use crate::analyzer::{Declaration, ParseFailure, PythonParser, SourceParser};

use super::issue::{IssueKind, ValidationIssue};

/// Result of the naming check. Valid iff there are no warnings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NamingOutcome {
    warnings: Vec<ValidationIssue>,
}

impl NamingOutcome {
    #[must_use]
    pub fn failed(failure: &ParseFailure) -> Self {
        let issue = ValidationIssue::new(
            IssueKind::NamingFailure,
            format!("Failed to validate naming: {failure}"),
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

/// Applies the fixed naming rules: `snake_case` functions and `PascalCase`
/// classes.
#[derive(Debug, Default, Clone)]
pub struct NamingValidator<P: SourceParser = PythonParser> {
    parser: P,
}

impl NamingValidator<PythonParser> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            parser: PythonParser::new(),
        }
    }
}

impl<P: SourceParser> NamingValidator<P> {
    #[must_use]
    pub const fn with_parser(parser: P) -> Self {
        Self { parser }
    }

    #[must_use]
    pub fn check(&self, source: &str) -> NamingOutcome {
        let tree = match self.parser.parse(source) {
            Ok(tree) => tree,
            Err(failure) => return NamingOutcome::failed(&failure),
        };

        let warnings = tree
            .declarations()
            .iter()
            .filter_map(naming_violation)
            .collect();
        NamingOutcome { warnings }
    }
}

fn naming_violation(declaration: &Declaration) -> Option<ValidationIssue> {
    let message = if declaration.is_function() {
        (!is_snake_case(&declaration.name)).then(|| {
            format!(
                "Function '{}' does not follow snake_case",
                declaration.name
            )
        })
    } else {
        (!is_pascal_case(&declaration.name))
            .then(|| format!("Class '{}' does not follow PascalCase", declaration.name))
    }?;
    Some(
        ValidationIssue::new(IssueKind::NamingWarning, message)
            .with_location(Some(declaration.location)),
    )
}

/// Function names must be lower-case without double underscores. Names with a
/// leading underscore (private helpers, dunder methods) are always accepted.
#[must_use]
pub fn is_snake_case(name: &str) -> bool {
    name.starts_with('_') || (is_lower(name) && !name.contains("__"))
}

/// Class names must start with an upper-case character.
#[must_use]
pub fn is_pascal_case(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// At least one cased character and no upper-case ones. Digits and
/// underscores are uncased.
fn is_lower(name: &str) -> bool {
    let mut cased = false;
    for c in name.chars() {
        if c.is_uppercase() {
            return false;
        }
        if c.is_lowercase() {
            cased = true;
        }
    }
    cased
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
