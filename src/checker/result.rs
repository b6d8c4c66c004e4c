use std::path::{Path, PathBuf};

use super::documentation::DocumentationOutcome;
use super::issue::{IssueKind, ValidationIssue};
use super::naming::NamingOutcome;
use super::syntax::SyntaxOutcome;

/// Validation outcome for one file.
///
/// Only the issue lists are stored. Every validity flag is computed from them,
/// so a result can never claim to be valid while carrying errors or warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    path: PathBuf,
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl FileResult {
    /// Merge the three outcomes. Warnings are ordered naming first, then
    /// documentation.
    #[must_use]
    pub fn new(
        path: impl Into<PathBuf>,
        syntax: SyntaxOutcome,
        naming: NamingOutcome,
        documentation: DocumentationOutcome,
    ) -> Self {
        let errors = syntax.into_error().into_iter().collect();
        let mut warnings = naming.into_warnings();
        warnings.extend(documentation.into_warnings());
        Self {
            path: path.into(),
            errors,
            warnings,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationIssue] {
        &self.errors
    }

    #[must_use]
    pub fn warnings(&self) -> &[ValidationIssue] {
        &self.warnings
    }

    #[must_use]
    pub fn syntax_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn naming_valid(&self) -> bool {
        !self.warnings.iter().any(|issue| issue.kind.is_naming())
    }

    #[must_use]
    pub fn documentation_valid(&self) -> bool {
        self.count(IssueKind::DocumentationWarning) == 0
    }

    #[must_use]
    pub fn overall_valid(&self) -> bool {
        self.syntax_valid() && self.naming_valid() && self.documentation_valid()
    }

    /// Number of issues (errors and warnings) of the given kind.
    #[must_use]
    pub fn count(&self, kind: IssueKind) -> usize {
        self.errors
            .iter()
            .chain(&self.warnings)
            .filter(|issue| issue.kind == kind)
            .count()
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
