use super::issue::IssueKind;
use super::result::FileResult;

/// Issue counters across all validated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub syntax_errors: usize,
    pub naming_warnings: usize,
    pub documentation_warnings: usize,
}

/// Aggregated outcome of a validation run.
///
/// `total_files` counts every requested path, including missing ones, which
/// are counted as neither valid nor invalid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SystemReport {
    pub total_files: usize,
    pub valid_files: usize,
    pub invalid_files: usize,
    pub summary: Summary,
    pub files_results: Vec<FileResult>,
}

impl SystemReport {
    #[must_use]
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            ..Self::default()
        }
    }

    /// Fold one file result into the counters and append it. A naming
    /// validator that could not run adds nothing to `naming_warnings`; the
    /// documentation validator's equivalent counts as a documentation warning.
    pub fn record(&mut self, result: FileResult) {
        if result.overall_valid() {
            self.valid_files += 1;
        } else {
            self.invalid_files += 1;
        }

        self.summary.syntax_errors += result.errors().len();
        self.summary.naming_warnings += result.count(IssueKind::NamingWarning);
        self.summary.documentation_warnings += result.count(IssueKind::DocumentationWarning);

        self.files_results.push(result);
    }

    /// True iff no validated file failed. A run where every path was missing
    /// is vacuously valid.
    #[must_use]
    pub const fn overall_valid(&self) -> bool {
        self.invalid_files == 0
    }

    /// Number of requested paths that were not found.
    #[must_use]
    pub fn skipped_files(&self) -> usize {
        self.total_files.saturating_sub(self.files_results.len())
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
