use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::analyzer::{ParseFailure, PythonParser, SourceParser};
use crate::filesystem::{FileSystem, RealFileSystem};

use super::file::FileValidator;
use super::report::SystemReport;
use super::result::FileResult;

/// Validates an ordered list of files and folds the results into a
/// [`SystemReport`].
#[derive(Debug, Default)]
pub struct SystemValidator<
    F: FileSystem = RealFileSystem,
    P: SourceParser + Clone = PythonParser,
> {
    fs: F,
    files: FileValidator<P>,
}

impl SystemValidator<RealFileSystem, PythonParser> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fs: RealFileSystem,
            files: FileValidator::new(),
        }
    }
}

impl<F: FileSystem> SystemValidator<F, PythonParser> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self {
            fs,
            files: FileValidator::new(),
        }
    }
}

impl<F: FileSystem, P: SourceParser + Clone> SystemValidator<F, P> {
    #[must_use]
    pub const fn with_validator(fs: F, files: FileValidator<P>) -> Self {
        Self { fs, files }
    }

    /// Validate every path in order. Missing paths are skipped but still
    /// counted in `total_files`.
    #[must_use]
    pub fn validate_all(&self, paths: &[PathBuf]) -> SystemReport {
        let mut report = SystemReport::new(paths.len());

        for path in paths {
            if !self.fs.exists(path) {
                debug!(path = %path.display(), "Skipping missing file");
                continue;
            }
            report.record(self.validate_path(path));
        }

        info!(
            total = report.total_files,
            valid = report.valid_files,
            invalid = report.invalid_files,
            skipped = report.skipped_files(),
            "Validation finished"
        );
        report
    }

    fn validate_path(&self, path: &Path) -> FileResult {
        match self.fs.read_to_string(path) {
            Ok(source) => {
                let result = self.files.validate_file(path, &source);
                debug!(
                    path = %path.display(),
                    valid = result.overall_valid(),
                    errors = result.errors().len(),
                    warnings = result.warnings().len(),
                    "Validated file"
                );
                result
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read file");
                let failure = ParseFailure::processing(e.to_string());
                self.files.validate_unreadable(path, &failure)
            }
        }
    }
}

#[cfg(test)]
#[path = "system_tests.rs"]
mod tests;
