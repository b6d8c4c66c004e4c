use std::fmt::Write;

use chrono::{Local, NaiveDateTime};

use crate::checker::{FileResult, SystemReport};
use crate::error::Result;

use super::{OutputFormatter, REPORT_TITLE, rule, validity_label};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Plain-text report persisted next to the build artifacts. No colors, one
/// block per file with a status line for each validator.
pub struct ReportFileFormatter {
    generated_at: NaiveDateTime,
}

impl Default for ReportFileFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFileFormatter {
    /// Formatter stamped with the current local time.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timestamp(Local::now().naive_local())
    }

    #[must_use]
    pub const fn with_timestamp(generated_at: NaiveDateTime) -> Self {
        Self { generated_at }
    }

    fn format_file(result: &FileResult, output: &mut String) {
        let ok_or = |valid: bool, failed: &'static str| if valid { "OK" } else { failed };

        writeln!(output, "File: {}", result.path().display()).ok();
        writeln!(output, "  Syntax: {}", ok_or(result.syntax_valid(), "ERROR")).ok();
        writeln!(output, "  Naming: {}", ok_or(result.naming_valid(), "WARNING")).ok();
        writeln!(
            output,
            "  Documentation: {}",
            ok_or(result.documentation_valid(), "WARNING")
        )
        .ok();
        writeln!(output, "  Status: {}", validity_label(result.overall_valid())).ok();
        for error in result.errors() {
            writeln!(output, "    ERROR: {}", error.message).ok();
        }
        for warning in result.warnings() {
            writeln!(output, "    WARNING: {}", warning.message).ok();
        }
        output.push('\n');
    }
}

impl OutputFormatter for ReportFileFormatter {
    fn format(&self, report: &SystemReport) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "{REPORT_TITLE}").ok();
        writeln!(output, "{}", rule()).ok();
        writeln!(
            output,
            "Generated: {}",
            self.generated_at.format(TIMESTAMP_FORMAT)
        )
        .ok();
        writeln!(output, "Files validated: {}", report.total_files).ok();
        writeln!(output, "Valid files: {}", report.valid_files).ok();
        writeln!(output, "Invalid files: {}", report.invalid_files).ok();
        writeln!(
            output,
            "Overall status: {}",
            validity_label(report.overall_valid())
        )
        .ok();
        writeln!(output, "Syntax errors: {}", report.summary.syntax_errors).ok();
        writeln!(output, "Naming warnings: {}", report.summary.naming_warnings).ok();
        writeln!(
            output,
            "Documentation warnings: {}",
            report.summary.documentation_warnings
        )
        .ok();
        output.push('\n');

        for result in &report.files_results {
            Self::format_file(result, &mut output);
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "report_file_tests.rs"]
mod tests;
