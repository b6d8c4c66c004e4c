mod json;
mod report_file;
mod text;

pub use json::JsonFormatter;
pub use report_file::{ReportFileFormatter, TIMESTAMP_FORMAT};
pub use text::{ColorMode, TextFormatter};

use crate::checker::SystemReport;
use crate::error::Result;

/// Width of the `=` rules framing the text and report-file layouts.
pub(crate) const RULE_WIDTH: usize = 60;

pub(crate) const REPORT_TITLE: &str = "COMPLIANCE VALIDATION REPORT";

/// Trait for rendering a validation report.
pub trait OutputFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &SystemReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

pub(crate) fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub(crate) const fn validity_label(valid: bool) -> &'static str {
    if valid { "VALID" } else { "INVALID" }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
