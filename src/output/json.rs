use serde::Serialize;

use crate::checker::{FileResult, SystemReport};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    total_files: usize,
    valid_files: usize,
    invalid_files: usize,
    overall_valid: bool,
    summary: JsonSummary,
    files_results: Vec<JsonFileResult>,
}

#[derive(Serialize)]
struct JsonSummary {
    syntax_errors: usize,
    naming_warnings: usize,
    documentation_warnings: usize,
}

#[derive(Serialize)]
struct JsonFileResult {
    file_path: String,
    syntax_valid: bool,
    naming_valid: bool,
    documentation_valid: bool,
    overall_valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &SystemReport) -> Result<String> {
        let output = JsonOutput {
            total_files: report.total_files,
            valid_files: report.valid_files,
            invalid_files: report.invalid_files,
            overall_valid: report.overall_valid(),
            summary: JsonSummary {
                syntax_errors: report.summary.syntax_errors,
                naming_warnings: report.summary.naming_warnings,
                documentation_warnings: report.summary.documentation_warnings,
            },
            files_results: report.files_results.iter().map(convert_result).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_result(result: &FileResult) -> JsonFileResult {
    JsonFileResult {
        file_path: result.path().display().to_string(),
        syntax_valid: result.syntax_valid(),
        naming_valid: result.naming_valid(),
        documentation_valid: result.documentation_valid(),
        overall_valid: result.overall_valid(),
        errors: result.errors().iter().map(|e| e.message.clone()).collect(),
        warnings: result.warnings().iter().map(|w| w.message.clone()).collect(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
