use std::fmt::Write;

use crate::checker::{FileResult, SystemReport};
use crate::error::Result;

use super::{OutputFormatter, REPORT_TITLE, rule, validity_label};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Human-readable console report.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    /// With `verbose > 0` every issue that has a source location gets it
    /// appended.
    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn status(&self, valid: bool) -> String {
        if valid {
            self.paint("✓", ansi::GREEN)
        } else {
            self.paint("✗", ansi::RED)
        }
    }

    fn format_file(&self, result: &FileResult, output: &mut String) {
        writeln!(
            output,
            "  {} {}",
            self.status(result.overall_valid()),
            result.path().display()
        )
        .ok();

        let tagged = result
            .errors()
            .iter()
            .map(|issue| (self.paint("ERROR", ansi::RED), issue))
            .chain(
                result
                    .warnings()
                    .iter()
                    .map(|issue| (self.paint("WARNING", ansi::YELLOW), issue)),
            );

        for (label, issue) in tagged {
            write!(output, "    {label}: {}", issue.message).ok();
            if self.verbose > 0
                && let Some(location) = issue.location
                && !issue.message.contains(&location.to_string())
            {
                write!(output, " [{location}]").ok();
            }
            output.push('\n');
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &SystemReport) -> Result<String> {
        let mut output = String::new();
        let rule = rule();

        writeln!(output, "{rule}").ok();
        writeln!(output, "{}", self.paint(REPORT_TITLE, ansi::BOLD)).ok();
        writeln!(output, "{rule}").ok();
        writeln!(output, "Files validated: {}", report.total_files).ok();
        writeln!(output, "Valid files: {}", report.valid_files).ok();
        writeln!(output, "Invalid files: {}", report.invalid_files).ok();
        let skipped = report.skipped_files();
        if skipped > 0 {
            writeln!(output, "Missing files (skipped): {skipped}").ok();
        }
        let valid = report.overall_valid();
        writeln!(
            output,
            "Overall status: {} {}",
            self.status(valid),
            validity_label(valid)
        )
        .ok();
        output.push('\n');

        writeln!(output, "PROBLEM SUMMARY:").ok();
        writeln!(output, "  Syntax errors: {}", report.summary.syntax_errors).ok();
        writeln!(output, "  Naming warnings: {}", report.summary.naming_warnings).ok();
        writeln!(
            output,
            "  Documentation warnings: {}",
            report.summary.documentation_warnings
        )
        .ok();
        output.push('\n');

        writeln!(output, "FILE DETAILS:").ok();
        for result in &report.files_results {
            self.format_file(result, &mut output);
        }
        writeln!(output, "{rule}").ok();

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
