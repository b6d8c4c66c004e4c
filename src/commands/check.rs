use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::checker::{SystemReport, SystemValidator};
use crate::cli::{CheckArgs, Cli, ColorChoice};
use crate::config::Config;
use crate::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, ReportFileFormatter, TextFormatter,
};
use crate::{ComplianceError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VALIDATION_FAILED, Result};

use super::config::load_config;
use super::print_error;

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs a full validation pass and writes its outputs.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or an output cannot
/// be written.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let paths = resolve_paths(args, &config);
    if paths.is_empty() {
        warn!("No files to validate: pass paths or set files.paths in the configuration");
    }

    let report = SystemValidator::new().validate_all(&paths);

    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, &report, color_mode, cli.verbose)?;
    write_output(args.output.as_deref(), &output)?;

    if let Some(report_path) = report_destination(args, &config) {
        let content = ReportFileFormatter::new().format(&report)?;
        write_report(&report_path, &content)?;
        if !cli.quiet {
            eprintln!("Report saved to: {}", report_path.display());
        }
    }

    Ok(determine_exit_code(&report))
}

/// CLI paths replace the configured list; `--base-dir` replaces the configured
/// base directory.
pub(crate) fn resolve_paths(args: &CheckArgs, config: &Config) -> Vec<PathBuf> {
    let mut files = config.files.clone();
    if !args.paths.is_empty() {
        files.paths.clone_from(&args.paths);
    }
    if let Some(base_dir) = &args.base_dir {
        files.base_dir = Some(base_dir.clone());
    }
    files.resolved_paths()
}

/// Where the plain-text report goes, if anywhere.
pub(crate) fn report_destination(args: &CheckArgs, config: &Config) -> Option<PathBuf> {
    if args.no_report {
        return None;
    }
    if let Some(path) = &args.report {
        return Some(path.clone());
    }
    config.report.enabled.then(|| config.report.path.clone())
}

pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

pub(crate) fn format_output(
    format: OutputFormat,
    report: &SystemReport,
    color_mode: ColorMode,
    verbose: u8,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

pub(crate) fn write_output(output_path: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content).map_err(|source| ComplianceError::ReportWrite {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Wrote output");
    } else {
        print!("{content}");
    }
    Ok(())
}

/// Write the persisted report, creating missing parent directories.
///
/// # Errors
/// Returns an error if a directory cannot be created or the file cannot be
/// written.
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    let to_error = |source| ComplianceError::ReportWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, content).map_err(to_error)?;
    debug!(path = %path.display(), "Wrote report");
    Ok(())
}

pub(crate) const fn determine_exit_code(report: &SystemReport) -> i32 {
    if report.overall_valid() {
        EXIT_SUCCESS
    } else {
        EXIT_VALIDATION_FAILED
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
