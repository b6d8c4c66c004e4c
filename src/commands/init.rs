use std::fs;

use crate::cli::InitArgs;
use crate::{ComplianceError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::print_error;

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ComplianceError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# compliance-guard configuration file
#
# Every listed file must parse, name functions in snake_case and classes in
# PascalCase, document every function and class, and start with a docstring
# header. Missing files are skipped.

version = "1"

[files]
# Directory relative paths resolve against (default: current directory)
# base_dir = "src"

# Files to validate, in report order
paths = [
    # "package/__init__.py",
    # "package/models.py",
]

[report]
# Write a plain-text report after every check (default: true)
enabled = true

# Report location; parent directories are created as needed
path = "reports/compliance_report.txt"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
