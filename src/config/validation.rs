//! Configuration semantic validation.
//!
//! Runs after parsing: checks values TOML cannot express constraints for.

use crate::config::{CONFIG_VERSION, Config};
use crate::{ComplianceError, Result};

/// Validate the config version. An absent version means current.
///
/// # Errors
/// Returns an error if the version is not supported.
pub fn validate_config_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(ComplianceError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a file entry is empty or the report path is empty.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_config_version(config)?;
    validate_files_section(config)?;
    validate_report_section(config)?;
    Ok(())
}

fn validate_files_section(config: &Config) -> Result<()> {
    if let Some(base_dir) = &config.files.base_dir
        && base_dir.as_os_str().is_empty()
    {
        return Err(ComplianceError::Config(
            "files.base_dir must not be empty".to_string(),
        ));
    }

    for (i, path) in config.files.paths.iter().enumerate() {
        if path.as_os_str().is_empty() {
            return Err(ComplianceError::Config(format!(
                "files.paths[{i}] must not be empty"
            )));
        }
    }
    Ok(())
}

fn validate_report_section(config: &Config) -> Result<()> {
    if config.report.path.as_os_str().is_empty() {
        return Err(ComplianceError::Config(
            "report.path must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
