use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComplianceError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {path}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl ComplianceError {
    /// Short category name, used as a prefix in diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::ReportWrite { .. } => "ReportWrite",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialization",
        }
    }

    /// An actionable hint for the user, when one applies.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::FileRead { source, .. } | Self::ReportWrite { source, .. } => {
                match source.kind() {
                    std::io::ErrorKind::NotFound => Some("Check that the path exists"),
                    std::io::ErrorKind::PermissionDenied => {
                        Some("Check the permissions of the path")
                    }
                    _ => None,
                }
            }
            Self::TomlParse(_) => Some("Run `compliance-guard config validate` for details"),
            Self::Config(_) | Self::Io(_) | Self::JsonSerialize(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ComplianceError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
