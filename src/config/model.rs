use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

pub const DEFAULT_REPORT_PATH: &str = "reports/compliance_report.txt";

/// Top-level configuration (`.compliance-guard.toml`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config format version. Absent means current.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

/// The fixed, ordered file set to validate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct FilesConfig {
    /// Directory relative entries of `paths` resolve against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,

    #[serde(default)]
    pub paths: Vec<PathBuf>,
}

/// Persisted plain-text report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_report_path")]
    pub path: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_report_path(),
        }
    }
}

const fn default_true() -> bool {
    true
}

fn default_report_path() -> PathBuf {
    PathBuf::from(DEFAULT_REPORT_PATH)
}

impl FilesConfig {
    /// The configured paths with `base_dir` applied, in configured order.
    /// Absolute entries are kept as they are.
    #[must_use]
    pub fn resolved_paths(&self) -> Vec<PathBuf> {
        self.paths
            .iter()
            .map(|path| resolve(self.base_dir.as_deref(), path))
            .collect()
    }
}

impl Config {
    #[must_use]
    pub fn resolved_paths(&self) -> Vec<PathBuf> {
        self.files.resolved_paths()
    }
}

fn resolve(base_dir: Option<&Path>, path: &Path) -> PathBuf {
    match base_dir {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
