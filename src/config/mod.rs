mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{CONFIG_VERSION, Config, DEFAULT_REPORT_PATH, FilesConfig, ReportConfig};
pub use validation::{validate_config_semantics, validate_config_version};
