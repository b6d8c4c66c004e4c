pub mod check;
pub mod config;
pub mod init;

pub use check::{run_check, run_check_impl, write_report};
pub use config::{
    format_config_text, run_config, run_config_show_impl, run_config_validate_impl,
};
pub use init::{generate_config_template, run_init, run_init_impl};

use crate::ComplianceError;

/// Print an error (and a hint, when there is one) to stderr.
pub(crate) fn print_error(error: &ComplianceError) {
    eprintln!("Error: {error}");
    if let Some(hint) = error.suggestion() {
        eprintln!("  Hint: {hint}");
    }
}
