use std::path::PathBuf;

use super::*;

fn io_error(kind: std::io::ErrorKind) -> std::io::Error {
    std::io::Error::new(kind, "boom")
}

#[test]
fn error_display_config() {
    let err = ComplianceError::Config("empty path".to_string());
    assert_eq!(err.to_string(), "Configuration error: empty path");
}

#[test]
fn error_display_file_read() {
    let err = ComplianceError::FileRead {
        path: PathBuf::from("settings.toml"),
        source: io_error(std::io::ErrorKind::NotFound),
    };
    assert_eq!(err.to_string(), "Failed to read file: settings.toml");
}

#[test]
fn error_display_report_write() {
    let err = ComplianceError::ReportWrite {
        path: PathBuf::from("reports/out.txt"),
        source: io_error(std::io::ErrorKind::PermissionDenied),
    };
    assert_eq!(err.to_string(), "Failed to write report: reports/out.txt");
}

#[test]
fn source_is_preserved() {
    use std::error::Error;

    let err = ComplianceError::ReportWrite {
        path: PathBuf::from("r.txt"),
        source: io_error(std::io::ErrorKind::Other),
    };
    assert_eq!(err.source().unwrap().to_string(), "boom");
}

#[test]
fn toml_errors_convert() {
    let parse_err = toml::from_str::<toml::Value>("x = ").unwrap_err();
    let err: ComplianceError = parse_err.into();
    assert!(err.to_string().starts_with("TOML parse error: "));
    assert_eq!(err.error_type(), "Config");
}

#[test]
fn error_types() {
    assert_eq!(ComplianceError::Config("x".into()).error_type(), "Config");
    assert_eq!(
        ComplianceError::Io(std::io::Error::other("x")).error_type(),
        "IO"
    );
    assert_eq!(
        ComplianceError::FileRead {
            path: PathBuf::from("a"),
            source: std::io::Error::other("x"),
        }
        .error_type(),
        "FileRead"
    );
}

#[test]
fn suggestions_depend_on_io_kind() {
    let missing = ComplianceError::FileRead {
        path: PathBuf::from("a"),
        source: io_error(std::io::ErrorKind::NotFound),
    };
    assert_eq!(missing.suggestion(), Some("Check that the path exists"));

    let denied = ComplianceError::ReportWrite {
        path: PathBuf::from("a"),
        source: io_error(std::io::ErrorKind::PermissionDenied),
    };
    assert_eq!(denied.suggestion(), Some("Check the permissions of the path"));

    assert_eq!(ComplianceError::Config("x".into()).suggestion(), None);
}
