use std::path::PathBuf;

use super::*;
use crate::checker::IssueKind;
use crate::filesystem::mock::MockFileSystem;

const CLEAN: &str = "\"\"\"Module.\"\"\"\n\ndef run():\n    \"\"\"Run.\"\"\"\n";

fn paths(items: &[&str]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}

#[test]
fn all_missing_files_pass_vacuously() {
    let validator = SystemValidator::with_fs(MockFileSystem::new());
    let report = validator.validate_all(&paths(&["/p/a.py", "/p/b.py", "/p/c.py"]));

    assert_eq!(report.total_files, 3);
    assert_eq!(report.valid_files, 0);
    assert_eq!(report.invalid_files, 0);
    assert!(report.files_results.is_empty());
    assert!(report.overall_valid());
}

#[test]
fn empty_file_list() {
    let validator = SystemValidator::with_fs(MockFileSystem::new());
    let report = validator.validate_all(&[]);
    assert_eq!(report.total_files, 0);
    assert!(report.overall_valid());
}

#[test]
fn results_preserve_input_order_and_skip_missing() {
    let fs = MockFileSystem::new()
        .with_file("/p/z.py", CLEAN)
        .with_file("/p/a.py", "def foo():\n    pass\n");
    let validator = SystemValidator::with_fs(fs);
    let report = validator.validate_all(&paths(&["/p/z.py", "/p/missing.py", "/p/a.py"]));

    assert_eq!(report.total_files, 3);
    let order: Vec<_> = report
        .files_results
        .iter()
        .map(|r| r.path().to_path_buf())
        .collect();
    assert_eq!(order, paths(&["/p/z.py", "/p/a.py"]));
    assert_eq!(report.valid_files, 1);
    assert_eq!(report.invalid_files, 1);
    assert!(!report.overall_valid());
}

#[test]
fn summary_counts_by_issue_kind() {
    let fs = MockFileSystem::new()
        .with_file("/p/bad_names.py", "\"\"\"Doc.\"\"\"\nclass lower:\n    \"\"\"d\"\"\"\n    def Upper(self):\n        \"\"\"d\"\"\"\n")
        .with_file("/p/broken.py", "def foo(:\n");
    let validator = SystemValidator::with_fs(fs);
    let report = validator.validate_all(&paths(&["/p/bad_names.py", "/p/broken.py"]));

    assert_eq!(report.summary.syntax_errors, 1);
    assert_eq!(report.summary.naming_warnings, 2);
    assert_eq!(report.summary.documentation_warnings, 1);
    assert_eq!(report.invalid_files, 2);
}

#[test]
fn unreadable_file_is_invalid_not_skipped() {
    let fs = MockFileSystem::new().with_unreadable("/p/latin1.py");
    let validator = SystemValidator::with_fs(fs);
    let report = validator.validate_all(&paths(&["/p/latin1.py"]));

    assert_eq!(report.invalid_files, 1);
    let result = &report.files_results[0];
    assert_eq!(result.count(IssueKind::SyntaxError), 1);
    assert!(
        result.errors()[0]
            .message
            .starts_with("Failed to process file: ")
    );
}

#[test]
fn duplicate_paths_are_validated_twice() {
    let fs = MockFileSystem::new().with_file("/p/a.py", CLEAN);
    let validator = SystemValidator::with_fs(fs);
    let report = validator.validate_all(&paths(&["/p/a.py", "/p/a.py"]));
    assert_eq!(report.valid_files, 2);
    assert_eq!(report.files_results.len(), 2);
}
