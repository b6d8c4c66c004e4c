#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the compliance-guard binary.
#[macro_export]
macro_rules! compliance_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("compliance-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Reads a file relative to the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// Creates a `.compliance-guard.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".compliance-guard.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Module that passes every check.
pub const COMPLIANT_MODULE: &str = r#""""Inventory models."""


class Item:
    """A stocked item."""

    def total_price(self, quantity):
        """Price for the given quantity."""
        return self.price * quantity


def load_items(path):
    """Load items from disk."""
    return []
"#;

/// Parses and is well named, but has no docstrings or header.
pub const UNDOCUMENTED_MODULE: &str = "def foo():\n    pass\n";

/// Documented, but with a badly named class and method.
pub const BADLY_NAMED_MODULE: &str = "\"\"\"Module doc.\"\"\"\nclass myClass:\n    \"\"\"doc\"\"\"\n    def Bar(self):\n        \"\"\"doc\"\"\"\n        pass\n";

/// Does not parse.
pub const BROKEN_MODULE: &str = "def foo(:\n";
