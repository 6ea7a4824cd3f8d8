#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the copyright-guard binary.
#[macro_export]
macro_rules! copyright_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("copyright-guard"))
    };
}

/// A single-line organization claim in the canonical form.
pub fn org_claim(years: &str, organization: &str) -> String {
    format!("Copyright (c) {years} by {organization}. All rights reserved.")
}

/// A C source file with the given header lines in a block comment.
pub fn c_source(header_lines: &[&str]) -> String {
    let mut content = String::from("/*\n");
    for line in header_lines {
        content.push_str(" * ");
        content.push_str(line);
        content.push('\n');
    }
    content.push_str(" */\n\nint main(void) { return 0; }\n");
    content
}

pub const ACME_CONFIG: &str = r#"
version = "1"
organization = "Acme"
year = 2024
"#;

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
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a local copyright-guard config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".copyright-guard.toml", content);
    }
}
