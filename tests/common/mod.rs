//! Common test utilities for kcount integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch directory that packages are laid out in
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Create a package directory marked with the default package file
    #[allow(dead_code)]
    pub fn create_package(&self, path: &str) -> PathBuf {
        self.write_file(&format!("{path}/Krmfile"), "");
        self.path.join(path)
    }

    /// Copy a fixture package tree into the workspace
    #[allow(dead_code)]
    pub fn copy_fixture_package(&self, fixture_name: &str, target_name: &str) -> PathBuf {
        let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("common")
            .join("fixtures")
            .join("packages")
            .join(fixture_name);

        let target_path = self.path.join(target_name);
        copy_dir_recursive(&fixture_path, &target_path).expect("Failed to copy fixture package");
        target_path
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// kcount binary with a clean environment, run from `dir`
#[allow(deprecated, dead_code)]
pub fn kcount_cmd_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("kcount").expect("kcount binary is built");
    cmd.current_dir(dir);
    // Ignore any developer overrides
    cmd.env_remove("KCOUNT_PACKAGE_FILE");
    cmd.env_remove("KCOUNT_LOG");
    cmd
}

/// Recursively copy a directory
fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    if !dst.exists() {
        std::fs::create_dir_all(dst)?;
    }

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if file_type.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let workspace = TestWorkspace::new();
        assert!(workspace.path.exists());
    }

    #[test]
    fn test_workspace_copy_fixture_package() {
        let workspace = TestWorkspace::new();
        let shop = workspace.copy_fixture_package("shop", "shop");

        assert!(shop.join("Krmfile").is_file());
        assert!(shop.join("backend/db/statefulset.yaml").is_file());
        assert!(shop.join(".cache/stale.yaml").is_file());
    }
}
