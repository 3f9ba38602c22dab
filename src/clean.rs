//! Removal of generated build artifacts.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub const BUILD_DIR: &str = "build";
pub const INSTALL_DIR: &str = "local";

/// Remove `build/` and `local/` under `root` if present.
///
/// Missing directories are fine; `build.log` is left alone.
pub fn clean(root: &Path) -> Result<()> {
    for dir in [BUILD_DIR, INSTALL_DIR] {
        let path = root.join(dir);
        if path.exists() {
            fs::remove_dir_all(&path)
                .with_context(|| format!("Removing {}", path.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_when_nothing_exists() {
        let tmp = tempfile::tempdir().unwrap();
        clean(tmp.path()).unwrap();
        assert!(fs::read_dir(tmp.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_removes_both_dirs_and_nothing_else() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("build/CMakeFiles")).unwrap();
        fs::write(tmp.path().join("build/CMakeFiles/main.o"), "obj").unwrap();
        fs::create_dir_all(tmp.path().join("local/bin")).unwrap();
        fs::write(tmp.path().join("local/bin/app"), "bin").unwrap();
        fs::write(tmp.path().join("build.log"), "old log").unwrap();
        fs::write(tmp.path().join("CMakeLists.txt"), "project(app)").unwrap();

        clean(tmp.path()).unwrap();

        assert!(!tmp.path().join("build").exists());
        assert!(!tmp.path().join("local").exists());
        assert_eq!(
            fs::read_to_string(tmp.path().join("build.log")).unwrap(),
            "old log"
        );
        assert!(tmp.path().join("CMakeLists.txt").exists());
    }

    #[test]
    fn test_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("build")).unwrap();
        clean(tmp.path()).unwrap();
        clean(tmp.path()).unwrap();
        assert!(!tmp.path().join("build").exists());
    }
}
