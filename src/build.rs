//! The cmake configure/build/install sequence.

use crate::runner;
use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;

pub const LOG_FILE: &str = "build.log";

/// Run the full cmake sequence in `root`, teeing output to `build.log`.
///
/// The log is truncated at the start of every run. Each stage must exit zero
/// before the next one starts; on failure the log is left on disk with the
/// partial output for inspection.
pub fn build(root: &Path) -> Result<()> {
    let log_path = root.join(LOG_FILE);
    let mut log =
        File::create(&log_path).with_context(|| format!("Creating {}", log_path.display()))?;

    let prefix = format!("-DCMAKE_INSTALL_PREFIX={}", root.join("local").display());
    runner::run(
        root,
        &[
            "cmake",
            "-S",
            ".",
            "-B",
            "build",
            "-G",
            "Ninja",
            "-DCMAKE_BUILD_TYPE=Debug",
            "-DCMAKE_EXPORT_COMPILE_COMMANDS=ON",
            &prefix,
        ],
        &mut log,
    )?;
    runner::run(root, &["cmake", "--build", "build"], &mut log)?;
    runner::run(root, &["cmake", "--install", "build"], &mut log)?;
    Ok(())
}
