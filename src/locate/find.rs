//! File discovery through an external `find` process.

use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

/// Lists files under `root` whose name ends in `suffix` by running `find`.
///
/// The call blocks until `find` exits. A `find` that cannot start or exits
/// with a non-zero status yields no files.
pub fn find_files(root: &Path, suffix: &str) -> Vec<PathBuf> {
    let output = Command::new("find")
        .arg(root)
        .args(["-type", "f", "-name"])
        .arg(format!("*{suffix}"))
        .output();

    let output = match output {
        Ok(output) => output,
        Err(e) => {
            warn!(root = %root.display(), error = %e, "failed to run find");
            return Vec::new();
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        warn!(
            root = %root.display(),
            status = %output.status,
            stderr = %stderr.trim(),
            "find exited with an error"
        );
        return Vec::new();
    }

    let paths = split_listing(&String::from_utf8_lossy(&output.stdout));
    debug!(count = paths.len(), "find listed files");
    paths
}

/// Splits newline-separated output into paths, dropping blank entries.
pub fn split_listing(listing: &str) -> Vec<PathBuf> {
    listing
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}
