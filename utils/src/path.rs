//! Source path display relative to the working directory.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Render `file` relative to the current working directory when it lies
/// beneath it; otherwise return it unchanged.
///
/// Falls back to the path as given if the working directory can't be queried.
#[must_use]
pub fn relative_to_cwd(file: &str) -> String {
    relative_to_queried(env::current_dir(), file)
}

fn relative_to_queried(cwd: io::Result<PathBuf>, file: &str) -> String {
    match cwd {
        Ok(dir) => relative_to(&dir, file),
        Err(e) => {
            tracing::debug!(%e, "Working directory unavailable, keeping path as captured");
            file.to_string()
        }
    }
}

/// Render `file` relative to `base` when it lies beneath it.
#[must_use]
pub fn relative_to(base: &Path, file: &str) -> String {
    Path::new(file)
        .strip_prefix(base)
        .ok()
        .filter(|rest| !rest.as_os_str().is_empty())
        .map_or_else(|| file.to_string(), |rest| rest.display().to_string())
}
