use crate::RResult;

use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Absolute, lexically normalized form of `path`. Relative paths are
/// resolved against the current working directory. Symlinks are left alone.
pub(crate) fn absolute(path: &Path) -> RResult<PathBuf> {
    let absolutized = path.absolutize()?;
    // Eliminate `\\?\` prefix in windows.
    Ok(dunce::simplified(&absolutized).to_path_buf())
}

/// Directory containing `filename`, which is where the search starts.
pub(crate) fn initial_dir(filename: &Path) -> RResult<PathBuf> {
    let path = absolute(filename)?;
    Ok(match path.parent() {
        Some(parent) => parent.to_path_buf(),
        None => path,
    })
}
