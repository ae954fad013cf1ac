//! Mirror of the compiler's own config lookup (`ts.findConfigFile`).
//!
//! No root boundary, no known paths and no parallel mode. Only regular files
//! count and unreadable entries are skipped instead of failing.

use std::path::{Path, PathBuf};

use crate::{
    find::{not_found, search},
    fs::{FileSystem, OsFileSystem},
    normalize::initial_dir,
    probe::FileExistsProbe,
    JsConfigMode, RResult,
};

/// Closest `tsconfig.json`, then closest `jsconfig.json` if `jsconfig` is set
/// and no tsconfig exists anywhere above `filename`.
#[tracing::instrument]
pub fn find_native(filename: &Path, jsconfig: bool) -> RResult<PathBuf> {
    find_native_with(&OsFileSystem, filename, jsconfig)
}

pub(crate) fn find_native_with(
    fs: &dyn FileSystem,
    filename: &Path,
    jsconfig: bool,
) -> RResult<PathBuf> {
    let initial_dir = initial_dir(filename)?;
    let mode = if jsconfig {
        JsConfigMode::Sequential
    } else {
        JsConfigMode::None
    };
    search(&FileExistsProbe(fs), &initial_dir, None, mode.passes())?
        .ok_or_else(|| not_found(filename, jsconfig))
}
