use std::{
    io,
    path::{Path, PathBuf},
};

use rustc_hash::FxHashSet;

use crate::fs::{FileKind, FileSystem};

/// Answers "does `dir` contain one of `names`?" for a single directory.
pub(crate) trait Probe {
    /// Returns the first existing candidate in `names` order.
    fn probe(&self, dir: &Path, names: &[&str]) -> io::Result<Option<PathBuf>>;
}

/// Membership test against a caller-maintained inventory. Never touches the
/// file system.
pub(crate) struct KnownPathsProbe<'a>(pub &'a FxHashSet<PathBuf>);

impl Probe for KnownPathsProbe<'_> {
    fn probe(&self, dir: &Path, names: &[&str]) -> io::Result<Option<PathBuf>> {
        Ok(names
            .iter()
            .map(|name| dir.join(name))
            .find(|path| self.0.contains(path)))
    }
}

/// Stats each candidate in turn. Regular files and FIFOs match, a missing
/// file is a miss, every other failure is returned.
pub(crate) struct FsProbe<'a>(pub &'a dyn FileSystem);

impl Probe for FsProbe<'_> {
    fn probe(&self, dir: &Path, names: &[&str]) -> io::Result<Option<PathBuf>> {
        for name in names {
            let path = dir.join(name);
            match self.0.stat(&path) {
                Ok(FileKind::File | FileKind::Fifo) => return Ok(Some(path)),
                Ok(_) => {}
                Err(error) if error.kind() == io::ErrorKind::NotFound => {}
                Err(error) => return Err(error),
            }
        }
        Ok(None)
    }
}

/// `fileExists` semantics of the compiler host: only regular files count and
/// any failure reads as "does not exist".
pub(crate) struct FileExistsProbe<'a>(pub &'a dyn FileSystem);

impl Probe for FileExistsProbe<'_> {
    fn probe(&self, dir: &Path, names: &[&str]) -> io::Result<Option<PathBuf>> {
        Ok(names
            .iter()
            .map(|name| dir.join(name))
            .find(|path| matches!(self.0.stat(path), Ok(FileKind::File))))
    }
}
