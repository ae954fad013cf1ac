use std::ffi::OsString;
use std::fmt::Debug;
use std::fs::FileType;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    /// Named pipe, e.g. a config handed over through process substitution.
    Fifo,
    Directory,
    Symlink,
    Other,
}

impl FileKind {
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_file() {
            FileKind::File
        } else if file_type.is_dir() {
            FileKind::Directory
        } else if file_type.is_symlink() {
            FileKind::Symlink
        } else if is_fifo(&file_type) {
            FileKind::Fifo
        } else {
            FileKind::Other
        }
    }
}

#[cfg(unix)]
fn is_fifo(file_type: &FileType) -> bool {
    use std::os::unix::fs::FileTypeExt;
    file_type.is_fifo()
}

#[cfg(not(unix))]
fn is_fifo(_file_type: &FileType) -> bool {
    false
}

#[derive(Debug, Clone)]
pub struct DirEntry {
    pub name: OsString,
    /// Kind of the entry itself, symlinks are not followed.
    pub kind: FileKind,
}

pub trait FileSystem: Debug + Send + Sync {
    /// Follows symlinks, like `stat(2)`.
    fn stat(&self, path: &Path) -> io::Result<FileKind>;
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>>;
}

#[derive(Debug, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn stat(&self, path: &Path) -> io::Result<FileKind> {
        std::fs::metadata(path).map(|meta| FileKind::from_file_type(meta.file_type()))
    }

    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
        std::fs::read_dir(dir)?
            .map(|entry| {
                let entry = entry?;
                let kind = FileKind::from_file_type(entry.file_type()?);
                Ok(DirEntry {
                    name: entry.file_name(),
                    kind,
                })
            })
            .collect()
    }
}
