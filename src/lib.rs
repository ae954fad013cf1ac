//! # tsconfig_find
//!
//! Find the `tsconfig.json` (or `jsconfig.json`) that governs a source file
//! by walking up its ancestor directories.
//!
//! ## How to use?
//!
//! ```rust
//! // ~/
//! // |-- a
//! // |---- jsconfig.json
//! // |---- index.js
//! // |-- tsconfig.json
//!
//! use tsconfig_find::{FindOptions, JsConfigMode, Resolver};
//! use std::path::Path;
//!
//! let resolver = Resolver::new(FindOptions {
//!     jsconfig: JsConfigMode::Parallel,
//!     ..Default::default()
//! });
//!
//! let result = resolver.find(Path::new("a/index.js"));
//! // `JsConfigMode::Parallel`   -> Ok("<cwd>/a/jsconfig.json")
//! // `JsConfigMode::Sequential` -> Ok("<cwd>/tsconfig.json")
//! // `JsConfigMode::None`       -> Ok("<cwd>/tsconfig.json")
//! # let _ = result;
//! ```
//!

mod builder;
mod cache;
mod error;
mod find;
mod find_all;
pub mod fs;
pub mod log;
mod native;
mod normalize;
mod options;
mod probe;

pub use builder::ResolverBuilder;
pub use cache::FindCache;
pub use error::*;
pub use native::find_native;
pub use options::{FindOptions, JsConfigMode, RawFindOptions, RawJsConfig, RawJsConfigMode};

use fs::{FileSystem, OsFileSystem};
use std::path::{Path, PathBuf};

pub(crate) const TSCONFIG: &str = "tsconfig.json";
pub(crate) const JSCONFIG: &str = "jsconfig.json";

pub type RResult<T> = Result<T, Error>;

#[derive(Debug)]
pub struct Resolver {
    pub options: FindOptions,
    pub(crate) fs: Box<dyn FileSystem>,
}

impl Resolver {
    pub fn new(options: FindOptions) -> Self {
        ResolverBuilder::default().build(options)
    }
}

/// One-off lookup against the real file system.
pub fn find(filename: &Path, options: &FindOptions) -> RResult<PathBuf> {
    find::find_with(&OsFileSystem, options, filename)
}

#[cfg(debug_assertions)]
pub mod test_helper {
    use crate::fs::{DirEntry, FileKind, FileSystem};
    use std::collections::{BTreeMap, HashMap};
    use std::ffi::OsString;
    use std::io;
    use std::path::{Component, Path, PathBuf};
    use std::sync::Mutex;

    pub fn p(paths: Vec<&str>) -> PathBuf {
        paths.iter().fold(
            std::env::current_dir()
                .unwrap()
                .join("tests")
                .join("fixtures"),
            |acc, path| acc.join(path),
        )
    }

    /// In-memory tree. Directories are implied by the files below them.
    /// Every `stat` is recorded.
    #[derive(Debug, Default)]
    pub struct MemoryFs {
        entries: HashMap<PathBuf, Result<FileKind, io::ErrorKind>>,
        stats: Mutex<Vec<PathBuf>>,
    }

    impl MemoryFs {
        pub fn with(mut self, path: &str, kind: FileKind) -> Self {
            self.entries.insert(PathBuf::from(path), Ok(kind));
            self
        }

        pub fn with_error(mut self, path: &str, kind: io::ErrorKind) -> Self {
            self.entries.insert(PathBuf::from(path), Err(kind));
            self
        }

        pub fn stat_log(&self) -> Vec<PathBuf> {
            self.stats.lock().unwrap().clone()
        }

        pub fn stat_calls(&self) -> usize {
            self.stats.lock().unwrap().len()
        }

        fn has_children(&self, dir: &Path) -> bool {
            self.entries
                .keys()
                .any(|key| key != dir && key.starts_with(dir))
        }
    }

    impl FileSystem for MemoryFs {
        fn stat(&self, path: &Path) -> io::Result<FileKind> {
            self.stats.lock().unwrap().push(path.to_path_buf());
            match self.entries.get(path) {
                Some(Ok(kind)) => Ok(*kind),
                Some(Err(kind)) => Err(io::Error::from(*kind)),
                None if self.has_children(path) => Ok(FileKind::Directory),
                None => Err(io::Error::from(io::ErrorKind::NotFound)),
            }
        }

        fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
            match self.entries.get(dir) {
                Some(Err(kind)) => return Err(io::Error::from(*kind)),
                Some(Ok(FileKind::Directory)) => {}
                Some(Ok(_)) => return Err(io::Error::from(io::ErrorKind::Other)),
                None if self.has_children(dir) => {}
                None => return Err(io::Error::from(io::ErrorKind::NotFound)),
            }
            let mut children: BTreeMap<OsString, FileKind> = BTreeMap::new();
            for (key, value) in &self.entries {
                let Ok(rest) = key.strip_prefix(dir) else {
                    continue;
                };
                let mut components = rest.components();
                let Some(Component::Normal(name)) = components.next() else {
                    continue;
                };
                let kind = match (components.next(), value) {
                    (None, Ok(kind)) => *kind,
                    _ => FileKind::Directory,
                };
                children.insert(name.to_os_string(), kind);
            }
            Ok(children
                .into_iter()
                .map(|(name, kind)| DirEntry { name, kind })
                .collect())
        }
    }
}
