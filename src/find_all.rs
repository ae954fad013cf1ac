use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

use crate::{fs::FileKind, normalize::absolute, RResult, Resolver};

impl Resolver {
    /// Every config file below `dir`, ready to be used as
    /// `FindOptions::tsconfig_paths`.
    ///
    /// Collects `tsconfig.json`, plus `jsconfig.json` unless `jsconfig` is
    /// `JsConfigMode::None`. Directories named in `skip_dirs` and symlinked
    /// directories are not entered.
    #[tracing::instrument(skip(self))]
    pub fn find_all(&self, dir: &Path) -> RResult<FxHashSet<PathBuf>> {
        let names = self.options.jsconfig.file_names();
        let mut found = FxHashSet::default();
        let mut pending = vec![absolute(dir)?];
        while let Some(dir) = pending.pop() {
            for entry in self.fs.read_dir(&dir)? {
                match entry.kind {
                    FileKind::Directory => {
                        let skipped = self
                            .options
                            .skip_dirs
                            .iter()
                            .any(|skip| entry.name == skip.as_str());
                        if !skipped {
                            pending.push(dir.join(&entry.name));
                        }
                    }
                    FileKind::File if names.iter().any(|name| entry.name == *name) => {
                        found.insert(dir.join(&entry.name));
                    }
                    _ => {}
                }
            }
        }
        tracing::debug!("found {} config files", found.len());
        Ok(found)
    }
}
