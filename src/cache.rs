use dashmap::DashMap;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Default, Debug)]
pub struct FindCache {
    /// initial directory -> the closest config, `None` when nothing was found
    dir_to_config: DashMap<PathBuf, Option<Arc<Path>>, BuildHasherDefault<FxHasher>>,
}

impl FindCache {
    pub(crate) fn get(&self, dir: &Path) -> Option<Option<Arc<Path>>> {
        self.dir_to_config.get(dir).map(|cached| cached.value().clone())
    }

    pub(crate) fn insert(&self, dir: &Path, config: Option<Arc<Path>>) {
        self.dir_to_config.insert(dir.to_path_buf(), config);
    }

    pub fn len(&self) -> usize {
        self.dir_to_config.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dir_to_config.is_empty()
    }

    pub fn clear(&self) {
        self.dir_to_config.clear();
    }
}
