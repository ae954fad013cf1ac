use crate::fs::{FileSystem, OsFileSystem};
use crate::log;
use crate::{FindOptions, Resolver};

#[derive(Debug)]
pub struct ResolverBuilder {
    fs: Box<dyn FileSystem>,
}

impl Default for ResolverBuilder {
    fn default() -> Self {
        Self::new(Box::new(OsFileSystem))
    }
}

impl ResolverBuilder {
    pub fn new(fs: Box<dyn FileSystem>) -> Self {
        ResolverBuilder { fs }
    }

    pub fn build(self, options: FindOptions) -> Resolver {
        log::enable_by_env();
        Resolver {
            options,
            fs: self.fs,
        }
    }
}
