use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    fs::FileSystem,
    log::color,
    normalize::{absolute, initial_dir},
    probe::{FsProbe, KnownPathsProbe, Probe},
    Error, FindOptions, JsConfigMode, RResult, Resolver, SearchedNames,
};

/// Walks from `initial_dir` toward the file-system root, once per pass.
///
/// A pass stops after probing `root` or the file-system root. The first match
/// of any pass ends the search.
pub(crate) fn search<P: Probe + ?Sized>(
    probe: &P,
    initial_dir: &Path,
    root: Option<&Path>,
    passes: &[&[&str]],
) -> io::Result<Option<PathBuf>> {
    for names in passes {
        let mut dir = initial_dir;
        loop {
            tracing::debug!("probe {} for {:?}", dir.display(), names);
            if let Some(found) = probe.probe(dir, names)? {
                tracing::debug!("found {}", color::green(&found.display()));
                return Ok(Some(found));
            }
            if root == Some(dir) {
                tracing::debug!("reached root {}", color::bold(&dir.display()));
                break;
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => break,
            }
        }
    }
    Ok(None)
}

pub(crate) fn not_found(filename: &Path, jsconfig: bool) -> Error {
    let searched = if jsconfig {
        SearchedNames::TsConfigOrJsConfig
    } else {
        SearchedNames::TsConfig
    };
    Error::NotFound {
        filename: filename.into(),
        searched,
    }
}

pub(crate) fn find_with(
    fs: &dyn FileSystem,
    options: &FindOptions,
    filename: &Path,
) -> RResult<PathBuf> {
    let initial_dir = initial_dir(filename)?;
    let jsconfig = options.jsconfig != JsConfigMode::None;

    if let Some(cache) = options.external_cache.as_ref() {
        if let Some(cached) = cache.get(&initial_dir) {
            tracing::debug!("cache hit for {}", initial_dir.display());
            return cached
                .map(|config| config.to_path_buf())
                .ok_or_else(|| not_found(filename, jsconfig));
        }
    }

    let root = options.root.as_deref().map(absolute).transpose()?;
    let passes = options.jsconfig.passes();
    let found = match options.tsconfig_paths.as_deref() {
        Some(known) => search(&KnownPathsProbe(known), &initial_dir, root.as_deref(), passes),
        None => search(&FsProbe(fs), &initial_dir, root.as_deref(), passes),
    }?;

    if let Some(cache) = options.external_cache.as_ref() {
        cache.insert(&initial_dir, found.as_deref().map(Arc::from));
    }
    found.ok_or_else(|| not_found(filename, jsconfig))
}

impl Resolver {
    /// Absolute path of the closest config governing `filename`.
    #[tracing::instrument(skip(self))]
    pub fn find(&self, filename: &Path) -> RResult<PathBuf> {
        find_with(self.fs.as_ref(), &self.options, filename)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::{fs::FileKind, test_helper::MemoryFs, ResolverBuilder};
    use rustc_hash::FxHashSet;

    fn resolver(fs: MemoryFs, options: FindOptions) -> Resolver {
        ResolverBuilder::new(Box::new(fs)).build(options)
    }

    #[test]
    fn search_stops_at_root_inclusive() {
        let fs = MemoryFs::default().with("/a/tsconfig.json", FileKind::File);
        let probe = FsProbe(&fs);
        let found = search(
            &probe,
            Path::new("/a/b/c"),
            Some(Path::new("/a/b")),
            JsConfigMode::None.passes(),
        )
        .unwrap();
        assert_eq!(found, None);
        assert_eq!(
            fs.stat_log(),
            vec![
                PathBuf::from("/a/b/c/tsconfig.json"),
                PathBuf::from("/a/b/tsconfig.json"),
            ]
        );

        let found = search(
            &probe,
            Path::new("/a/b/c"),
            Some(Path::new("/a")),
            JsConfigMode::None.passes(),
        )
        .unwrap();
        assert_eq!(found, Some(PathBuf::from("/a/tsconfig.json")));
    }

    #[test]
    fn search_walks_to_filesystem_root() {
        let fs = MemoryFs::default();
        let found = search(
            &FsProbe(&fs),
            Path::new("/a/b"),
            None,
            JsConfigMode::None.passes(),
        )
        .unwrap();
        assert_eq!(found, None);
        assert_eq!(
            fs.stat_log(),
            vec![
                PathBuf::from("/a/b/tsconfig.json"),
                PathBuf::from("/a/tsconfig.json"),
                PathBuf::from("/tsconfig.json"),
            ]
        );
    }

    #[test]
    fn sequential_restarts_from_initial_dir() {
        let fs = MemoryFs::default().with("/a/b/jsconfig.json", FileKind::File);
        let found = search(
            &FsProbe(&fs),
            Path::new("/a/b"),
            None,
            JsConfigMode::Sequential.passes(),
        )
        .unwrap();
        assert_eq!(found, Some(PathBuf::from("/a/b/jsconfig.json")));
        assert_eq!(
            fs.stat_log(),
            vec![
                PathBuf::from("/a/b/tsconfig.json"),
                PathBuf::from("/a/tsconfig.json"),
                PathBuf::from("/tsconfig.json"),
                PathBuf::from("/a/b/jsconfig.json"),
            ]
        );
    }

    #[test]
    fn root_outside_ancestry_is_ignored() {
        let fs = MemoryFs::default().with("/tsconfig.json", FileKind::File);
        let resolver = resolver(
            fs,
            FindOptions {
                root: Some(PathBuf::from("/elsewhere")),
                ..Default::default()
            },
        );
        assert_eq!(
            resolver.find(Path::new("/a/b/x.ts")).unwrap(),
            PathBuf::from("/tsconfig.json")
        );
    }

    #[test]
    fn fifo_counts_as_config() {
        let fs = MemoryFs::default().with("/a/tsconfig.json", FileKind::Fifo);
        let resolver = resolver(fs, FindOptions::default());
        assert_eq!(
            resolver.find(Path::new("/a/b/x.ts")).unwrap(),
            PathBuf::from("/a/tsconfig.json")
        );
    }

    #[test]
    fn access_error_aborts_resolution() {
        let fs = MemoryFs::default()
            .with_error("/a/b/tsconfig.json", io::ErrorKind::PermissionDenied)
            .with("/a/tsconfig.json", FileKind::File);
        let resolver = resolver(fs, FindOptions::default());
        let err = resolver.find(Path::new("/a/b/x.ts")).unwrap_err();
        match err {
            Error::Io(error) => assert_eq!(error.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn known_paths_skip_the_file_system() {
        let fs = MemoryFs::default();
        let known: FxHashSet<PathBuf> = [PathBuf::from("/proj/tsconfig.json")].into_iter().collect();
        let options = FindOptions {
            tsconfig_paths: Some(Arc::new(known)),
            ..Default::default()
        };
        let found = find_with(&fs, &options, Path::new("/proj/src/x.ts")).unwrap();
        assert_eq!(found, PathBuf::from("/proj/tsconfig.json"));
        assert_eq!(fs.stat_calls(), 0);
    }

    #[test]
    fn cache_answers_repeated_lookups() {
        let fs = MemoryFs::default().with("/a/tsconfig.json", FileKind::File);
        let cache = Arc::new(crate::FindCache::default());
        let options = FindOptions {
            external_cache: Some(cache.clone()),
            ..Default::default()
        };
        let first = find_with(&fs, &options, Path::new("/a/b/x.ts")).unwrap();
        let calls = fs.stat_calls();
        let second = find_with(&fs, &options, Path::new("/a/b/y.ts")).unwrap();
        assert_eq!(first, second);
        assert_eq!(fs.stat_calls(), calls);
        assert_eq!(cache.len(), 1);

        let err = find_with(&fs, &options, Path::new("/c/x.ts")).unwrap_err();
        assert!(err.is_not_found());
        let calls = fs.stat_calls();
        let err = find_with(&fs, &options, Path::new("/c/y.ts")).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(fs.stat_calls(), calls);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn io_errors_are_not_cached() {
        let fs = MemoryFs::default().with_error("/a/tsconfig.json", io::ErrorKind::Other);
        let cache = Arc::new(crate::FindCache::default());
        let options = FindOptions {
            external_cache: Some(cache.clone()),
            ..Default::default()
        };
        assert!(find_with(&fs, &options, Path::new("/a/x.ts")).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn not_found_message_depends_on_mode() {
        let fs = MemoryFs::default();
        let err = find_with(&fs, &FindOptions::default(), Path::new("/a/x.ts")).unwrap_err();
        assert_eq!(err.to_string(), "no tsconfig file found for /a/x.ts");

        for jsconfig in [JsConfigMode::Sequential, JsConfigMode::Parallel] {
            let options = FindOptions {
                jsconfig,
                ..Default::default()
            };
            let err = find_with(&fs, &options, Path::new("/a/x.ts")).unwrap_err();
            assert_eq!(err.to_string(), "no tsconfig or jsconfig file found for /a/x.ts");
        }
    }
}
