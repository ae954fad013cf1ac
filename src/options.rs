use std::{path::PathBuf, sync::Arc};

use rustc_hash::FxHashSet;
use serde::Deserialize;

use crate::{cache::FindCache, normalize::absolute, RResult, JSCONFIG, TSCONFIG};

/// How `jsconfig.json` takes part in the search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsConfigMode {
    /// Only `tsconfig.json` is searched for.
    #[default]
    None,
    /// Search the whole ancestry for `tsconfig.json` first, then start over
    /// looking for `jsconfig.json`. This is what the compiler does.
    Sequential,
    /// Return whichever of the two is closest; `tsconfig.json` wins when
    /// both are in the same directory.
    Parallel,
}

impl JsConfigMode {
    /// Candidate names for each pass, in order.
    pub(crate) fn passes(self) -> &'static [&'static [&'static str]] {
        match self {
            JsConfigMode::None => &[&[TSCONFIG]],
            JsConfigMode::Sequential => &[&[TSCONFIG], &[JSCONFIG]],
            JsConfigMode::Parallel => &[&[TSCONFIG, JSCONFIG]],
        }
    }

    /// Names `find_all` collects.
    pub(crate) fn file_names(self) -> &'static [&'static str] {
        match self {
            JsConfigMode::None => &[TSCONFIG],
            JsConfigMode::Sequential | JsConfigMode::Parallel => &[TSCONFIG, JSCONFIG],
        }
    }
}

#[derive(Debug, Clone)]
pub struct FindOptions {
    /// Known config file locations used instead of probing the file system.
    /// Membership is authoritative, build it with `Resolver::find_all`.
    /// Default is `None`.
    pub tsconfig_paths: Option<Arc<FxHashSet<PathBuf>>>,
    /// Project root, the search never ascends past it. The root itself is
    /// still searched.
    /// Default is `None`.
    pub root: Option<PathBuf>,
    /// Default is `JsConfigMode::None`.
    pub jsconfig: JsConfigMode,
    /// Memoize results per directory. Only share a cache between resolvers
    /// with identical options.
    /// Default is `None`.
    pub external_cache: Option<Arc<FindCache>>,
    /// Directory names `find_all` does not descend into.
    /// Default is `["node_modules", ".git"]`.
    pub skip_dirs: Vec<String>,
}

impl Default for FindOptions {
    fn default() -> Self {
        let skip_dirs = vec![String::from("node_modules"), String::from(".git")];
        Self {
            tsconfig_paths: None,
            root: None,
            jsconfig: JsConfigMode::None,
            external_cache: None,
            skip_dirs,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawJsConfig {
    Enabled(bool),
    Mode(RawJsConfigMode),
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RawJsConfigMode {
    Parallel,
}

/// Options as they arrive from JavaScript tooling.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFindOptions {
    pub ts_config_paths: Option<Vec<PathBuf>>,
    pub root: Option<PathBuf>,
    pub jsconfig: Option<RawJsConfig>,
    pub skip_dirs: Option<Vec<String>>,
}

impl RawFindOptions {
    pub fn from_json(json: &str) -> RResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn normalized(&self) -> RResult<FindOptions> {
        let default = FindOptions::default();
        let tsconfig_paths = match &self.ts_config_paths {
            Some(paths) => Some(Arc::new(
                paths
                    .iter()
                    .map(|path| absolute(path))
                    .collect::<RResult<FxHashSet<_>>>()?,
            )),
            None => None,
        };
        let root = self.root.as_deref().map(absolute).transpose()?;
        let jsconfig = match self.jsconfig {
            None | Some(RawJsConfig::Enabled(false)) => JsConfigMode::None,
            Some(RawJsConfig::Enabled(true)) => JsConfigMode::Sequential,
            Some(RawJsConfig::Mode(RawJsConfigMode::Parallel)) => JsConfigMode::Parallel,
        };
        Ok(FindOptions {
            tsconfig_paths,
            root,
            jsconfig,
            skip_dirs: self.skip_dirs.to_owned().unwrap_or(default.skip_dirs),
            ..default
        })
    }
}
