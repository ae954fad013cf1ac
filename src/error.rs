use std::{fmt, io, path::Path};

/// Which config names a failed search was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchedNames {
    TsConfig,
    TsConfigOrJsConfig,
}

impl fmt::Display for SearchedNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchedNames::TsConfig => f.write_str("tsconfig"),
            SearchedNames::TsConfigOrJsConfig => f.write_str("tsconfig or jsconfig"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no {searched} file found for {}", .filename.display())]
    NotFound {
        filename: Box<Path>,
        searched: SearchedNames,
    },
    /// A status check failed for a reason other than nonexistence.
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid find options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
