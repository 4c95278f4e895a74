use std::{io, num::ParseFloatError, path::PathBuf};

use thiserror::Error;

/// Errors returned by corpus loading, training and model storage.
///
/// Unknown words and unknown tags are not errors: they surface as an
/// empty score map from the model or an untagged token from the tagger.
#[derive(Debug, Error)]
pub enum Error {
    #[error("corpus not found: {0}")]
    CorpusNotFound(String),
    #[error("model not found: {0}")]
    ModelNotFound(String),
    #[error("storage failure at {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid weight {value:?} at {}:{line}: {source}", path.display())]
    InvalidWeight {
        path: PathBuf,
        line: usize,
        value: String,
        #[source]
        source: WeightError,
    },
    #[error("invalid model: {0}")]
    InvalidModel(String),
    #[error("invalid config {}: {source}", path.display())]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum WeightError {
    #[error(transparent)]
    Parse(#[from] ParseFloatError),
    #[error("weight is not finite")]
    NotFinite,
}

impl Error {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Storage { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
