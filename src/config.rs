use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Where corpora and trained models live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Each corpus is a directory of `word/tag` text files under this root.
    pub corpus_dir: PathBuf,
    /// Each model is saved as a directory under this root.
    pub model_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self { corpus_dir: PathBuf::from("./corpus"), model_dir: PathBuf::from("./models") }
    }
}

impl Config {
    /// Reads a JSON config file. Missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|e| Error::storage(path, e))?;
        serde_json::from_str(&s).map_err(|source| Error::InvalidConfig { path: path.to_path_buf(), source })
    }
}
