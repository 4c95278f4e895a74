//! Plain-text persistence of a [`Model`].
//!
//! A model lives in a directory named after it, holding two files,
//! `transitions` and `emissions`. Each line is one link:
//!
//! ```text
//! previous<TAB>current<TAB>weight
//! ```
//!
//! Weights are written with the shortest representation that parses back
//! to the same `f64`. There is no header or version.

use std::{
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use super::{
    link::{Link, LinkTable},
    model::Model,
};
use crate::error::{Error, Result, WeightError};

pub const TRANSITIONS_FILE: &str = "transitions";
pub const EMISSIONS_FILE: &str = "emissions";

pub fn write_links<W: Write>(mut w: W, links: &LinkTable) -> std::io::Result<()> {
    for link in links {
        writeln!(w, "{}\t{}\t{}", link.previous, link.current, link.weight)?;
    }
    w.flush()
}

/// Reads links written by [`write_links`]. `path` is only used in errors.
///
/// Blank lines are skipped. Any other line must have exactly three
/// tab-separated fields and a finite weight.
pub fn read_links<R: BufRead>(r: R, path: &Path) -> Result<LinkTable> {
    let mut links = LinkTable::default();
    for (i, line) in r.lines().enumerate() {
        let line = line.map_err(|e| Error::storage(path, e))?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        let &[previous, current, weight] = fields.as_slice() else {
            return Err(Error::InvalidModel(format!(
                "{}:{}: expected 3 tab-separated fields, found {}",
                path.display(),
                i + 1,
                fields.len()
            )));
        };
        let weight = parse_weight(weight).map_err(|source| Error::InvalidWeight {
            path: path.to_path_buf(),
            line: i + 1,
            value: weight.to_string(),
            source,
        })?;
        links.insert(Link::new(previous, current, weight));
    }
    Ok(links)
}

fn parse_weight(s: &str) -> std::result::Result<f64, WeightError> {
    let w: f64 = s.trim().parse()?;
    if !w.is_finite() {
        return Err(WeightError::NotFinite);
    }
    Ok(w)
}

fn write_file(path: &Path, links: &LinkTable) -> Result<()> {
    let f = File::create(path).map_err(|e| Error::storage(path, e))?;
    write_links(BufWriter::new(f), links).map_err(|e| Error::storage(path, e))
}

fn read_file(path: &Path) -> Result<LinkTable> {
    let f = File::open(path).map_err(|e| Error::storage(path, e))?;
    read_links(BufReader::new(f), path)
}

/// Models stored as `<root>/<name>/{transitions,emissions}`.
#[derive(Debug, Clone)]
pub struct ModelStore {
    root: PathBuf,
}

impl ModelStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path(name).is_dir()
    }

    /// Saves the model under its own name, replacing any previous copy.
    pub fn save(&self, model: &Model) -> Result<PathBuf> {
        let dir = self.path(model.name());
        Self::save_to(&dir, model)?;
        Ok(dir)
    }

    pub fn load(&self, name: &str) -> Result<Model> {
        self.try_load(name)?.ok_or_else(|| Error::ModelNotFound(name.to_string()))
    }

    /// Loads a model, or returns `Ok(None)` when no model of that name
    /// exists. Read and parse failures are still errors.
    pub fn try_load(&self, name: &str) -> Result<Option<Model>> {
        if !self.exists(name) {
            return Ok(None);
        }
        Self::load_from(&self.path(name)).map(Some)
    }

    /// Writes both tables into a scratch directory next to `dir` and then
    /// renames it into place, so a failed save never leaves a readable
    /// half-written model behind.
    pub fn save_to(dir: &Path, model: &Model) -> Result<()> {
        let parent = dir.parent().unwrap_or_else(|| Path::new("."));
        let file_name = dir
            .file_name()
            .ok_or_else(|| Error::InvalidModel(format!("not a model directory: {}", dir.display())))?;
        fs::create_dir_all(parent).map_err(|e| Error::storage(parent, e))?;

        let tmp = parent.join(format!(".{}.tmp-{}", file_name.to_string_lossy(), std::process::id()));
        if tmp.exists() {
            fs::remove_dir_all(&tmp).map_err(|e| Error::storage(&tmp, e))?;
        }
        fs::create_dir(&tmp).map_err(|e| Error::storage(&tmp, e))?;
        let written = write_file(&tmp.join(TRANSITIONS_FILE), model.transitions())
            .and_then(|_| write_file(&tmp.join(EMISSIONS_FILE), model.emissions()));
        if let Err(e) = written {
            let _ = fs::remove_dir_all(&tmp);
            return Err(e);
        }

        if dir.exists() {
            fs::remove_dir_all(dir).map_err(|e| Error::storage(dir, e))?;
        }
        fs::rename(&tmp, dir).map_err(|e| Error::storage(dir, e))?;
        log::debug!(
            "saved model {} to {} (transitions: {}, emissions: {})",
            model.name(),
            dir.display(),
            model.transitions().len(),
            model.emissions().len()
        );
        Ok(())
    }

    /// Loads the model stored in `dir`, named after the directory.
    pub fn load_from(dir: &Path) -> Result<Model> {
        let name = dir.file_name().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
        let transitions = read_file(&dir.join(TRANSITIONS_FILE))?;
        let emissions = read_file(&dir.join(EMISSIONS_FILE))?;
        log::debug!(
            "loaded model {name} from {} (transitions: {}, emissions: {})",
            dir.display(),
            transitions.len(),
            emissions.len()
        );
        Ok(Model::from_links(name, transitions, emissions))
    }
}
