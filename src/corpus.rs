use std::{
    fs::{self, File},
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::{
    error::{Error, Result},
    quark::Quark,
};

/// A `word/tag` pair read from a training sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledToken {
    /// Position within the source sentence.
    pub order: usize,
    pub word: String,
    pub tag: String,
}

impl LabeledToken {
    pub fn new(order: usize, word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self { order, word: word.into(), tag: tag.into() }
    }
}

/// One tagged training sentence.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TrainingRecord {
    tokens: Vec<LabeledToken>,
}

impl TrainingRecord {
    pub fn push(&mut self, token: LabeledToken) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[LabeledToken] {
        &self.tokens
    }

    /// Tokens ordered by position, whatever order they were pushed in.
    pub fn sorted(&self) -> Vec<&LabeledToken> {
        let mut v: Vec<&LabeledToken> = self.tokens.iter().collect();
        v.sort_by_key(|t| t.order);
        v
    }

    /// Parses a whitespace separated line of `word/tag` tokens.
    ///
    /// The split happens at the last slash, so `1/2/NUM` reads as word
    /// `1/2`. Tokens without a slash, or with an empty side, are dropped
    /// and counted in the second tuple field.
    pub fn parse(line: &str) -> (Self, usize) {
        let mut record = Self::default();
        let mut dropped = 0;
        for (order, raw) in line.split_whitespace().enumerate() {
            match raw.rsplit_once('/') {
                Some((word, tag)) if !word.is_empty() && !tag.is_empty() => {
                    record.push(LabeledToken::new(order, word.to_lowercase(), tag));
                }
                _ => dropped += 1,
            }
        }
        (record, dropped)
    }
}

impl From<Vec<LabeledToken>> for TrainingRecord {
    fn from(mut tokens: Vec<LabeledToken>) -> Self {
        tokens.sort_by_key(|t| t.order);
        Self { tokens }
    }
}

/// Tagged sentences plus the tags seen across them.
#[derive(Debug, Default, Clone)]
pub struct Corpus {
    pub name: String,
    pub tags: Quark,
    pub records: Vec<TrainingRecord>,
}

impl Corpus {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    /// Builds a corpus from in-memory lines, one sentence per line.
    pub fn from_lines<'a, I: IntoIterator<Item = &'a str>>(name: impl Into<String>, lines: I) -> Self {
        let mut corpus = Self::new(name);
        for line in lines {
            corpus.push_line(line);
        }
        corpus
    }

    /// Adds one sentence. Returns the number of malformed tokens dropped.
    pub fn push_line(&mut self, line: &str) -> usize {
        let (record, dropped) = TrainingRecord::parse(line);
        self.push(record);
        dropped
    }

    /// Adds a record, ignoring empty ones.
    pub fn push(&mut self, record: TrainingRecord) {
        if record.is_empty() {
            return;
        }
        for token in record.tokens() {
            self.tags.find_or_insert(&token.tag);
        }
        self.records.push(record);
    }

    pub fn read<R: BufRead>(&mut self, reader: R) -> std::io::Result<usize> {
        let mut dropped = 0;
        for line in reader.lines() {
            dropped += self.push_line(&line?);
        }
        Ok(dropped)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_tokens(&self) -> usize {
        self.records.iter().map(TrainingRecord::len).sum()
    }
}

/// Something that can hand out a corpus by name.
pub trait CorpusSource {
    fn corpus(&self, name: &str) -> Result<Corpus>;
}

/// Corpora stored as directories of text files under a root directory.
///
/// Every regular file in `<root>/<name>` is read, in file-name order.
#[derive(Debug, Clone)]
pub struct DirCorpus {
    root: PathBuf,
}

impl DirCorpus {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn exists(&self, name: &str) -> bool {
        self.root.join(name).is_dir()
    }

    fn files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| Error::storage(dir, e))? {
            let entry = entry.map_err(|e| Error::storage(dir, e))?;
            let file_type = entry.file_type().map_err(|e| Error::storage(entry.path(), e))?;
            if file_type.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();
        Ok(files)
    }
}

impl CorpusSource for DirCorpus {
    fn corpus(&self, name: &str) -> Result<Corpus> {
        if !self.exists(name) {
            return Err(Error::CorpusNotFound(name.to_string()));
        }
        let mut corpus = Corpus::new(name);
        for path in self.files(&self.root.join(name))? {
            log::debug!("reading corpus file {}", path.display());
            let f = File::open(&path).map_err(|e| Error::storage(&path, e))?;
            let dropped = corpus
                .read(BufReader::new(f))
                .map_err(|e| Error::storage(&path, e))?;
            if dropped > 0 {
                log::warn!("{}: dropped {dropped} tokens without a word/tag pair", path.display());
            }
        }
        log::info!(
            "corpus {name}: {} records, {} tokens, {} tags",
            corpus.len(),
            corpus.total_tokens(),
            corpus.tags.len()
        );
        Ok(corpus)
    }
}
