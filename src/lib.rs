//! Part-of-speech tagging with a bigram hidden Markov model.
//!
//! A model is trained from a corpus of `word/tag` sentences, saved as two
//! tab-separated tables and used to tag new text one token at a time.
//!
//! ```no_run
//! use postagger::{Config, Postagger};
//!
//! let tagger = Postagger::new(Config::default());
//! let model = tagger.train("ancora")?;
//! for token in tagger.tag(&model, &["El", "gato", "corre", "."]) {
//!     println!("{token}");
//! }
//! # Ok::<(), postagger::Error>(())
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod evaluation;
pub mod hmm;
pub mod quark;
pub mod tokenize;

pub use config::Config;
pub use corpus::{Corpus, CorpusSource, DirCorpus, LabeledToken, TrainingRecord};
pub use error::{Error, Result};
pub use evaluation::{Estimation, Evaluation};
pub use hmm::{
    link::{Link, LinkTable},
    model::Model,
    store::ModelStore,
    tagger::{GreedyTagger, Tagger, Token},
    trainer::{train, Trainer},
    END, START,
};
pub use tokenize::tokenize;

/// Ties a corpus source and a model store together.
#[derive(Debug, Clone)]
pub struct Postagger<S = DirCorpus> {
    corpora: S,
    store: ModelStore,
}

impl Postagger<DirCorpus> {
    pub fn new(config: Config) -> Self {
        Self::with_source(DirCorpus::new(config.corpus_dir), ModelStore::new(config.model_dir))
    }
}

impl<S: CorpusSource> Postagger<S> {
    pub fn with_source(corpora: S, store: ModelStore) -> Self {
        Self { corpora, store }
    }

    pub fn store(&self) -> &ModelStore {
        &self.store
    }

    /// Trains on the named corpus and saves the model under the same name.
    pub fn train(&self, corpus: &str) -> Result<Model> {
        let corpus = self.corpora.corpus(corpus)?;
        let model = train(&corpus);
        self.store.save(&model)?;
        Ok(model)
    }

    pub fn load(&self, name: &str) -> Result<Model> {
        self.store.load(name)
    }

    pub fn try_load(&self, name: &str) -> Result<Option<Model>> {
        self.store.try_load(name)
    }

    /// Loads the named model, training it from the corpus of the same name
    /// only when no stored model exists.
    pub fn load_or_train(&self, name: &str) -> Result<Model> {
        match self.try_load(name)? {
            Some(model) => Ok(model),
            None => {
                log::info!("model {name} not found, training it");
                self.train(name)
            }
        }
    }

    pub fn tag<T: AsRef<str>>(&self, model: &Model, tokens: &[T]) -> Vec<Token> {
        GreedyTagger::new(model).tag(tokens)
    }

    /// Tokenizes raw text and tags it with the named model.
    pub fn tag_sentence(&self, raw: &str, model: &str) -> Result<Vec<Token>> {
        let model = self.load_or_train(model)?;
        let mut sentence = tokenize(raw);
        GreedyTagger::new(&model).annotate(&mut sentence);
        Ok(sentence)
    }

    /// Tags every record of the named corpus and scores the result
    /// against its gold tags.
    pub fn evaluate(&self, model: &Model, corpus: &str) -> Result<Evaluation> {
        let corpus = self.corpora.corpus(corpus)?;
        Ok(evaluate(model, &corpus))
    }
}

pub fn evaluate(model: &Model, corpus: &Corpus) -> Evaluation {
    let tagger = GreedyTagger::new(model);
    let mut evaluation = Evaluation::default();
    for record in &corpus.records {
        let gold = record.sorted();
        let words: Vec<&str> = gold.iter().map(|t| t.word.as_str()).collect();
        let tags: Vec<&str> = gold.iter().map(|t| t.tag.as_str()).collect();
        let tagged = tagger.tag(&words);
        let prediction: Vec<Option<&str>> = tagged.iter().map(|t| t.tag.as_deref()).collect();
        evaluation.accumulate(&tags, &prediction);
    }
    evaluation
}
