use std::{collections::HashMap, time::Instant};

use super::{link::LinkTable, model::Model, END, START};
use crate::{
    corpus::{Corpus, TrainingRecord},
    quark::Quark,
};

/// Accumulates bigram counts record by record.
///
/// Each record contributes `<s> -> t1 -> ... -> tn -> </s>` transitions
/// and one `tag -> word` emission per token. Nothing is normalized until
/// [`Trainer::finish`].
#[derive(Debug, Default)]
pub struct Trainer {
    transitions: LinkTable,
    emissions: LinkTable,
    /// Times each tag appeared as a predecessor, boundary markers included.
    context: HashMap<String, u64>,
    tags: Quark,
    num_records: usize,
}

impl Trainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: &TrainingRecord) {
        if record.is_empty() {
            return;
        }
        let mut previous = START;
        *self.context.entry(START.to_string()).or_default() += 1;

        for token in record.sorted() {
            self.tags.find_or_insert(&token.tag);
            self.transitions.add(previous, &token.tag);
            self.emissions.add(&token.tag, &token.word.to_lowercase());
            *self.context.entry(token.tag.clone()).or_default() += 1;
            previous = &token.tag;
        }

        self.transitions.add(previous, END);
        *self.context.entry(END.to_string()).or_default() += 1;
        self.num_records += 1;
    }

    /// Normalizes the counts into maximum-likelihood weights.
    pub fn finish(mut self, name: impl Into<String>) -> Model {
        self.transitions.normalize(&self.context);
        self.emissions.normalize(&self.context);
        Model::new(name, self.tags, self.transitions, self.emissions)
    }
}

/// Trains a model named after the corpus.
pub fn train(corpus: &Corpus) -> Model {
    let begin = Instant::now();
    log::info!("training {} (records: {}, tags: {})", corpus.name, corpus.len(), corpus.tags.len());
    let mut trainer = Trainer::new();
    for record in &corpus.records {
        trainer.append(record);
    }
    let mut model = trainer.finish(corpus.name.as_str());
    // The corpus already holds every tag in discovery order.
    model.set_tags(corpus.tags.clone());
    log::info!(
        "trained {} (transitions: {}, emissions: {}), time cost: {:?}",
        model.name(),
        model.transitions().len(),
        model.emissions().len(),
        begin.elapsed()
    );
    model
}
