use std::fmt::Display;

use super::{model::Model, START};

/// A token of a sentence being tagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub order: usize,
    pub raw: String,
    /// `None` until tagged, and stays `None` for words the model never saw.
    pub tag: Option<String>,
}

impl Token {
    pub fn new(order: usize, raw: impl Into<String>) -> Self {
        Self { order, raw: raw.into(), tag: None }
    }

    pub fn tag(&self) -> &str {
        self.tag.as_deref().unwrap_or_default()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.raw, self.tag())
    }
}

pub trait Tagger {
    /// Tags the sentence in place, in `order` order.
    fn annotate(&self, sentence: &mut [Token]);

    fn tag<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<Token>
    where
        Self: Sized,
    {
        let mut sentence: Vec<Token> = tokens.iter().enumerate().map(|(i, s)| Token::new(i, s.as_ref())).collect();
        self.annotate(&mut sentence);
        sentence
    }
}

/// Left-to-right tagger keeping only the last assigned tag as state.
///
/// Every token gets the best scoring tag given the current tag, without
/// look-ahead or revision. A token with no positive score is left untagged
/// and the current tag carries over to the next token. Ties go to the
/// lexicographically smallest tag.
#[derive(Debug, Clone, Copy)]
pub struct GreedyTagger<'a> {
    model: &'a Model,
}

impl<'a> GreedyTagger<'a> {
    pub fn new(model: &'a Model) -> Self {
        Self { model }
    }

    /// Best tag for `raw` after `current`, if any scores above zero.
    pub fn step(&self, raw: &str, current: &str) -> Option<&'a str> {
        let model = self.model;
        let mut best = None;
        let mut max_score = 0.0;
        for (tag, score) in model.probs(&raw.to_lowercase(), current) {
            if score > max_score {
                max_score = score;
                best = Some(tag);
            }
        }
        best
    }
}

impl<'a> Tagger for GreedyTagger<'a> {
    fn annotate(&self, sentence: &mut [Token]) {
        sentence.sort_by_key(|t| t.order);
        let mut current = START;
        for token in sentence.iter_mut() {
            token.tag = self.step(&token.raw, current).map(|tag| {
                current = tag;
                tag.to_string()
            });
        }
    }
}
