use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::link::LinkTable;
use crate::quark::Quark;

/// Transition and emission tables of a trained bigram model.
///
/// Immutable once built; share it by reference between taggers.
#[derive(Debug, Clone, Serialize)]
pub struct Model {
    name: String,
    tags: Quark,
    transitions: LinkTable,
    emissions: LinkTable,
    /// Emission positions keyed by word.
    #[serde(skip)]
    words: HashMap<String, Vec<usize>>,
}

impl Model {
    pub fn new(name: impl Into<String>, tags: Quark, transitions: LinkTable, emissions: LinkTable) -> Self {
        let mut words: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, link) in emissions.iter().enumerate() {
            words.entry(link.current.clone()).or_default().push(i);
        }
        Self { name: name.into(), tags, transitions, emissions, words }
    }

    /// Builds a model from persisted links. The tag set is recovered from
    /// the emissions, in the order the tags first appear.
    pub fn from_links(name: impl Into<String>, transitions: LinkTable, emissions: LinkTable) -> Self {
        let tags = emissions.iter().map(|l| l.previous.as_str()).collect();
        Self::new(name, tags, transitions, emissions)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tags(&self) -> &Quark {
        &self.tags
    }

    pub(crate) fn set_tags(&mut self, tags: Quark) {
        self.tags = tags;
    }

    pub fn transitions(&self) -> &LinkTable {
        &self.transitions
    }

    pub fn emissions(&self) -> &LinkTable {
        &self.emissions
    }

    /// Scores every tag that can emit `word` after `previous`.
    ///
    /// The score is the emission weight plus the weight of the
    /// `previous -> tag` transition, if one exists. It ranks candidates and
    /// is not itself a probability. `word` is matched exactly, so callers
    /// lower-case it first. An unknown word yields an empty map.
    pub fn probs(&self, word: &str, previous: &str) -> BTreeMap<&str, f64> {
        let Some(ids) = self.words.get(word) else {
            return BTreeMap::new();
        };
        ids.iter()
            .map(|&i| {
                let emission = &self.emissions.as_slice()[i];
                let tag = emission.previous.as_str();
                let transition = self.transitions.get(previous, tag).map(|l| l.weight).unwrap_or_default();
                (tag, emission.weight + transition)
            })
            .collect()
    }
}

impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        fn same(a: &LinkTable, b: &LinkTable) -> bool {
            a.len() == b.len()
                && a.iter().all(|l| b.get(&l.previous, &l.current).is_some_and(|o| o.weight == l.weight))
        }
        self.name == other.name
            && same(&self.transitions, &other.transitions)
            && same(&self.emissions, &other.emissions)
    }
}
