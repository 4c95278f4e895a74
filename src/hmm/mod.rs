//! Bigram hidden Markov model: training, storage, queries and greedy decoding.

pub mod link;
pub mod model;
pub mod store;
pub mod tagger;
pub mod trainer;

/// Synthetic tag opening every training sentence.
pub const START: &str = "<s>";
/// Synthetic tag closing every training sentence.
pub const END: &str = "</s>";
