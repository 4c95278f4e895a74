use std::path::PathBuf;

use postagger::{CorpusSource, DirCorpus, GreedyTagger, ModelStore, Postagger, Tagger, START};

fn corpora() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("corpus")
}

fn pairs(tokens: &[postagger::Token]) -> Vec<(&str, &str)> {
    tokens.iter().map(|t| (t.raw.as_str(), t.tag())).collect()
}

#[test]
fn tag_sentence() {
    let _ = env_logger::builder().is_test(true).filter_level(log::LevelFilter::Debug).try_init();
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let tagger = Postagger::with_source(DirCorpus::new(corpora()), ModelStore::new(dir.path()));
    let tokens = tagger.tag_sentence("El gato corre .", "toy").expect("failed to tag");
    assert_eq!(pairs(&tokens), vec![("El", "DET"), ("gato", "NOUN"), ("corre", "VERB"), (".", "PUNCT")]);

    // the second call goes through the stored model
    let tokens = tagger.tag_sentence("El perro duerme.", "toy").expect("failed to tag");
    assert_eq!(pairs(&tokens), vec![("El", "DET"), ("perro", "NOUN"), ("duerme", "VERB"), (".", "PUNCT")]);
}

#[test]
fn unknown_word_is_skipped() {
    let model = postagger::train(&DirCorpus::new(corpora()).corpus("toy").unwrap());
    assert!(model.probs("perico", START).is_empty());
    assert!(model.probs("perico", "DET").is_empty());

    let tokens = GreedyTagger::new(&model).tag(&["El", "perico", "corre", "."]);
    assert_eq!(tokens[1].tag, None);
    assert_eq!(pairs(&tokens), vec![("El", "DET"), ("perico", ""), ("corre", "VERB"), (".", "PUNCT")]);
}

#[test]
fn state_advances_on_known_words() {
    let model = postagger::train(&DirCorpus::new(corpora()).corpus("sample").unwrap());
    let tagger = GreedyTagger::new(&model);
    let words = ["la", "zzz", "casa", "es", "grande"];
    let mut current = START;
    for word in words {
        match tagger.step(word, current) {
            Some(tag) => {
                assert!(!model.probs(word, current).is_empty());
                current = tag;
            }
            None => assert!(model.probs(word, current).is_empty(), "{word}"),
        }
    }
    assert_eq!(current, "ADJ");
    let tags: Vec<_> = tagger.tag(&words).iter().map(|t| t.tag.clone()).collect();
    assert_eq!(tags[1], None);
    assert_eq!(tags[2].as_deref(), Some("NOUN"));
}

#[test]
fn evaluate_on_training_data() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let tagger = Postagger::with_source(DirCorpus::new(corpora()), ModelStore::new(dir.path()));
    let model = tagger.train("sample").unwrap();
    let mut evaluation = tagger.evaluate(&model, "sample").unwrap();
    let est = evaluation.evaluate();
    assert_eq!(est.item_accuracy, 1.0);
    assert_eq!(est.inst_accuracy, 1.0);
    assert!(evaluation.to_string().contains("Item accuracy: 58/58"));
}
