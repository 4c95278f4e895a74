use std::{collections::HashMap, fs, path::PathBuf};

use postagger::{CorpusSource, DirCorpus, LinkTable, ModelStore, END, START};

fn corpora() -> DirCorpus {
    DirCorpus::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("corpus"))
}

fn sums(links: &LinkTable) -> HashMap<&str, f64> {
    let mut sums = HashMap::new();
    for link in links {
        *sums.entry(link.previous.as_str()).or_default() += link.weight;
    }
    sums
}

#[test]
fn toy_weights() {
    let corpus = corpora().corpus("toy").expect("failed to read corpus");
    let model = postagger::train(&corpus);
    let t = model.transitions();
    for (p, c) in [(START, "DET"), ("DET", "NOUN"), ("NOUN", "VERB"), ("VERB", "PUNCT"), ("PUNCT", END)] {
        assert_eq!(t.get(p, c).map(|l| l.weight), Some(1.0), "{p} -> {c}");
    }
    let e = model.emissions();
    assert_eq!(e.get("NOUN", "gato").unwrap().weight, 0.5);
    assert_eq!(e.get("NOUN", "perro").unwrap().weight, 0.5);
    assert_eq!(e.get("VERB", "corre").unwrap().weight, 0.5);
    assert_eq!(e.get("VERB", "duerme").unwrap().weight, 0.5);
    assert_eq!(e.get("DET", "el").unwrap().weight, 1.0);
}

#[test]
fn weights_are_normalized() {
    let corpus = corpora().corpus("sample").expect("failed to read corpus");
    assert_eq!(corpus.len(), 9);
    let model = postagger::train(&corpus);
    for (tag, sum) in sums(model.transitions()) {
        assert!((sum - 1.0).abs() < 1e-9, "transitions from {tag} sum to {sum}");
    }
    for (tag, sum) in sums(model.emissions()) {
        assert!((sum - 1.0).abs() < 1e-9, "emissions of {tag} sum to {sum}");
    }
    assert!(model.transitions().iter().all(|l| l.current != START && l.previous != END));
}

#[test]
fn tag_set_matches_corpus() {
    let corpus = corpora().corpus("sample").expect("failed to read corpus");
    let model = postagger::train(&corpus);
    let tags: Vec<_> = model.tags().iter().collect();
    assert_eq!(tags[..4], ["DET", "NOUN", "AUX", "VERB"]);
    assert_eq!(tags.len(), 12);
}

#[test]
fn training_is_deterministic() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let source = corpora();
    for run in ["a", "b"] {
        let model = postagger::train(&source.corpus("sample").unwrap());
        ModelStore::save_to(&dir.path().join(run), &model).expect("failed to save");
    }
    for file in ["transitions", "emissions"] {
        let a = fs::read(dir.path().join("a").join(file)).unwrap();
        let b = fs::read(dir.path().join("b").join(file)).unwrap();
        assert!(!a.is_empty());
        assert_eq!(a, b, "{file} differs");
    }
}
