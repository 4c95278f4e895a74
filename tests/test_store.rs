use std::{collections::HashSet, fs, path::PathBuf};

use postagger::{DirCorpus, Error, LinkTable, ModelStore, Postagger};

fn postagger(models: &std::path::Path) -> Postagger {
    let corpora = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("corpus");
    Postagger::with_source(DirCorpus::new(corpora), ModelStore::new(models))
}

fn triples(links: &LinkTable) -> HashSet<(String, String, u64)> {
    links.iter().map(|l| (l.previous.clone(), l.current.clone(), l.weight.to_bits())).collect()
}

#[test]
fn round_trip() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let tagger = postagger(dir.path());
    let trained = tagger.train("sample").expect("failed to train");
    assert!(dir.path().join("sample").join("transitions").is_file());
    assert!(dir.path().join("sample").join("emissions").is_file());

    let loaded = tagger.load("sample").expect("failed to load");
    assert_eq!(loaded.name(), "sample");
    assert_eq!(triples(loaded.transitions()), triples(trained.transitions()));
    assert_eq!(triples(loaded.emissions()), triples(trained.emissions()));
    assert_eq!(loaded, trained);

    let tags: HashSet<_> = loaded.tags().iter().collect();
    assert_eq!(tags, trained.tags().iter().collect::<HashSet<_>>());
}

#[test]
fn not_found() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let tagger = postagger(dir.path());
    assert!(matches!(tagger.load("sample"), Err(Error::ModelNotFound(_))));
    assert!(matches!(tagger.train("missing"), Err(Error::CorpusNotFound(_))));
    assert!(matches!(tagger.load_or_train("missing"), Err(Error::CorpusNotFound(_))));
    assert!(tagger.try_load("sample").unwrap().is_none());
}

#[test]
fn load_or_train_prefers_stored_model() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let tagger = postagger(dir.path());
    let trained = tagger.load_or_train("toy").expect("failed to train");
    assert!(tagger.store().exists("toy"));

    // A stored model wins over the corpus, even a different one.
    fs::write(dir.path().join("toy").join("emissions"), "X\tel\t1\n").unwrap();
    let loaded = tagger.load_or_train("toy").expect("failed to load");
    assert_ne!(loaded, trained);
    assert_eq!(loaded.emissions().len(), 1);
}

#[test]
fn corrupt_model_is_not_retrained() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let tagger = postagger(dir.path());
    tagger.train("toy").expect("failed to train");
    fs::write(dir.path().join("toy").join("transitions"), "<s>\tDET\tone\n").unwrap();
    match tagger.load_or_train("toy") {
        Err(Error::InvalidWeight { line, .. }) => assert_eq!(line, 1),
        other => panic!("unexpected: {:?}", other.map(|m| m.name().to_string())),
    }
    fs::write(dir.path().join("toy").join("transitions"), "<s>\tDET\n").unwrap();
    assert!(matches!(tagger.load("toy"), Err(Error::InvalidModel(_))));
}
