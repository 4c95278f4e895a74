use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use postagger::{tokenize, GreedyTagger, Tagger};

mod common;

fn tag_benchmark(c: &mut Criterion) {
    let model = postagger::train(&common::synthetic(2000));
    let tagger = GreedyTagger::new(&model);
    let sentence = "El3 gato5 corre7 en11 la13 casa17 grande19 y23 el29 perro31 duerme37 .41";
    c.bench_function("tokenize", |b| b.iter(|| tokenize(black_box(sentence))));
    c.bench_function("tag", |b| {
        b.iter(|| {
            let mut tokens = tokenize(black_box(sentence));
            tagger.annotate(&mut tokens);
            tokens
        })
    });
}

criterion_group! {
    name = benchmarks;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = tag_benchmark
}

criterion_main!(benchmarks);
