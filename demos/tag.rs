use std::{
    io::{stdin, BufRead},
    path::PathBuf,
};

use clap::Parser;
use postagger::{tokenize, Evaluation, GreedyTagger, ModelStore, Tagger, TrainingRecord};

/// Tag the sentences read from STDIN, one per line, with a model (MODEL)
/// Evaluate the model on `word/tag` lines instead (with -t option)
#[derive(Debug, Parser)]
struct Argv {
    /// read a model from a directory (MODEL)
    #[arg(short, long, required = true, value_name = "MODEL")]
    model: PathBuf,
    /// report the performance of the model on tagged input
    #[arg(short = 't', long = "test")]
    evaluate: bool,
    /// suppress tagging results (useful for test mode)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> postagger::Result<()> {
    env_logger::init();
    let argv = Argv::parse();
    log::info!("{:?}", argv);
    let model = ModelStore::load_from(&argv.model)?;
    let tagger = GreedyTagger::new(&model);
    let mut evaluation = Evaluation::default();

    for line in stdin().lock().lines() {
        let line = line.map_err(|e| postagger::Error::Storage { path: "<stdin>".into(), source: e })?;
        if line.trim().is_empty() {
            continue;
        }
        let tokens = if argv.evaluate {
            let (record, _) = TrainingRecord::parse(&line);
            let gold = record.sorted();
            let words: Vec<&str> = gold.iter().map(|t| t.word.as_str()).collect();
            let tokens = tagger.tag(&words);
            let reference: Vec<&str> = gold.iter().map(|t| t.tag.as_str()).collect();
            let prediction: Vec<Option<&str>> = tokens.iter().map(|t| t.tag.as_deref()).collect();
            evaluation.accumulate(&reference, &prediction);
            tokens
        } else {
            let mut tokens = tokenize(&line);
            tagger.annotate(&mut tokens);
            tokens
        };
        if !argv.quiet {
            for token in &tokens {
                println!("{token}");
            }
            println!();
        }
    }

    if argv.evaluate {
        evaluation.evaluate();
        println!("{}", evaluation);
    }
    Ok(())
}
