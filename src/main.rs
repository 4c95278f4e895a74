use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use postagger::{Config, Postagger};

/// Train bigram part-of-speech models and tag text with them
#[derive(Debug, Parser)]
#[command(version)]
#[command(propagate_version = true)]
struct Argv {
    /// read settings from a JSON file (FILE)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// directory holding one sub-directory per corpus
    #[arg(long, value_name = "DIR")]
    corpus_dir: Option<PathBuf>,
    /// directory holding one sub-directory per trained model
    #[arg(long, value_name = "DIR")]
    model_dir: Option<PathBuf>,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// train a model from the corpus (CORPUS) and save it under the same name
    Train { corpus: String },
    /// tag the text (TEXT) with a model, training it first if it is missing
    Tag {
        model: String,
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// output the model (MODEL) as JSON
    Dump { model: String },
    /// report the accuracy of a model (MODEL) on a tagged corpus (CORPUS)
    Eval { model: String, corpus: String },
}

fn config(argv: &Argv) -> postagger::Result<Config> {
    let mut config = match &argv.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(dir) = &argv.corpus_dir {
        config.corpus_dir = dir.clone();
    }
    if let Some(dir) = &argv.model_dir {
        config.model_dir = dir.clone();
    }
    Ok(config)
}

fn run(argv: Argv) -> postagger::Result<()> {
    let config = config(&argv)?;
    log::debug!("{:?}", config);
    let tagger = Postagger::new(config);
    match argv.command {
        Command::Train { corpus } => {
            let model = tagger.train(&corpus)?;
            log::info!("write model to {}", tagger.store().path(model.name()).display());
        }
        Command::Tag { model, text } => {
            for token in tagger.tag_sentence(&text.join(" "), &model)? {
                println!("{token}");
            }
        }
        Command::Dump { model } => {
            let model = tagger.load(&model)?;
            let json = serde_json::to_string_pretty(&model).map_err(|e| postagger::Error::InvalidModel(e.to_string()))?;
            println!("{json}");
        }
        Command::Eval { model, corpus } => {
            let model = tagger.load(&model)?;
            let mut evaluation = tagger.evaluate(&model, &corpus)?;
            evaluation.evaluate();
            println!("{evaluation}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let argv = Argv::parse();
    let level = match argv.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::builder().filter_level(level).parse_default_env().init();
    log::debug!("argv: {:?}", argv);
    match run(argv) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
