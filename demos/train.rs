use std::{fs::File, io::BufReader, path::PathBuf};

use clap::Parser;
use postagger::{Corpus, ModelStore};

/// Train a model from `word/tag` files and write it to a directory (MODEL)
#[derive(Debug, Parser)]
#[command(version)]
struct Argv {
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// write the model into this directory (MODEL)
    #[arg(short, long, value_name = "MODEL")]
    model: PathBuf,
    #[arg(required = true)]
    datasets: Vec<PathBuf>,
}

fn main() -> postagger::Result<()> {
    let argv = Argv::parse();
    env_logger::builder()
        .filter_level(if argv.verbose > 0 { log::LevelFilter::Debug } else { log::LevelFilter::Info })
        .init();
    log::info!("argv: {:?}", argv);

    let name = argv.model.file_name().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let mut corpus = Corpus::new(name);
    for fpath in &argv.datasets {
        let f = File::open(fpath).map_err(|e| postagger::Error::Storage { path: fpath.clone(), source: e })?;
        let dropped = corpus
            .read(BufReader::new(f))
            .map_err(|e| postagger::Error::Storage { path: fpath.clone(), source: e })?;
        if dropped > 0 {
            log::warn!("{}: dropped {dropped} tokens", fpath.display());
        }
    }
    let model = postagger::train(&corpus);
    ModelStore::save_to(&argv.model, &model)?;
    log::info!("write model to {}", argv.model.display());
    Ok(())
}
