use std::{fs, path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use huffman_rust::{accumulate_frequencies, build_code, properties::Properties, CodeTableStore, FileStore, FrequencyTable, TableFormat, Tokenizer};

#[derive(Parser, Debug)]
#[command(about = "Build a Huffman code table from one or more corpus files")]
struct Args {
    /// Corpus files whose symbols are counted together
    #[arg(required = true)]
    corpus: Vec<PathBuf>,
    /// Where to store the code table (defaults to the `table` property)
    #[arg(short, long)]
    table: Option<PathBuf>,
    /// How the corpus is cut into symbols
    #[arg(long, value_enum)]
    tokenizer: Option<Tokenizer>,
    /// The code table file format
    #[arg(long, value_enum)]
    format: Option<TableFormat>,
    /// A .properties file with default settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Store canonical codewords (same code lengths)
    #[arg(long, default_value_t = false)]
    canonical: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut props = match &args.config {
        Some(config) => Properties::load(config).with_context(|| format!("Failed loading {}", config.display()))?,
        None => Properties::default(),
    };
    props.apply_overrides(args.tokenizer, args.format, args.table, None);

    let table_path = props.table.clone().context("No code table path given (use --table or the `table` property)")?;

    let mut freq = FrequencyTable::new();
    for path in args.corpus.iter() {
        let text = fs::read_to_string(path).with_context(|| format!("Could not read {}", path.display()))?;
        let tokens = props.tokenizer.tokenize(&text);
        info!("Counted {} symbols from {}", tokens.len(), path.display());
        accumulate_frequencies(&mut freq, tokens);
    }

    let build_time = Instant::now();
    let mut table = build_code(&freq).context("The corpus has no symbols")?;
    if args.canonical {
        table = table.to_canonical();
    }
    let build_time = build_time.elapsed().as_nanos();

    info!("Built {} codes (longest {} bits) in {}ns", table.len(), table.max_code_len(), build_time);
    info!("The training corpus encodes to {} bits", table.weighted_length(&freq));

    FileStore::new(&table_path, props.format)
        .save(&table)
        .with_context(|| format!("Failed storing the code table to {}", table_path.display()))?;
    info!("Stored the code table to {}", table_path.display());

    Ok(())
}
