use std::{fs::{self, File}, io::BufReader, path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use huffman_rust::{properties::Properties, BitString, CodeTable, CodeTableStore, Decoder, FileStore, PackedBits, TableFormat, Tokenizer};

#[derive(Parser, Debug)]
#[command(about = "Decode bits written by `compress` back into text")]
struct Args {
    /// The encoded file
    source_name: PathBuf,
    /// Where to write the decoded text
    dest_name: PathBuf,
    /// The code table (defaults to the `table` property)
    #[arg(short, long)]
    table: Option<PathBuf>,
    /// Only used for its default separator
    #[arg(long, value_enum)]
    tokenizer: Option<Tokenizer>,
    #[arg(long, value_enum)]
    format: Option<TableFormat>,
    /// Text written between decoded symbols
    #[arg(short, long)]
    separator: Option<String>,
    /// A .properties file with default settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// The input holds packed bytes instead of '0'/'1' text
    #[arg(short, long, default_value_t = false)]
    packed: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut props = match &args.config {
        Some(config) => Properties::load(config).with_context(|| format!("Failed loading {}", config.display()))?,
        None => Properties::default(),
    };
    props.apply_overrides(args.tokenizer, args.format, args.table, args.separator);

    let table_path = props.table.clone().context("No code table path given (use --table or the `table` property)")?;
    let table: CodeTable<String> = FileStore::new(&table_path, props.format)
        .load()
        .with_context(|| format!("Failed loading the code table from {}", table_path.display()))?;

    let bits: BitString = if args.packed {
        let file = File::open(&args.source_name)
            .with_context(|| format!("Could not open {}", args.source_name.display()))?;
        let packed: PackedBits = bincode::deserialize_from(BufReader::new(file))?;
        packed.unpack()?
    } else {
        fs::read_to_string(&args.source_name)
            .with_context(|| format!("Could not read {}", args.source_name.display()))?
            .trim_end()
            .parse::<BitString>()
            .with_context(|| format!("{} is not a string of bits", args.source_name.display()))?
    };

    let decomp_time = Instant::now();
    let text = Decoder::new(&table).decode_with_separator(&bits, props.separator())?;
    let decomp_time = decomp_time.elapsed().as_nanos();

    fs::write(&args.dest_name, &text).with_context(|| format!("Could not write {}", args.dest_name.display()))?;
    info!("Decoded {} bits into {} bytes in {}ns", bits.len(), text.len(), decomp_time);

    Ok(())
}
