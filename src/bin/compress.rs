use std::{fs::{self, File}, io::{BufWriter, Write}, path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use huffman_rust::{encode, properties::Properties, report::CompressionReport, CodeTable, CodeTableStore, FileStore, TableFormat, Tokenizer};

#[derive(Parser, Debug)]
#[command(about = "Encode a text file with a stored Huffman code table")]
struct Args {
    /// The file to compress
    source_name: PathBuf,
    /// Where to write the encoded bits
    dest_name: PathBuf,
    /// The code table (defaults to the `table` property)
    #[arg(short, long)]
    table: Option<PathBuf>,
    #[arg(long, value_enum)]
    tokenizer: Option<Tokenizer>,
    #[arg(long, value_enum)]
    format: Option<TableFormat>,
    /// A .properties file with default settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Write the bits packed into bytes instead of as '0'/'1' text
    #[arg(short, long, default_value_t = false)]
    packed: bool,
    /// Print the summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
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
    let table: CodeTable<String> = FileStore::new(&table_path, props.format)
        .load()
        .with_context(|| format!("Failed loading the code table from {}", table_path.display()))?;

    let text = fs::read_to_string(&args.source_name)
        .with_context(|| format!("Could not read {}", args.source_name.display()))?;
    let tokens = props.tokenizer.tokenize(&text);

    let comp_time = Instant::now();
    let bits = encode(&tokens, &table)?;
    let comp_time = comp_time.elapsed().as_nanos() as u64;

    let mut writer = BufWriter::new(File::create(&args.dest_name)
        .with_context(|| format!("Could not create {}", args.dest_name.display()))?);
    if args.packed {
        bincode::serialize_into(&mut writer, &bits.pack())?;
    } else {
        writer.write_all(bits.to_string().as_bytes())?;
    }
    writer.flush()?;
    info!("Wrote {} bits to {}", bits.len(), args.dest_name.display());

    let distinct = tokens.iter().collect::<std::collections::HashSet<_>>().len();
    let report = CompressionReport::new(tokens.len(), distinct, text.len() * 8, bits.len(), comp_time);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    Ok(())
}
