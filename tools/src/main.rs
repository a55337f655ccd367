use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use libarpabet::{load_kana_table_file, reference_kana_table, PronunciationDictionary};
use tracing_subscriber::EnvFilter;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// Sorted JSON object, usable as a words.json override file
    Json,
    /// Compact bincode artifact
    Bincode,
}

/// Build a word -> katakana dictionary from a CMU-style pronouncing lexicon.
#[derive(Parser)]
#[command(name = "build_pronunciations")]
struct Args {
    /// ARPAbet kana table CSV; the bundled reference table when omitted
    #[arg(long)]
    kana_table: Option<PathBuf>,

    /// Pronouncing lexicon (e.g. cmudict.dict)
    #[arg(long)]
    lexicon: PathBuf,

    /// Output file
    #[arg(long)]
    out: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let table = match &args.kana_table {
        Some(path) => load_kana_table_file(path)
            .with_context(|| format!("loading kana table {}", path.display()))?,
        None => reference_kana_table().context("parsing bundled kana table")?,
    };

    let dict = PronunciationDictionary::load_file(&args.lexicon, &table)
        .with_context(|| format!("building dictionary from {}", args.lexicon.display()))?;

    match args.format {
        Format::Json => dict.save_json(&args.out),
        Format::Bincode => dict.save_bincode(&args.out),
    }
    .with_context(|| format!("writing {}", args.out.display()))?;

    println!("Wrote {} words to {}", dict.len(), args.out.display());
    Ok(())
}
