//! Print entries of a dictionary artifact written by `build_pronunciations`.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use libarpabet::PronunciationDictionary;

#[derive(Parser)]
#[command(name = "show_pronunciation")]
struct Args {
    /// Bincode dictionary file
    dict: PathBuf,

    /// Words to show; prints the entry count when omitted
    words: Vec<String>,

    /// Print as JSON lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let dict = PronunciationDictionary::load_bincode(&args.dict)
        .with_context(|| format!("reading {}", args.dict.display()))?;

    if args.words.is_empty() {
        println!("{} words", dict.len());
        return Ok(());
    }

    for word in &args.words {
        let kana = dict.get(&word.to_lowercase());
        if args.json {
            println!("{}", serde_json::json!({ "word": word, "kana": kana }));
        } else {
            println!("{}\t{}", word, kana.unwrap_or("(not found)"));
        }
    }
    Ok(())
}
