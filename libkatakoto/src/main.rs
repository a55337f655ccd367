use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use libkatakoto::{CachedTranslator, KatakotoConfig, KatakotoTranslator, Translator, WordOverrides};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "katakoto")]
#[command(about = "Rewrite English words in text as katakana for speech synthesis")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Extra word override files (JSON), applied after the data directories
    #[arg(short, long = "words")]
    words: Vec<PathBuf>,

    /// Text to translate; reads stdin line by line when omitted
    text: Vec<String>,
}

fn build_translator(cli: &Cli) -> Result<CachedTranslator<KatakotoTranslator>> {
    let config = match &cli.config {
        Some(path) => KatakotoConfig::load_toml(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => KatakotoConfig::default(),
    };

    let mut words = WordOverrides::discover(&config.base, &config.word_file);
    for path in &cli.words {
        let extra = WordOverrides::load_file(path)
            .with_context(|| format!("loading word overrides {}", path.display()))?;
        words.extend(extra);
    }
    tracing::info!(entries = words.len(), "word overrides ready");

    Ok(CachedTranslator::new(
        KatakotoTranslator::new(words),
        config.base.max_cache_size,
    ))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let translator = build_translator(&cli)?;

    if !cli.text.is_empty() {
        println!("{}", translator.translate(&cli.text.join(" ")));
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        writeln!(stdout, "{}", translator.translate(&line))?;
    }
    Ok(())
}
