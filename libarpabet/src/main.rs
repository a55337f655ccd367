use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use libarpabet::{
    try_match_tokens, ArpabetConfig, CachedTranslator, DictionaryTranslator, KanaTable,
    PronunciationDictionary, Translator,
};
use libkatakoto::KatakotoTranslator;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "arpabet")]
#[command(about = "ARPAbet to katakana conversion backed by a pronouncing dictionary")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Kana table CSV (overrides the data directory lookup)
    #[arg(long, global = true)]
    kana_table: Option<PathBuf>,

    /// Pronouncing lexicon (overrides the data directory lookup)
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a phoneme sequence, e.g. `K AE1 T`
    Parse {
        #[arg(required = true)]
        phonemes: Vec<String>,
    },
    /// Look words up in the dictionary
    Lookup {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Translate text; reads stdin line by line when omitted
    Translate { text: Vec<String> },
}

struct Runtime {
    config: ArpabetConfig,
    table: KanaTable,
}

impl Runtime {
    fn new(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => ArpabetConfig::load_toml(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => ArpabetConfig::default(),
        };
        let table = match &cli.kana_table {
            Some(path) => libarpabet::load_kana_table_file(path)
                .with_context(|| format!("loading kana table {}", path.display()))?,
            None => config.load_kana_table().context("loading kana table")?,
        };
        Ok(Self { config, table })
    }

    fn dictionary(&self, cli: &Cli) -> Result<PronunciationDictionary> {
        let dict = match &cli.lexicon {
            Some(path) => PronunciationDictionary::load_file(path, &self.table)
                .with_context(|| format!("loading lexicon {}", path.display()))?,
            None => self
                .config
                .load_dictionary(&self.table)
                .context("loading lexicon")?,
        };
        Ok(dict)
    }

    fn translator(&self, cli: &Cli) -> Result<CachedTranslator<DictionaryTranslator>> {
        let mut translator = DictionaryTranslator::new(Arc::new(self.dictionary(cli)?));
        if self.config.fallback_to_rules {
            translator = translator.with_fallback(KatakotoTranslator::default());
        }
        Ok(CachedTranslator::new(translator, self.config.base.max_cache_size))
    }
}

fn handle_parse(runtime: &Runtime, phonemes: &[String]) -> Result<()> {
    let tokens = phonemes.iter().flat_map(|p| p.split_whitespace());
    match try_match_tokens(&runtime.table, tokens)? {
        Some(kana) => println!("{kana}"),
        None => anyhow::bail!("no kana for phonemes: {}", phonemes.join(" ")),
    }
    Ok(())
}

fn handle_lookup(runtime: &Runtime, cli: &Cli, words: &[String]) -> Result<()> {
    let dict = runtime.dictionary(cli)?;
    for word in words {
        match dict.get(&word.to_lowercase()) {
            Some(kana) => println!("{word}\t{kana}"),
            None => println!("{word}\t-"),
        }
    }
    Ok(())
}

fn handle_translate(runtime: &Runtime, cli: &Cli, text: &[String]) -> Result<()> {
    let translator = runtime.translator(cli)?;
    if !text.is_empty() {
        println!("{}", translator.translate(&text.join(" ")));
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        writeln!(stdout, "{}", translator.translate(&line))?;
    }
    let (hits, misses) = translator.cache_stats();
    tracing::debug!(hits, misses, "translation cache");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let runtime = Runtime::new(&cli)?;

    match &cli.command {
        Some(Commands::Parse { phonemes }) => handle_parse(&runtime, phonemes),
        Some(Commands::Lookup { words }) => handle_lookup(&runtime, &cli, words),
        Some(Commands::Translate { text }) => handle_translate(&runtime, &cli, text),
        None => handle_translate(&runtime, &cli, &[]),
    }
}
