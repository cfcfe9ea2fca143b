use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordfreq::{Document, Pipeline, Settings};

// CLI Arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Word and stem frequency statistics for a text document", long_about = None)]
struct Args {
    /// Text file to analyze (gzip-compressed if it ends in .gz)
    path: PathBuf,

    /// JSON settings file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    language: Option<String>,

    /// Regex character-class body of allowed letters, e.g. "а-яё"
    #[arg(long)]
    alphabet: Option<String>,

    #[arg(long)]
    min_length: Option<usize>,

    /// Word list used instead of the built-in stop-word corpus
    #[arg(long)]
    stop_words_file: Option<PathBuf>,

    /// Additional stop word (repeatable)
    #[arg(short = 'x', long = "extra-stop-word")]
    extra_stop_words: Vec<String>,

    #[arg(long)]
    top: Option<usize>,

    #[arg(long)]
    rare: Option<usize>,

    /// Minimum occurrences for the rare lists
    #[arg(long)]
    min_count: Option<u64>,

    /// Bytes inspected for encoding detection
    #[arg(long)]
    prefix_bytes: Option<usize>,

    /// Worker threads (0 = one per core)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn apply(&self, settings: &mut Settings) {
        if let Some(language) = &self.language {
            settings.language = language.clone();
        }
        if let Some(alphabet) = &self.alphabet {
            settings.alphabet = Some(alphabet.clone());
        }
        if let Some(min_length) = self.min_length {
            settings.min_token_length = min_length;
        }
        if let Some(path) = &self.stop_words_file {
            settings.stop_words_file = Some(path.clone());
        }
        settings
            .extra_stop_words
            .extend(self.extra_stop_words.iter().cloned());
        if let Some(top) = self.top {
            settings.top_n = top;
        }
        if let Some(rare) = self.rare {
            settings.rare_n = rare;
        }
        if let Some(min_count) = self.min_count {
            settings.min_count = min_count;
        }
        if let Some(prefix_bytes) = self.prefix_bytes {
            settings.detect_prefix_bytes = prefix_bytes;
        }
        if let Some(threads) = self.threads {
            settings.threads = threads;
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut settings = match &args.config {
        Some(path) => Settings::from_file(path).context("Failed to load settings")?,
        None => Settings::default(),
    };
    args.apply(&mut settings);

    let config = settings
        .pipeline_config()
        .context("Invalid configuration")?;
    let pipeline = Pipeline::new(config).context("Failed to build pipeline")?;

    let document = Document::load(&args.path, settings.detect_prefix_bytes)
        .with_context(|| format!("Failed to load {}", args.path.display()))?;

    let report = pipeline.analyze(&document);
    print!("{}", report);
    println!();
    println!("Done.");

    Ok(())
}
