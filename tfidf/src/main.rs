use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tfidf_core::{DisplayMode, Pipeline, PipelineConfig, TermFrequency};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "tfidf")]
#[command(about = "Rank the terms of every document in a corpus by TF-IDF", long_about = None)]
struct Cli {
    /// File listing one document path per line
    input: PathBuf,
    /// JSON config file (camelCase keys); flags below override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Keep only the top K terms per document (K <= 0 keeps all)
    #[arg(long, allow_negative_numbers = true)]
    top_k: Option<i64>,
    /// Output lines: `both` (term and score) or `term`
    #[arg(long)]
    display: Option<DisplayMode>,
    /// Term frequency: `raw` or `max-normalized`
    #[arg(long)]
    tf_mode: Option<TermFrequency>,
    /// `surface lemma` lexicon; replaces lemmatization with dictionary lookup
    #[arg(long)]
    language_resource: Option<PathBuf>,
    /// Base-form word list for lexicon-checked lemmatization instead of stemming
    #[arg(long)]
    wordlist: Option<PathBuf>,
    /// Stopword file, one word per line
    #[arg(long)]
    stopwords: Option<PathBuf>,
    /// Also filter the built-in English stopwords
    #[arg(long, default_value_t = false)]
    english_stopwords: bool,
    /// Write artifacts here instead of next to each document
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Process documents on one thread
    #[arg(long, default_value_t = false)]
    sequential: bool,
}

impl Cli {
    /// Defaults, then the config file, then flags.
    fn to_config(&self) -> Result<PipelineConfig> {
        let mut cfg = match &self.config {
            Some(path) => PipelineConfig::from_json_file(path)?,
            None => PipelineConfig::default(),
        };
        if self.top_k.is_some() {
            cfg.top_k = self.top_k;
        }
        if let Some(mode) = self.display {
            cfg.display_mode = mode;
        }
        if let Some(mode) = self.tf_mode {
            cfg.term_frequency_mode = mode;
        }
        if self.language_resource.is_some() {
            cfg.language_resource = self.language_resource.clone();
        }
        if self.wordlist.is_some() {
            cfg.wordlist = self.wordlist.clone();
        }
        if self.stopwords.is_some() {
            cfg.stopwords = self.stopwords.clone();
        }
        if self.output_dir.is_some() {
            cfg.output_dir = self.output_dir.clone();
        }
        cfg.english_stopwords |= self.english_stopwords;
        if self.sequential {
            cfg.parallel = false;
        }
        Ok(cfg)
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let config = cli.to_config()?;
    tracing::debug!(?config, "resolved configuration");
    let pipeline = Pipeline::from_config(config).context("loading linguistic resources")?;
    let summary = pipeline
        .run(&cli.input)
        .with_context(|| format!("scoring documents listed in {}", cli.input.display()))?;

    tracing::info!(documents = summary.documents, artifacts = summary.artifacts.len(), "run complete");
    println!("success, with {} documents.", summary.documents);
    Ok(())
}
