//! End-to-end run: read → analyze → aggregate → freeze → score → rank → export.
//!
//! Per-document analysis and per-document export may run on the rayon pool.
//! Analyzed documents meet at a single mutex-guarded [`CorpusBuilder`]; scoring
//! starts only after [`CorpusBuilder::freeze`] has produced the final counts.

use crate::config::{PipelineConfig, MIN_TERM_CHARS};
use crate::corpus::{Corpus, CorpusBuilder, Document};
use crate::error::{Result, TfidfError};
use crate::export::{read_document, read_path_list, render, write_artifact, OutputPaths};
use crate::lemmatizer::{MorphyLemmatizer, SnowballLemmatizer};
use crate::normalizer::{Lexicon, Normalizer};
use crate::rank::rank;
use crate::scorer::score_document;
use crate::stopwords::StopwordSet;
use crate::tokenizer::tokenize;
use parking_lot::Mutex;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Text → filtered term sequence.
pub struct Analyzer {
    normalizer: Normalizer,
    stopwords: StopwordSet,
}

impl Analyzer {
    pub fn new(normalizer: Normalizer, stopwords: StopwordSet) -> Self {
        Self { normalizer, stopwords }
    }

    /// Load the normalizer and stopwords named by `config`.
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        let normalizer = match (&config.language_resource, &config.wordlist) {
            (Some(lexicon), _) => Normalizer::Dictionary(Lexicon::load(lexicon)?),
            (None, Some(words)) => Normalizer::Morphological(Box::new(MorphyLemmatizer::from_path(words)?)),
            (None, None) => Normalizer::Morphological(Box::new(SnowballLemmatizer::english())),
        };

        let mut stopwords = match &config.stopwords {
            Some(path) => StopwordSet::from_path(path)?,
            None => StopwordSet::empty(),
        };
        if config.english_stopwords {
            stopwords.extend(StopwordSet::english());
        }
        Ok(Self::new(normalizer, stopwords))
    }

    pub fn analyze(&self, text: &str) -> Vec<String> {
        let terms = tokenize(text)
            .iter()
            .map(|token| self.normalizer.normalize(token))
            .filter(|term| term.chars().count() > MIN_TERM_CHARS)
            .collect();
        self.stopwords.filter(terms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub documents: usize,
    pub artifacts: Vec<PathBuf>,
}

pub struct Pipeline {
    analyzer: Analyzer,
    config: PipelineConfig,
    outputs: OutputPaths,
}

impl Pipeline {
    pub fn new(analyzer: Analyzer, config: PipelineConfig) -> Self {
        let outputs = match &config.output_dir {
            Some(dir) => OutputPaths::under(dir),
            None => OutputPaths::beside_documents(),
        };
        Self { analyzer, config, outputs }
    }

    pub fn from_config(config: PipelineConfig) -> Result<Self> {
        let analyzer = Analyzer::from_config(&config)?;
        Ok(Self::new(analyzer, config))
    }

    /// Run over the documents named in the list file.
    pub fn run<P: AsRef<Path>>(&self, list: P) -> Result<RunSummary> {
        let paths = read_path_list(list)?;
        self.run_paths(&paths)
    }

    pub fn run_paths(&self, paths: &[PathBuf]) -> Result<RunSummary> {
        if paths.is_empty() {
            tracing::info!("no documents listed");
            return Ok(RunSummary { documents: 0, artifacts: Vec::new() });
        }
        let corpus = self.build_corpus(paths)?;
        let artifacts = self.export(&corpus)?;
        Ok(RunSummary { documents: corpus.documents().len(), artifacts })
    }

    fn load_document(&self, path: &Path) -> Result<Document> {
        let text = read_document(path)?;
        let doc = Document::from_terms(path, self.analyzer.analyze(&text));
        tracing::debug!(path = %path.display(), terms = doc.num_terms(), distinct = doc.local_freq().len(), "analyzed document");
        Ok(doc)
    }

    /// Analyze every document and freeze the corpus-wide counts.
    pub fn build_corpus(&self, paths: &[PathBuf]) -> Result<Corpus> {
        if self.config.parallel {
            let builder = Mutex::new(CorpusBuilder::with_capacity(paths.len()));
            paths.par_iter().enumerate().try_for_each(|(position, path)| {
                let doc = self.load_document(path)?;
                builder.lock().add(position, doc)
            })?;
            Ok(builder.into_inner().freeze())
        } else {
            let mut builder = CorpusBuilder::with_capacity(paths.len());
            for (position, path) in paths.iter().enumerate() {
                builder.add(position, self.load_document(path)?)?;
            }
            Ok(builder.freeze())
        }
    }

    /// Score, rank and write one artifact per document, in corpus order.
    pub fn export(&self, corpus: &Corpus) -> Result<Vec<PathBuf>> {
        let targets: Vec<PathBuf> = corpus.documents().iter().map(|d| self.outputs.artifact_for(d.path())).collect();
        let mut unique = HashSet::with_capacity(targets.len());
        if let Some(clash) = targets.iter().find(|t| !unique.insert(*t)) {
            return Err(TfidfError::ArtifactCollision { path: clash.clone() });
        }

        let jobs: Vec<(&Document, &PathBuf)> = corpus.documents().iter().zip(targets.iter()).collect();
        if self.config.parallel {
            jobs.par_iter().try_for_each(|(doc, target)| self.export_document(corpus, doc, target))?;
        } else {
            for (doc, target) in &jobs {
                self.export_document(corpus, doc, target)?;
            }
        }
        Ok(targets)
    }

    fn export_document(&self, corpus: &Corpus, doc: &Document, target: &Path) -> Result<()> {
        if doc.is_empty() {
            tracing::debug!(document = %doc.path().display(), "no terms survived filtering");
        }
        let scored = score_document(corpus, doc, self.config.term_frequency_mode);
        let ranked = rank(scored, self.config.cutoff());
        write_artifact(target, &render(&ranked, self.config.display_mode))?;
        tracing::debug!(document = %doc.path().display(), artifact = %target.display(), entries = ranked.len(), "wrote artifact");
        Ok(())
    }
}
