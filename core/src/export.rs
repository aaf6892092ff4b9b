use crate::config::{DisplayMode, ARTIFACT_PREFIX};
use crate::error::{Result, TfidfError};
use crate::scorer::ScoredTerm;
use std::fmt::Write as _;
use std::fs::{self, create_dir_all};
use std::path::{Path, PathBuf};

/// Where artifacts go: next to each document, or all under one directory.
#[derive(Debug, Clone, Default)]
pub struct OutputPaths {
    pub root: Option<PathBuf>,
}

impl OutputPaths {
    pub fn beside_documents() -> Self {
        Self { root: None }
    }

    pub fn under<P: AsRef<Path>>(root: P) -> Self {
        Self { root: Some(root.as_ref().to_path_buf()) }
    }

    /// `dir/doc.txt` becomes `dir/tfidf_doc.txt` (or `<root>/tfidf_doc.txt`).
    pub fn artifact_for(&self, doc: &Path) -> PathBuf {
        let name = doc.file_name().unwrap_or(doc.as_os_str()).to_string_lossy();
        let file = format!("{ARTIFACT_PREFIX}{name}");
        match &self.root {
            Some(root) => root.join(file),
            None => doc.with_file_name(file),
        }
    }
}

/// Read the newline-separated list of document paths.
pub fn read_path_list<P: AsRef<Path>>(list: P) -> Result<Vec<PathBuf>> {
    let list = list.as_ref();
    let text = fs::read_to_string(list).map_err(|e| TfidfError::unavailable(list, e))?;
    Ok(text.lines().map(PathBuf::from).collect())
}

pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| TfidfError::unavailable(path, e))
}

/// One line per entry, each terminated by `\n`.
pub fn render(ranked: &[ScoredTerm], mode: DisplayMode) -> String {
    let mut out = String::new();
    for entry in ranked {
        let written = match mode {
            // {:?} keeps a fractional part: 0.0, not 0
            DisplayMode::Both => writeln!(out, "{}\t{:?}", entry.term, entry.score),
            DisplayMode::Term => writeln!(out, "{}", entry.term),
        };
        written.expect("writing to a String cannot fail");
    }
    out
}

pub fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        create_dir_all(dir).map_err(|source| TfidfError::OutputUnwritable { path: dir.to_path_buf(), source })?;
    }
    fs::write(path, contents).map_err(|source| TfidfError::OutputUnwritable { path: path.to_path_buf(), source })
}
