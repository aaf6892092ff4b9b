use std::io;
use std::path::PathBuf;

/// Errors surfaced by the scoring pipeline. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum TfidfError {
    /// The path list, a document, or a linguistic resource could not be read.
    #[error("cannot read {}", .path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A language-resource line carried a surface form but no lemma.
    #[error("{}:{line}: lexicon entry has no lemma", .path.display())]
    MalformedLexiconLine { path: PathBuf, line: usize },

    #[error("document {} is listed more than once", .path.display())]
    DuplicateDocument { path: PathBuf },

    /// Two documents would be exported to the same artifact.
    #[error("artifact {} would be written for more than one document", .path.display())]
    ArtifactCollision { path: PathBuf },

    #[error("cannot write {}", .path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration in {}", .path.display())]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, TfidfError>;

impl TfidfError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TfidfError::ResourceUnavailable { path: path.into(), source }
    }
}
