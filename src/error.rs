use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort an analysis run
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("invalid alphabet `{alphabet}`")]
    InvalidAlphabet {
        alphabet: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to load stop words from {}", path.display())]
    StopWords {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to build worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
