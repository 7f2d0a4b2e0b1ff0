use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while turning a request path fragment into a canonical URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanonicalizeError {
    /// The fragment was empty or started with a path separator.
    #[error("invalid url: no url supplied")]
    InvalidUrl,
    /// The fragment could not be normalized into a well-formed URL.
    #[error("could not normalize url: {0}")]
    NormalizationFailure(String),
}

/// Errors produced while bulk-loading a URL database.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open url source {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("read failed after line {line}: {source}")]
    ReadFailure {
        line: usize,
        #[source]
        source: io::Error,
    },
}
