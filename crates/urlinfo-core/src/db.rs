pub mod hashed;
pub mod string_map;

use crate::digest::{Blake3Digest, Fnv64a};
use crate::error::LoadError;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

pub use hashed::HashedUrlDb;
pub use string_map::StringMapUrlDb;

/// A set of known-bad canonical URLs.
///
/// Entries are append-only: once added, a URL stays present for the lifetime
/// of the database. Implementations must tolerate `add` running concurrently
/// with `lookup`.
pub trait UrlDb: Send + Sync + 'static {
    /// Returns `true` if the canonical URL is present.
    fn lookup(&self, url: &str) -> bool;

    /// Marks the canonical URL as present. Adding a URL twice is a no-op.
    fn add(&self, url: &str);

    /// Number of distinct keys stored.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Loads canonical URLs from a file, one per line.
    ///
    /// Lines are trimmed and blank lines skipped. No canonicalization is
    /// applied; the file is expected to hold canonical URLs already.
    ///
    /// Returns the number of non-blank lines ingested.
    ///
    /// # Errors
    ///
    /// * [`LoadError::SourceUnavailable`] if the file cannot be opened. The
    ///   database is left untouched.
    /// * [`LoadError::ReadFailure`] if reading fails part-way. Lines ingested
    ///   before the failure stay in the database.
    fn load(&self, path: &Path) -> Result<usize, LoadError>
    where
        Self: Sized,
    {
        load_file(self, path)
    }

    /// Same as [`UrlDb::load`] but reads from an already open source.
    fn load_from_reader<R: BufRead>(&self, reader: R) -> Result<usize, LoadError>
    where
        Self: Sized,
    {
        load_lines(self, reader)
    }
}

/// Loads `path` into any database, including trait objects.
pub fn load_file<D: UrlDb + ?Sized>(db: &D, path: &Path) -> Result<usize, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "loading urls");
    let loaded = load_lines(db, BufReader::new(file))?;
    info!(path = %path.display(), loaded, distinct = db.len(), "loaded urls");

    Ok(loaded)
}

/// Ingests every trimmed, non-blank line of `reader` into `db`.
pub fn load_lines<D: UrlDb + ?Sized, R: BufRead>(db: &D, reader: R) -> Result<usize, LoadError> {
    let mut loaded = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::ReadFailure { line: idx, source })?;
        let url = line.trim();
        if url.is_empty() {
            continue;
        }
        db.add(url);
        loaded += 1;
    }
    Ok(loaded)
}

/// Storage strategy of a URL database, chosen at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DbBackend {
    /// Canonical URLs stored verbatim.
    String,
    /// 64-bit FNV-1a digests.
    #[default]
    Fnv64,
    /// Truncated BLAKE3 digests.
    Blake3,
}

impl DbBackend {
    /// Creates an empty database using this strategy.
    pub fn build(self) -> Arc<dyn UrlDb> {
        match self {
            DbBackend::String => Arc::new(StringMapUrlDb::new()),
            DbBackend::Fnv64 => Arc::new(HashedUrlDb::with_hasher(Fnv64a)),
            DbBackend::Blake3 => Arc::new(HashedUrlDb::with_hasher(Blake3Digest)),
        }
    }
}

impl Display for DbBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DbBackend::String => write!(f, "string"),
            DbBackend::Fnv64 => write!(f, "fnv64"),
            DbBackend::Blake3 => write!(f, "blake3"),
        }
    }
}
