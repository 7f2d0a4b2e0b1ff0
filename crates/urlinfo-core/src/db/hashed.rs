//! Digest-keyed URL database.
//!
//! Every entry costs one [`UrlDigest`] regardless of URL length. Stored URLs
//! cannot be recovered, and two URLs sharing a digest both report a match.
//! With 16-byte digests that is negligible for lists of a few million URLs.

use crate::db::UrlDb;
use crate::digest::{Fnv64a, UrlDigest, UrlHasher};
use dashmap::DashSet;

/// URL database keyed by a fixed-width digest of the canonical URL.
///
/// The hashing policy is fixed per instance through the `H` parameter.
#[derive(Debug)]
pub struct HashedUrlDb<H: UrlHasher = Fnv64a> {
    digests: DashSet<UrlDigest>,
    hasher: H,
}

impl HashedUrlDb<Fnv64a> {
    /// Creates an empty database using 64-bit FNV-1a.
    pub fn new() -> Self {
        Self::with_hasher(Fnv64a)
    }
}

impl Default for HashedUrlDb<Fnv64a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: UrlHasher> HashedUrlDb<H> {
    /// Creates an empty database using the given hashing policy.
    pub fn with_hasher(hasher: H) -> Self {
        Self {
            digests: DashSet::new(),
            hasher,
        }
    }

    /// Digest under which `url` is stored.
    pub fn digest(&self, url: &str) -> UrlDigest {
        self.hasher.digest(url)
    }
}

impl<H: UrlHasher> UrlDb for HashedUrlDb<H> {
    fn lookup(&self, url: &str) -> bool {
        self.digests.contains(&self.digest(url))
    }

    fn add(&self, url: &str) {
        self.digests.insert(self.digest(url));
    }

    fn len(&self) -> usize {
        self.digests.len()
    }
}
