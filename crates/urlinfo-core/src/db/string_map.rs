use crate::db::UrlDb;
use dashmap::DashSet;

/// URL database keyed by the canonical URL string itself.
///
/// Lookups are exact. Memory grows with the total length of stored URLs.
/// DashSet shards its locks, so `add` can run alongside lookups without a
/// global write lock.
#[derive(Debug, Clone, Default)]
pub struct StringMapUrlDb {
    urls: DashSet<String>,
}

impl StringMapUrlDb {
    /// Creates an empty database.
    pub fn new() -> Self {
        Self {
            urls: DashSet::new(),
        }
    }
}

impl UrlDb for StringMapUrlDb {
    fn lookup(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    fn add(&self, url: &str) {
        if !self.urls.contains(url) {
            self.urls.insert(url.to_owned());
        }
    }

    fn len(&self) -> usize {
        self.urls.len()
    }
}
