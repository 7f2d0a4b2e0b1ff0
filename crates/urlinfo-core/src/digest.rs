use std::fmt::{Debug, Display, Formatter};
use std::hash::Hasher;

/// Width in bytes of a [`UrlDigest`].
pub const DIGEST_LEN: usize = 16;

/// A fixed-width, non-reversible fingerprint of a canonical URL.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlDigest([u8; DIGEST_LEN]);

impl UrlDigest {
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }
}

impl Debug for UrlDigest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("UrlDigest").field(&self.to_string()).finish()
    }
}

impl Display for UrlDigest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.iter().try_for_each(|b| write!(f, "{b:02x}"))
    }
}

/// Hashing policy of a [`HashedUrlDb`][crate::db::hashed::HashedUrlDb].
///
/// Implementations must be deterministic: the same URL always maps to the
/// same digest, in every process.
pub trait UrlHasher: Send + Sync + 'static {
    fn digest(&self, url: &str) -> UrlDigest;
}

/// 64-bit FNV-1a, written big-endian into the first 8 bytes of the digest.
///
/// The trailing 8 bytes are always zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fnv64a;

impl UrlHasher for Fnv64a {
    fn digest(&self, url: &str) -> UrlDigest {
        let mut hasher = fnv::FnvHasher::default();
        hasher.write(url.as_bytes());

        let mut out = [0u8; DIGEST_LEN];
        out[..8].copy_from_slice(&hasher.finish().to_be_bytes());
        UrlDigest(out)
    }
}

/// First 16 bytes of the BLAKE3 hash.
///
/// Slower than [`Fnv64a`] but uses the full digest width.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Digest;

impl UrlHasher for Blake3Digest {
    fn digest(&self, url: &str) -> UrlDigest {
        let hash = blake3::hash(url.as_bytes());

        let mut out = [0u8; DIGEST_LEN];
        out.copy_from_slice(&hash.as_bytes()[..DIGEST_LEN]);
        UrlDigest(out)
    }
}
