//! Core types for the urlinfo malware-URL lookup service.
//!
//! This crate provides URL canonicalization and the in-memory URL databases
//! consulted by the gateway. It performs no network I/O.

pub mod canonical;
pub mod db;
pub mod digest;
pub mod error;

pub use canonical::{canonicalize, strip_default_scheme};
pub use db::{DbBackend, HashedUrlDb, StringMapUrlDb, UrlDb};
pub use digest::{Blake3Digest, Fnv64a, UrlDigest, UrlHasher};
pub use error::{CanonicalizeError, LoadError};
