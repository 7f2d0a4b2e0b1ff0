//! HTTP gateway for urlinfo.
//!
//! Exposes `GET /urlinfo/1/{url}` which canonicalizes the trailing URL and
//! reports whether it is in the loaded malware database.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::{App, URL_PREFIX};
pub use state::AppState;
