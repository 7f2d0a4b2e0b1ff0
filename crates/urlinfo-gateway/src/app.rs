use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{health_handler, lookup_handler};
use crate::state::AppState;

/// Route prefix in front of the URL being checked.
pub const URL_PREFIX: &str = "/urlinfo/1/";

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            // the bare prefix has nothing to check, the handler rejects it
            .route(URL_PREFIX, get(lookup_handler))
            .route(&format!("{URL_PREFIX}{{*url}}"), get(lookup_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
