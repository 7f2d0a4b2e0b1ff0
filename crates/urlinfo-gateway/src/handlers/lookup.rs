use crate::app::URL_PREFIX;
use crate::error::Result;
use crate::model::LookupResponse;
use crate::state::AppState;
use axum::extract::State;
use axum::http::Uri;
use axum::Json;
use tracing::debug;
use urlinfo_core::canonicalize;

/// Looks up the URL following [`URL_PREFIX`], query string included.
pub async fn lookup_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<LookupResponse>> {
    let fragment = url_fragment(&uri);

    let url = canonicalize(fragment).inspect_err(|e| {
        debug!(fragment, error = %e, "couldn't parse url");
    })?;

    let malware = state.db().lookup(&url);
    debug!(url = %url, malware, "looked up url");

    Ok(Json(LookupResponse { malware }))
}

fn url_fragment(uri: &Uri) -> &str {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    target.strip_prefix(URL_PREFIX).unwrap_or_default()
}
