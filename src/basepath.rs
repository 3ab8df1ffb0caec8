//! Base-path resolution for the injected script reference.

use crate::env::EnvSet;

/// Primary base-path override, as set by CRA-style deployments.
pub const PUBLIC_URL_VAR: &str = "PUBLIC_URL";

/// App-specific base-path override, checked after [`PUBLIC_URL_VAR`].
pub const BASE_URL_VAR: &str = "REACT_APP_BASE_URL";

const DEFAULT_HOMEPAGE: &str = "/";

/// Pick the base path: first non-empty of the two override variables (read
/// from the effective set, so the whitelist applies to them too), then the
/// manifest homepage, defaulting to `/` when the manifest has none.
///
/// Total over its inputs; the degenerate result is the empty string.
pub fn resolve(env: &EnvSet, homepage: Option<&str>) -> String {
    let fallback = homepage.unwrap_or(DEFAULT_HOMEPAGE);
    let raw = [
        env.get(PUBLIC_URL_VAR).map(String::as_str),
        env.get(BASE_URL_VAR).map(String::as_str),
        Some(fallback),
    ]
    .into_iter()
    .flatten()
    .find(|candidate| !candidate.is_empty())
    .unwrap_or("");
    strip_trailing_slashes(raw)
}

/// Strip every trailing `/`. `"////"` collapses to the empty string.
pub fn strip_trailing_slashes(path: &str) -> String {
    path.trim_end_matches('/').to_string()
}
