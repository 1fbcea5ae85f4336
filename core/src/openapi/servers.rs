#![deny(missing_docs)]

//! # Alternative Server Matching
//!
//! Decides whether a route's domain requires additional server entries in
//! the documented server list.
//!
//! Two server URLs are compared by their *mask*: the domain's placeholder
//! names joined with `.`, concatenated with the path. Literal domain text
//! is discarded entirely, so `https://{tenant}.acme.com/v1` and
//! `https://{tenant}.other.org/v1` are equivalent; only the arrangement
//! and names of domain placeholders plus the path matter.

use crate::config::GenerationConfig;
use crate::openapi::models::ServerEntry;
use crate::route::template_placeholders;

/// Normalizes a server URL for equivalence comparison.
///
/// The scheme is dropped, the remainder splits into domain and path at the
/// first `/`, and the domain reduces to its placeholder names.
pub fn mask(url: &str) -> String {
    let without_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    let (domain, path) = match without_scheme.split_once('/') {
        Some((domain, path)) => (domain, path),
        None => (without_scheme, ""),
    };

    let names = template_placeholders(domain);
    format!("{}/{}", names.join("."), path)
}

/// Computes the alternative server entries for a route.
///
/// Empty when the route has no domain, or when every configured server's
/// mask already matches the expected one. Otherwise the matching subset of
/// configured servers; when none match, a single entry synthesized from the
/// expected URL.
pub fn alternative_servers(domain: Option<&str>, config: &GenerationConfig) -> Vec<ServerEntry> {
    let Some(domain) = domain.filter(|d| !d.is_empty()) else {
        return Vec::new();
    };

    let expected = ServerEntry::new(format!(
        "{}://{}/{}",
        config.scheme, domain, config.api_path
    ));
    let expected_mask = mask(&expected.url);

    if config
        .servers
        .iter()
        .all(|server| mask(&server.url) == expected_mask)
    {
        return Vec::new();
    }

    let matching: Vec<ServerEntry> = config
        .servers
        .iter()
        .filter(|server| mask(&server.url) == expected_mask)
        .cloned()
        .collect();

    if !matching.is_empty() {
        return matching;
    }

    vec![expected]
}
