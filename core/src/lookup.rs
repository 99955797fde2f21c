//! Lookup Client
//!
//! The [`HeroSource`] trait abstracts the remote hero service so the
//! controller can be driven by the real Superhero API or by a mock in
//! tests. [`SuperheroApi`] is the production implementation.
//!
//! # Superhero API
//!
//! The service exposes a path-keyed REST endpoint:
//!
//! - `GET {base}/{token}/search/{name}` - search candidates by name
//!
//! The response is a JSON envelope with a top-level `response` status flag
//! and a `results` candidate list. One request per lookup, no retry: a
//! failed attempt surfaces directly and the user retries manually.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::config::AppConfig;
use crate::error::LookupError;
use crate::record::{RawCandidate, SearchEnvelope};

/// Transport timeout for each request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fixed User-Agent the service expects.
const REQUEST_USER_AGENT: &str = "Mozilla/5.0";

/// A remote source of hero candidates.
#[async_trait]
pub trait HeroSource: Send + Sync {
    /// Search the service and return the disambiguated candidate for `name`.
    async fn search(&self, name: &str) -> Result<RawCandidate, LookupError>;

    /// Fetch raw portrait bytes from `url`.
    async fn fetch_portrait(&self, url: &str) -> Result<Vec<u8>, LookupError>;
}

/// Superhero API client.
#[derive(Clone)]
pub struct SuperheroApi {
    /// Service base URL, without trailing slash.
    base_url: String,
    /// API key embedded in the URL path.
    token: String,
    /// HTTP client.
    http_client: reqwest::Client,
}

impl SuperheroApi {
    /// Create a new client against an explicit endpoint.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(REQUEST_USER_AGENT));

        Self {
            base_url: base_url.into(),
            token: token.into(),
            http_client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .default_headers(headers)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Create from `AppConfig`.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base.clone(), config.api_token.clone())
    }

    /// Get the search endpoint URL for a name.
    fn search_url(&self, name: &str) -> String {
        format!(
            "{}/{}/search/{}",
            self.base_url.trim_end_matches('/'),
            self.token,
            name
        )
    }
}

#[async_trait]
impl HeroSource for SuperheroApi {
    async fn search(&self, name: &str) -> Result<RawCandidate, LookupError> {
        let url = self.search_url(name);
        tracing::debug!(%url, "searching hero service");

        let response = self.http_client.get(&url).send().await?;
        let envelope: SearchEnvelope = response.error_for_status()?.json().await?;

        if !envelope.is_success() {
            return Err(LookupError::NotFound(name.to_string()));
        }

        select_candidate(name, &envelope.results)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(name.to_string()))
    }

    async fn fetch_portrait(&self, url: &str) -> Result<Vec<u8>, LookupError> {
        tracing::debug!(%url, "fetching portrait");
        let response = self.http_client.get(url).send().await?;
        let bytes = response.error_for_status()?.bytes().await?;
        Ok(bytes.to_vec())
    }
}

/// Disambiguate a candidate list for a query.
///
/// An exact case-insensitive name match wins; otherwise the first candidate
/// in list order is selected. The first-match fallback can pick a wrong
/// character for ambiguous queries; the behavior is kept as-is.
#[must_use]
pub fn select_candidate<'a>(name: &str, candidates: &'a [RawCandidate]) -> Option<&'a RawCandidate> {
    candidates
        .iter()
        .find(|c| {
            c.name
                .as_deref()
                .is_some_and(|n| n.eq_ignore_ascii_case(name.trim()))
        })
        .or_else(|| candidates.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn named(name: &str) -> RawCandidate {
        RawCandidate {
            name: Some(name.to_string()),
            ..RawCandidate::default()
        }
    }

    #[test]
    fn exact_case_insensitive_match_wins() {
        let candidates = vec![named("Iron Monger"), named("IRON MAN"), named("Iron Fist")];
        let picked = select_candidate("iron man", &candidates).unwrap();
        assert_eq!(picked.name.as_deref(), Some("IRON MAN"));
    }

    #[test]
    fn first_candidate_wins_without_exact_match() {
        let candidates = vec![named("Iron Monger"), named("Iron Fist")];
        let picked = select_candidate("Iron Man", &candidates).unwrap();
        assert_eq!(picked.name.as_deref(), Some("Iron Monger"));
    }

    #[test]
    fn empty_candidate_list_selects_nothing() {
        assert!(select_candidate("Thor", &[]).is_none());
    }

    #[test]
    fn search_url_embeds_token_and_name() {
        let api = SuperheroApi::new("https://example.com/api/", "token123");
        assert_eq!(
            api.search_url("Storm"),
            "https://example.com/api/token123/search/Storm"
        );
    }

    #[tokio::test]
    async fn transport_failure_yields_connection_error() {
        // Nothing listens on port 1; the connect fails immediately and must
        // surface as a LookupError, never a panic.
        let api = SuperheroApi::new("http://127.0.0.1:1", "t");
        match api.search("Thor").await {
            Err(LookupError::Connection(_)) => {}
            other => panic!("expected Connection error, got {other:?}"),
        }
    }
}
