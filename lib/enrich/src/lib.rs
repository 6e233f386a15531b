//! # cinematch Enrich
//!
//! Poster enrichment for recommendation results.
//!
//! Implements the core's [`PosterSource`] seam against the TMDB search
//! API: each recommended title is looked up by name and the first
//! result's poster path is joined to the image base URL. Every failure
//! mode (network error, non-success status, empty result set, missing
//! poster path) degrades to `None` for that one item; the
//! recommendation query itself is never affected.

use cinematch_core::PosterSource;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3";
const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    poster_path: Option<String>,
}

/// Poster lookup backed by the TMDB search API
pub struct TmdbPosterSource {
    client: reqwest::blocking::Client,
    api_key: String,
    api_base: String,
    image_base: String,
}

impl TmdbPosterSource {
    pub fn new(api_key: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
        })
    }

    /// Override the API endpoint, e.g. to point at a local stub
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn search(&self, title: &str) -> Result<SearchResponse, reqwest::Error> {
        self.client
            .get(format!("{}/search/movie", self.api_base))
            .query(&[("api_key", self.api_key.as_str()), ("query", title)])
            .send()?
            .error_for_status()?
            .json()
    }
}

impl PosterSource for TmdbPosterSource {
    fn poster_url(&self, title: &str) -> Option<String> {
        let response = match self.search(title) {
            Ok(r) => r,
            Err(e) => {
                warn!("poster lookup failed for {title:?}: {e}");
                return None;
            }
        };

        response
            .results
            .first()
            .and_then(|r| r.poster_path.as_deref())
            .map(|path| format!("{}{path}", self.image_base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_parsing() {
        let json = r#"{"results": [{"poster_path": "/abc.jpg", "title": "Inception"}]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results[0].poster_path.as_deref(), Some("/abc.jpg"));

        let empty: SearchResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(empty.results.is_empty());
    }

    #[test]
    fn test_unreachable_endpoint_degrades_to_none() {
        let source = TmdbPosterSource::new("test-key")
            .unwrap()
            .with_api_base("http://127.0.0.1:1");
        assert_eq!(source.poster_url("Inception"), None);
    }
}
