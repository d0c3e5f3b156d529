//! TMDB (The Movie Database) API client
//!
//! Provides movie, series and episode metadata by numeric id.
//! Every call carries the API key and a fixed language parameter, and is
//! routed through the TTL response cache keyed on the canonical request.
//! API docs: https://developer.themoviedb.org/docs

use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::cache::ResponseCache;
use crate::config::TMDB_BASE_URL;
use crate::models::{EpisodeInfo, TitleMetadata};

/// TMDB API error types
///
/// `NotFound` is deliberately separate from the transport variants: the
/// title resolver falls through from movie to series only on genuine
/// absence, never on a network fault.
#[derive(Error, Debug)]
pub enum TmdbError {
    #[error("Resource not found (404)")]
    NotFound,

    #[error("Server error: {0}")]
    ServerError(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl TmdbError {
    /// True only for the remote "no such resource" outcome
    pub fn is_not_found(&self) -> bool {
        matches!(self, TmdbError::NotFound)
    }
}

/// TMDB API client with a TTL cache in front of every lookup
pub struct TmdbClient {
    api_key: String,
    language: String,
    base_url: String,
    client: reqwest::Client,
    cache: ResponseCache,
}

impl TmdbClient {
    /// Create a new TMDB client
    pub fn new(api_key: impl Into<String>, language: impl Into<String>, cache: ResponseCache) -> Self {
        Self::with_base_url(api_key, language, TMDB_BASE_URL, cache)
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(
        api_key: impl Into<String>,
        language: impl Into<String>,
        base_url: impl Into<String>,
        cache: ResponseCache,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            language: language.into(),
            base_url: base_url.into(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            cache,
        }
    }

    /// Get movie metadata by TMDB id
    pub async fn movie(&self, id: u64) -> Result<TitleMetadata, TmdbError> {
        let value = self.get(&format!("/movie/{}", id), &[]).await?;
        parse_payload(value)
    }

    /// Get series metadata by TMDB id
    pub async fn series(&self, id: u64) -> Result<TitleMetadata, TmdbError> {
        let value = self.get(&format!("/tv/{}", id), &[]).await?;
        parse_payload(value)
    }

    /// Get one episode's metadata by series id, season and episode number
    pub async fn episode(
        &self,
        id: u64,
        season: u32,
        episode: u32,
    ) -> Result<EpisodeInfo, TmdbError> {
        let value = self
            .get(&format!("/tv/{}/season/{}/episode/{}", id, season, episode), &[])
            .await?;
        parse_payload(value)
    }

    /// Cached GET: canonical key from path + sorted params; on a cold or
    /// expired key the HTTP request runs and its payload is stored.
    async fn get(&self, path: &str, extra: &[(&str, String)]) -> Result<Value, TmdbError> {
        let mut params: Vec<(&str, String)> = vec![
            ("api_key", self.api_key.clone()),
            ("language", self.language.clone()),
        ];
        params.extend_from_slice(extra);

        let key = ResponseCache::cache_key(path, &params);
        self.cache.fetch(&key, || self.request(path, &params)).await
    }

    /// Raw authenticated GET against the remote service
    async fn request(&self, path: &str, params: &[(&str, String)]) -> Result<Value, TmdbError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).query(params).send().await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                serde_json::from_str(&body)
                    .map_err(|e| TmdbError::InvalidResponse(format!("JSON parse error: {}", e)))
            }
            StatusCode::NOT_FOUND => Err(TmdbError::NotFound),
            status => Err(TmdbError::ServerError(status.as_u16())),
        }
    }
}

/// Narrow an opaque cached payload to the consumed fields
fn parse_payload<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, TmdbError> {
    serde_json::from_value(value)
        .map_err(|e| TmdbError::InvalidResponse(format!("unexpected payload shape: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        assert!(TmdbError::NotFound.is_not_found());
        assert!(!TmdbError::ServerError(500).is_not_found());
        assert!(!TmdbError::InvalidResponse("x".into()).is_not_found());
    }

    #[test]
    fn test_parse_payload_title() {
        let value = serde_json::json!({
            "id": 414906,
            "title": "The Batman",
            "poster_path": "/abc.jpg",
            "overview": "Gotham",
            "unconsumed_field": [1, 2, 3]
        });
        let meta: TitleMetadata = parse_payload(value).unwrap();
        assert_eq!(meta.id, 414906);
        assert_eq!(meta.title, "The Batman");
    }

    #[test]
    fn test_parse_payload_rejects_wrong_shape() {
        let value = serde_json::json!({"overview": "no id or title"});
        let result: Result<TitleMetadata, _> = parse_payload(value);
        assert!(matches!(result, Err(TmdbError::InvalidResponse(_))));
    }
}
