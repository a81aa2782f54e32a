//! Pexels backend implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::{BackendError, PhotoBackend};
use crate::photos::Photo;

/// Wire format of a Pexels list response (`/search` and `/curated`).
#[derive(Debug, Deserialize)]
pub struct PexelsResponse {
    #[serde(default)]
    pub photos: Vec<PexelsPhoto>,
}

#[derive(Debug, Deserialize)]
pub struct PexelsPhoto {
    pub url: String,
    pub photographer: String,
    pub photographer_url: String,
    #[serde(default)]
    pub avg_color: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    pub src: PexelsSource,
}

#[derive(Debug, Deserialize)]
pub struct PexelsSource {
    pub medium: String,
}

impl From<PexelsPhoto> for Photo {
    fn from(api_photo: PexelsPhoto) -> Self {
        Photo {
            photographer: api_photo.photographer,
            photographer_url: api_photo.photographer_url,
            url: api_photo.url,
            photo_url: api_photo.src.medium,
            alt: api_photo.alt.unwrap_or_default(),
            avg_color: api_photo.avg_color.unwrap_or_default(),
        }
    }
}

/// Pexels REST client.
pub struct PexelsBackend {
    client: Client,
    base_url: String,
    api_key: String,
}

impl PexelsBackend {
    /// Create a new Pexels backend with the provided API key.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Other(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    async fn fetch(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Vec<Photo>, BackendError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("Pexels: GET {} {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .header("Authorization", &self.api_key)
            .query(params)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(BackendError::Auth(format!("Pexels rejected the API key ({})", response.status())));
            }
            status if !status.is_success() => {
                return Err(BackendError::Network(format!("Pexels returned {}", status)));
            }
            _ => {}
        }

        let body = response.text().await.map_err(|e| BackendError::Network(e.to_string()))?;
        parse_photos(&body)
    }
}

/// Decode a Pexels list response body into photos, preserving order.
pub fn parse_photos(body: &str) -> Result<Vec<Photo>, BackendError> {
    let parsed: PexelsResponse = serde_json::from_str(body).map_err(|e| BackendError::InvalidData(e.to_string()))?;
    Ok(parsed.photos.into_iter().map(Photo::from).collect())
}

#[async_trait]
impl PhotoBackend for PexelsBackend {
    fn backend_type(&self) -> &str {
        "pexels"
    }

    async fn search(&self, query: &str, per_page: u32) -> Result<Vec<Photo>, BackendError> {
        self.fetch(
            "search",
            &[("query", query.to_string()), ("per_page", per_page.to_string())],
        )
        .await
    }

    async fn curated(&self, per_page: u32) -> Result<Vec<Photo>, BackendError> {
        self.fetch("curated", &[("per_page", per_page.to_string())]).await
    }
}
