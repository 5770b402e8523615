use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// One image chosen for a slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResult {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

/// A stock-photo search backend. `Ok(None)` means the search had no hits.
#[async_trait]
pub trait PhotoSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Option<ImageResult>, AppError>;
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Photo>,
}

#[derive(Deserialize)]
struct Photo {
    urls: PhotoUrls,
    alt_description: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct PhotoUrls {
    regular: String,
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    value.filter(|s| !s.is_empty()).unwrap_or_else(|| fallback.to_string())
}

impl Photo {
    fn into_result(self, query: &str) -> ImageResult {
        ImageResult {
            src: self.urls.regular,
            alt: non_empty_or(self.alt_description, query),
            caption: non_empty_or(self.description, query),
        }
    }
}

/// Unsplash `search/photos`, first hit only.
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    client: reqwest::Client,
    api_url: String,
    access_key: String,
}

impl UnsplashClient {
    pub fn new(api_url: String, access_key: String, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, api_url, access_key })
    }
}

#[async_trait]
impl PhotoSearch for UnsplashClient {
    async fn search(&self, query: &str) -> Result<Option<ImageResult>, AppError> {
        if self.access_key.is_empty() {
            return Err(AppError::Generation("UNSPLASH_ACCESS_KEY is not configured".to_string()));
        }

        let url = format!("{}/search/photos", self.api_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .query(&[("query", query), ("per_page", "1")])
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Generation(format!("photo search returned {status}")));
        }

        let parsed: SearchResponse = response.json().await?;
        Ok(parsed.results.into_iter().next().map(|photo| photo.into_result(query)))
    }
}
