use std::collections::HashSet;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

const GNEWS_ENDPOINT: &str = "https://gnews.io/api/v4/search";
const NEWSAPI_ENDPOINT: &str = "https://newsapi.org/v2/everything";

/// A discovered article reference used as evidence for the claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceItem {
    pub title: String,
    pub url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(StatusCode),
}

/// A news-search backend. Failures are reported so the aggregator can map
/// them to an empty contribution instead of failing the request.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    fn name(&self) -> &'static str;
    async fn search(&self, query: &str) -> Result<Vec<SourceItem>, ProviderError>;
}

/// Wire shape shared by both providers: `{ "articles": [ { title, url, ... } ] }`.
#[derive(Deserialize)]
struct ArticlesBody {
    #[serde(default)]
    articles: Vec<SourceItem>,
}

pub struct GNewsClient {
    client: Client,
    api_key: String,
}

impl GNewsClient {
    pub fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

#[async_trait]
impl SearchProvider for GNewsClient {
    fn name(&self) -> &'static str {
        "gnews"
    }

    async fn search(&self, query: &str) -> Result<Vec<SourceItem>, ProviderError> {
        let response = self
            .client
            .get(GNEWS_ENDPOINT)
            .query(&[
                ("q", query),
                ("lang", "es"),
                ("max", "10"),
                ("token", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(ProviderError::Status(response.status()));
        }

        let body: ArticlesBody = response.json().await?;
        Ok(body.articles)
    }
}

pub struct NewsApiClient {
    client: Client,
    api_key: String,
}

impl NewsApiClient {
    pub fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

#[async_trait]
impl SearchProvider for NewsApiClient {
    fn name(&self) -> &'static str {
        "newsapi"
    }

    async fn search(&self, query: &str) -> Result<Vec<SourceItem>, ProviderError> {
        let response = self
            .client
            .get(NEWSAPI_ENDPOINT)
            .query(&[
                ("q", query),
                ("language", "es"),
                ("pageSize", "10"),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(ProviderError::Status(response.status()));
        }

        let body: ArticlesBody = response.json().await?;
        Ok(body.articles)
    }
}

/// Keeps only the first occurrence of each URL, preserving encounter order.
pub fn dedup_by_url(sources: Vec<SourceItem>) -> Vec<SourceItem> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(sources.len());

    for src in sources {
        if seen.insert(src.url.clone()) {
            unique.push(src);
        }
    }

    unique
}
