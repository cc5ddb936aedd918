//! Article fetchers

use crate::error::NewsError;
use crate::html;
use advisor_core::{Article, ArticleSource};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

/// Configuration for HTTP article fetching
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsConfig {
    /// Request timeout duration
    pub request_timeout: Duration,

    /// User-Agent header sent with requests
    pub user_agent: String,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
            user_agent: format!("advisor-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// A source of articles by URL
#[async_trait]
pub trait ArticleFetcher: Send + Sync {
    /// Fetch and extract an article from `url`
    async fn fetch(&self, url: &str) -> advisor_core::Result<Article>;

    /// Get the fetcher name (e.g., "http")
    fn name(&self) -> &str;
}

/// HTTP fetcher with naive HTML extraction
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher from configuration
    pub fn new(config: &NewsConfig) -> Result<Self, NewsError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ArticleFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> advisor_core::Result<Article> {
        let parsed =
            Url::parse(url).map_err(|e| NewsError::InvalidUrl(format!("{url}: {e}")))?;

        info!(%url, "fetching article");

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(NewsError::from)?;
        let body = response.text().await.map_err(NewsError::from)?;

        let title = html::extract_title(&body);
        let content = html::extract_paragraphs(&body);
        if content.is_empty() {
            warn!(%url, "page had no extractable paragraphs");
            return Err(NewsError::EmptyExtraction(url.to_string()).into());
        }

        info!(%title, "successfully parsed article");

        Article::new(
            title,
            content,
            ArticleSource::Url {
                url: url.to_string(),
            },
        )
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url_is_rejected() {
        let fetcher = HttpFetcher::new(&NewsConfig::default()).unwrap();
        let err = fetcher.fetch("not a url").await.unwrap_err();
        assert!(err.to_string().contains("invalid url"));
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_fetch_real_page() {
        let fetcher = HttpFetcher::new(&NewsConfig::default()).unwrap();
        let article = fetcher.fetch("https://example.com/").await.unwrap();
        assert!(!article.text.is_empty());
    }
}
