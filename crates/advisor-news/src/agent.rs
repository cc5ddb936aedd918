//! News agent: URL fetch or manual passthrough

use crate::error::NewsError;
use crate::fetcher::{ArticleFetcher, HttpFetcher, NewsConfig};
use advisor_core::{Article, ArticleSource};
use std::sync::Arc;
use tracing::info;

/// Agent responsible for producing an `Article` for the pipeline
///
/// Two modes, matching the demo's needs: fetch a page over HTTP, or accept
/// a manually pasted title and body.
pub struct NewsAgent {
    fetcher: Arc<dyn ArticleFetcher>,
}

impl NewsAgent {
    /// Create an agent over an explicit fetcher
    pub fn new(fetcher: Arc<dyn ArticleFetcher>) -> Self {
        Self { fetcher }
    }

    /// Create an agent backed by the HTTP fetcher
    pub fn http(config: &NewsConfig) -> Result<Self, NewsError> {
        Ok(Self::new(Arc::new(HttpFetcher::new(config)?)))
    }

    /// Fetch and extract an article from a URL
    pub async fn from_url(&self, url: &str) -> advisor_core::Result<Article> {
        self.fetcher.fetch(url).await
    }

    /// Build an article from manually provided text
    ///
    /// Useful when scraping is not possible or not desired; paste the
    /// article text and go.
    pub fn from_manual(title: &str, text: &str) -> advisor_core::Result<Article> {
        info!(title, "creating article from manual input");
        Article::new(title, text, ArticleSource::Manual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedFetcher;

    #[async_trait]
    impl ArticleFetcher for FixedFetcher {
        async fn fetch(&self, url: &str) -> advisor_core::Result<Article> {
            Article::new(
                "Fixed",
                "Body text.",
                ArticleSource::Url {
                    url: url.to_string(),
                },
            )
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[tokio::test]
    async fn test_from_url_delegates_to_fetcher() {
        let agent = NewsAgent::new(Arc::new(FixedFetcher));
        let article = agent.from_url("https://example.com/a").await.unwrap();
        assert_eq!(article.title, "Fixed");
        assert_eq!(
            article.source,
            ArticleSource::Url {
                url: "https://example.com/a".to_string()
            }
        );
    }

    #[test]
    fn test_from_manual_normalizes() {
        let article = NewsAgent::from_manual(" Rally\n", "  Stocks  rose.  ").unwrap();
        assert_eq!(article.title, "Rally");
        assert_eq!(article.text, "Stocks rose.");
        assert_eq!(article.source, ArticleSource::Manual);
    }

    #[test]
    fn test_from_manual_rejects_empty_body() {
        let err = NewsAgent::from_manual("Rally", "   ").unwrap_err();
        assert_eq!(err.to_string(), "empty article");
    }
}
