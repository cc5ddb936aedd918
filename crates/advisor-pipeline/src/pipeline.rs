//! Pipeline definition and execution

use advisor_core::{Article, Decision, MarketSnapshot, Result, SentimentResult, Summary};
use advisor_decision::{DecisionRule, SignDecisionRule};
use advisor_market::{MarketConfig, StockDataAgent};
use advisor_news::{NewsAgent, NewsConfig};
use advisor_nlp::{ExtractiveSummarizer, KeywordClassifier, SentimentClassifier, Summarizer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Article input for a pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ArticleInput {
    /// Fetch the article from a URL
    Url(String),
    /// Use manually provided title and body text
    Manual { title: String, text: String },
}

/// Everything one pipeline run needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineRequest {
    /// Ticker to snapshot
    pub ticker: String,
    /// Article to analyze
    pub article: ArticleInput,
}

impl PipelineRequest {
    /// Build a request fetching the article from a URL
    pub fn from_url(ticker: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            article: ArticleInput::Url(url.into()),
        }
    }

    /// Build a request with a manually pasted article
    pub fn manual(
        ticker: impl Into<String>,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            article: ArticleInput::Manual {
                title: title.into(),
                text: text.into(),
            },
        }
    }
}

/// All five records from a completed run, for presentation and audit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineReport {
    pub snapshot: MarketSnapshot,
    pub article: Article,
    pub summary: Summary,
    pub sentiment: SentimentResult,
    pub decision: Decision,
}

/// The five-stage pipeline
///
/// Stages execute sequentially; the output record of each stage feeds the
/// next. A failed stage propagates its error immediately and no partial
/// report is produced.
pub struct Pipeline {
    market: StockDataAgent,
    news: NewsAgent,
    summarizer: Arc<dyn Summarizer>,
    classifier: Arc<dyn SentimentClassifier>,
    rule: Box<dyn DecisionRule>,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Execute one run
    pub async fn run(&self, request: &PipelineRequest) -> Result<PipelineReport> {
        info!(ticker = %request.ticker, "pipeline run starting");

        let snapshot = self.market.snapshot(&request.ticker).await?;

        let article = match &request.article {
            ArticleInput::Url(url) => self.news.from_url(url).await?,
            ArticleInput::Manual { title, text } => NewsAgent::from_manual(title, text)?,
        };

        let summary = self.summarizer.summarize(&article).await?;
        let sentiment = self.classifier.classify(&summary.text).await?;
        let decision = self.rule.decide(&snapshot, &sentiment)?;

        info!(suggestion = %decision.suggestion, "pipeline run complete");

        Ok(PipelineReport {
            snapshot,
            article,
            summary,
            sentiment,
            decision,
        })
    }
}

/// Builder for constructing pipelines
///
/// Every stage has a sensible default (Yahoo market data, HTTP news
/// fetching, extractive summarization, keyword sentiment, the sign rule);
/// override whichever stage the caller wants to swap.
pub struct PipelineBuilder {
    market: Option<StockDataAgent>,
    news: Option<NewsAgent>,
    summarizer: Option<Arc<dyn Summarizer>>,
    classifier: Option<Arc<dyn SentimentClassifier>>,
    rule: Option<Box<dyn DecisionRule>>,
}

impl PipelineBuilder {
    /// Create a new pipeline builder
    pub fn new() -> Self {
        Self {
            market: None,
            news: None,
            summarizer: None,
            classifier: None,
            rule: None,
        }
    }

    /// Set the market data agent
    pub fn market(mut self, agent: StockDataAgent) -> Self {
        self.market = Some(agent);
        self
    }

    /// Set the news agent
    pub fn news(mut self, agent: NewsAgent) -> Self {
        self.news = Some(agent);
        self
    }

    /// Set the summarizer
    pub fn summarizer(mut self, summarizer: Arc<dyn Summarizer>) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    /// Set the sentiment classifier
    pub fn classifier(mut self, classifier: Arc<dyn SentimentClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Set the decision rule
    pub fn rule(mut self, rule: Box<dyn DecisionRule>) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Build the pipeline, filling unset stages with defaults
    pub fn build(self) -> Result<Pipeline> {
        let news = match self.news {
            Some(agent) => agent,
            None => NewsAgent::http(&NewsConfig::default())
                .map_err(advisor_core::Error::from)?,
        };
        Ok(Pipeline {
            market: self
                .market
                .unwrap_or_else(|| StockDataAgent::yahoo(MarketConfig::default())),
            news,
            summarizer: self
                .summarizer
                .unwrap_or_else(|| Arc::new(ExtractiveSummarizer::default())),
            classifier: self
                .classifier
                .unwrap_or_else(|| Arc::new(KeywordClassifier::new())),
            rule: self.rule.unwrap_or_else(|| Box::new(SignDecisionRule::new())),
        })
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
