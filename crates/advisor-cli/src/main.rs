//! Command-line driver for the advisor-rs pipeline
//!
//! Runs the five stages for one ticker/article pair and prints the report.
//! Strictly a demonstration; the suggestion is a toy, not financial advice.

use advisor_llm::OpenAiProvider;
use advisor_market::{MarketConfig, StockDataAgent};
use advisor_news::{NewsAgent, NewsConfig};
use advisor_nlp::{
    ExtractiveSummarizer, KeywordClassifier, LlmClassifier, LlmSummarizer, SentimentClassifier,
    Summarizer,
};
use advisor_pipeline::{Pipeline, PipelineReport, PipelineRequest};
use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use comfy_table::Table;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SummarizerKind {
    /// First-N-sentences extractive summarizer
    Extractive,
    /// LLM-backed summarizer (needs OPENAI_API_KEY)
    Llm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ClassifierKind {
    /// Deterministic keyword-count classifier
    Keyword,
    /// LLM-backed classifier (needs OPENAI_API_KEY)
    Llm,
}

#[derive(Parser, Debug)]
#[command(name = "advisor")]
#[command(about = "Toy news-to-decision pipeline for a stock ticker", long_about = None)]
struct Args {
    /// Ticker symbol to analyze, e.g. AAPL or ^GSPC
    ticker: String,

    /// Fetch the article from this URL
    #[arg(long, conflicts_with = "text")]
    url: Option<String>,

    /// Use this pasted article body instead of fetching
    #[arg(long)]
    text: Option<String>,

    /// Title for a pasted article
    #[arg(long, requires = "text")]
    title: Option<String>,

    /// Maximum sentences to keep in the summary
    #[arg(long, default_value_t = advisor_nlp::DEFAULT_MAX_SENTENCES)]
    sentences: usize,

    /// Trading rows to look back for the return calculation
    #[arg(long, default_value_t = 5)]
    lookback: usize,

    /// Price history range (5d, 1mo, 3mo, 6mo, 1y)
    #[arg(long, default_value = "1mo")]
    range: String,

    /// Summarizer variant
    #[arg(long, value_enum, default_value_t = SummarizerKind::Extractive)]
    summarizer: SummarizerKind,

    /// Sentiment classifier variant
    #[arg(long, value_enum, default_value_t = ClassifierKind::Keyword)]
    classifier: ClassifierKind,

    /// Model name for the LLM-backed variants
    #[arg(long, default_value = "gpt-4o-mini")]
    model: String,

    /// Emit the full report as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    advisor_core::init_tracing();

    let args = Args::parse();

    let request = match (&args.url, &args.text) {
        (Some(url), None) => PipelineRequest::from_url(&args.ticker, url),
        (None, Some(text)) => PipelineRequest::manual(
            &args.ticker,
            args.title.as_deref().unwrap_or("Untitled article"),
            text,
        ),
        (None, None) => bail!("provide an article via --url or --text"),
        (Some(_), Some(_)) => unreachable!("clap rejects --url with --text"),
    };

    let market_config = MarketConfig::default()
        .with_range(&args.range)
        .with_lookback(args.lookback);
    market_config.validate().context("invalid market options")?;

    let needs_llm =
        args.summarizer == SummarizerKind::Llm || args.classifier == ClassifierKind::Llm;
    let provider = if needs_llm {
        // Built once per process and shared by both LLM-backed stages
        Some(Arc::new(
            OpenAiProvider::from_env().context("LLM variants need OPENAI_API_KEY")?,
        ))
    } else {
        None
    };

    let summarizer: Arc<dyn Summarizer> = match args.summarizer {
        SummarizerKind::Extractive => Arc::new(ExtractiveSummarizer::new(args.sentences)?),
        SummarizerKind::Llm => Arc::new(LlmSummarizer::new(
            provider.clone().expect("provider built above"),
            &args.model,
            args.sentences,
        )?),
    };

    let classifier: Arc<dyn SentimentClassifier> = match args.classifier {
        ClassifierKind::Keyword => Arc::new(KeywordClassifier::new()),
        ClassifierKind::Llm => Arc::new(LlmClassifier::new(
            provider.expect("provider built above"),
            &args.model,
        )),
    };

    let pipeline = Pipeline::builder()
        .market(StockDataAgent::yahoo(market_config))
        .news(NewsAgent::http(&NewsConfig::default())?)
        .summarizer(summarizer)
        .classifier(classifier)
        .build()?;

    info!(ticker = %args.ticker, "running pipeline");
    let report = pipeline.run(&request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(&report);
    }

    Ok(())
}

fn print_table(report: &PipelineReport) {
    let confidence = report
        .sentiment
        .confidence
        .map_or_else(|| "-".to_string(), |c| format!("{c:.2}"));

    let mut table = Table::new();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["Ticker".to_string(), report.snapshot.ticker.clone()]);
    table.add_row(vec![
        "Recent return".to_string(),
        format!("{:.2}%", report.snapshot.recent_return * 100.0),
    ]);
    table.add_row(vec!["Article".to_string(), report.article.title.clone()]);
    table.add_row(vec!["Source".to_string(), report.article.source.to_string()]);
    table.add_row(vec!["Summary".to_string(), report.summary.text.clone()]);
    table.add_row(vec![
        "Sentiment".to_string(),
        format!("{} ({confidence})", report.sentiment.label),
    ]);
    table.add_row(vec![
        "Suggestion".to_string(),
        report.decision.suggestion.to_string(),
    ]);
    table.add_row(vec!["Rationale".to_string(), report.decision.rationale.clone()]);
    println!("{table}");
}
