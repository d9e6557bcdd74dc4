//! Quote provider seam and its error taxonomy.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewsArticle, Quote};

/// Errors surfaced by one-shot fetch operations.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network, timeout, HTTP status, or malformed-body failure.
    #[error("request failed: {0}")]
    Transport(String),

    /// The request succeeded but carried no record for the symbol.
    #[error("no data for {symbol}: {message}")]
    NoData { symbol: String, message: String },
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

/// Outcome of a quote request: the mapped records plus the server's
/// status message, kept around for error reporting on empty results.
#[derive(Debug, Clone, Default)]
pub struct QuoteBatch {
    pub message: Option<String>,
    pub quotes: Vec<Quote>,
}

/// Data source for quotes and news.
///
/// One call is one HTTP round-trip; callers batch by passing a
/// comma-joined symbol list.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Latest quotes for a comma-separated symbol list.
    async fn latest_quotes(&self, symbol_csv: &str) -> Result<QuoteBatch, FetchError>;

    /// Latest market news headlines. An empty feed is a valid response.
    async fn latest_news(&self) -> Result<Vec<NewsArticle>, FetchError>;
}
