//! Shared helpers for unit tests

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tickwatch::models::{NewsArticle, Quote};
use tickwatch::services::{FetchError, QuoteBatch, QuoteProvider};

/// Provider that replays canned outcomes, one per call, and records the
/// symbol lists it was asked for. Once the script runs out it returns
/// empty batches.
pub struct ScriptedProvider {
    outcomes: Mutex<VecDeque<Result<QuoteBatch, FetchError>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new(outcomes: Vec<Result<QuoteBatch, FetchError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuoteProvider for ScriptedProvider {
    async fn latest_quotes(&self, symbol_csv: &str) -> Result<QuoteBatch, FetchError> {
        self.calls.lock().unwrap().push(symbol_csv.to_string());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(QuoteBatch::default()))
    }

    async fn latest_news(&self) -> Result<Vec<NewsArticle>, FetchError> {
        Ok(Vec::new())
    }
}

pub fn quote(symbol: &str, price: f64) -> Quote {
    Quote {
        symbol: symbol.to_string(),
        price,
        currency: "USD".to_string(),
        change: 0.5,
        change_percent: "0.33%".to_string(),
        high: price + 1.0,
        low: price - 1.0,
        exchange: "NASDAQ".to_string(),
        timestamp: "2023-11-14 12:00:00".to_string(),
    }
}

pub fn batch(quotes: Vec<Quote>) -> QuoteBatch {
    QuoteBatch {
        message: Some("Successfully".to_string()),
        quotes,
    }
}
