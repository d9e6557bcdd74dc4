//! Wire types for the Insight REST payloads.
//!
//! Every field may be absent or null on the wire; mapping substitutes
//! defaults instead of rejecting the whole response.

use serde::Deserialize;

use crate::models::{NewsArticle, Quote};
use crate::services::provider::QuoteBatch;

/// Envelope of `GET /stock/latest`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LatestQuotesResponse {
    #[serde(default)]
    pub status: Option<bool>,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub response: Option<Vec<QuoteRecord>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "h", default)]
    pub high: Option<f64>,
    #[serde(rename = "l", default)]
    pub low: Option<f64>,
    #[serde(rename = "c", default)]
    pub price: Option<f64>,
    #[serde(rename = "cty", default)]
    pub country: Option<String>,
    #[serde(rename = "ccy", default)]
    pub currency: Option<String>,
    #[serde(rename = "exch", default)]
    pub exchange: Option<String>,
    #[serde(rename = "ch", default)]
    pub change: Option<f64>,
    #[serde(rename = "cp", default)]
    pub change_percent: Option<String>,
    #[serde(rename = "t", default)]
    pub unix_time: Option<i64>,
    #[serde(rename = "s", default)]
    pub symbol: Option<String>,
    #[serde(rename = "tm", default)]
    pub timestamp: Option<String>,
}

/// Envelope of `GET /news/latest`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LatestNewsResponse {
    #[serde(default)]
    pub status: Option<bool>,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub response: Option<Vec<NewsRecord>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub published: Option<String>,
}

impl LatestQuotesResponse {
    /// Map into the provider batch, dropping records the server did not
    /// attribute to a symbol.
    pub fn into_batch(self) -> QuoteBatch {
        QuoteBatch {
            message: self.msg,
            quotes: self
                .response
                .unwrap_or_default()
                .into_iter()
                .filter_map(QuoteRecord::into_quote)
                .collect(),
        }
    }
}

impl QuoteRecord {
    /// Map to the domain model, keyed by the server-reported symbol.
    ///
    /// The server's symbol wins over whatever was queried; batch
    /// responses are not guaranteed to echo request order or casing.
    pub fn into_quote(self) -> Option<Quote> {
        let symbol = self.symbol?.trim().to_uppercase();
        Some(Quote {
            symbol,
            price: self.price.unwrap_or_default(),
            currency: self.currency.unwrap_or_default(),
            change: self.change.unwrap_or_default(),
            change_percent: self.change_percent.unwrap_or_default(),
            high: self.high.unwrap_or_default(),
            low: self.low.unwrap_or_default(),
            exchange: self.exchange.unwrap_or_default(),
            timestamp: self.timestamp.unwrap_or_default(),
        })
    }
}

impl LatestNewsResponse {
    pub fn into_articles(self) -> Vec<NewsArticle> {
        self.response
            .unwrap_or_default()
            .into_iter()
            .map(NewsRecord::into_article)
            .collect()
    }
}

impl NewsRecord {
    pub fn into_article(self) -> NewsArticle {
        NewsArticle {
            id: self.id.unwrap_or_default(),
            headline: self.headline.unwrap_or_default(),
            summary: self.summary.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
            published: self.published.unwrap_or_default(),
        }
    }
}
