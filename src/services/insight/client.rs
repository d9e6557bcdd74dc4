//! reqwest-backed client for the Insight REST API.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::Config;
use crate::models::NewsArticle;
use crate::services::insight::messages::{LatestNewsResponse, LatestQuotesResponse};
use crate::services::provider::{FetchError, QuoteBatch, QuoteProvider};

/// HTTP client for the Insight quote API.
///
/// One instance owns one connection pool; share it via `Arc` instead of
/// constructing a client per call site.
#[derive(Clone)]
pub struct InsightClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl InsightClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl QuoteProvider for InsightClient {
    async fn latest_quotes(&self, symbol_csv: &str) -> Result<QuoteBatch, FetchError> {
        debug!(symbols = %symbol_csv, "requesting latest quotes");

        let envelope: LatestQuotesResponse = self
            .http
            .get(format!("{}/stock/latest", self.base_url))
            .query(&[
                ("symbol", symbol_csv),
                ("api_key", self.api_key.as_str()),
                ("output", "json"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(envelope.into_batch())
    }

    async fn latest_news(&self) -> Result<Vec<NewsArticle>, FetchError> {
        debug!("requesting latest news");

        let envelope: LatestNewsResponse = self
            .http
            .get(format!("{}/news/latest", self.base_url))
            .query(&[("api_key", self.api_key.as_str()), ("output", "json")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(envelope.into_articles())
    }
}
