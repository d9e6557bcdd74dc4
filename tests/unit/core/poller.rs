//! Unit tests for one-shot fetch-and-cache

use std::sync::Arc;

use tokio_test::{assert_err, assert_ok};

use tickwatch::core::{QuotePoller, QuoteStore};
use tickwatch::services::{FetchError, QuoteBatch};

use crate::test_utils::{batch, quote, ScriptedProvider};

fn poller_with(
    outcomes: Vec<Result<QuoteBatch, FetchError>>,
) -> (Arc<ScriptedProvider>, QuotePoller) {
    let provider = Arc::new(ScriptedProvider::new(outcomes));
    let store = Arc::new(QuoteStore::new());
    let poller = QuotePoller::new(provider.clone(), store);
    (provider, poller)
}

#[tokio::test]
async fn test_fetch_once_caches_under_server_symbol() {
    let (provider, poller) = poller_with(vec![Ok(batch(vec![quote("AAPL", 150.0)]))]);

    let fetched = tokio_test::assert_ok!(poller.fetch_once(" aapl ").await);

    assert_eq!(fetched.price, 150.0);
    // the request goes out canonicalized, the cache key comes from the
    // server's record
    assert_eq!(provider.calls(), vec!["AAPL"]);
    assert_eq!(poller.store().quote("AAPL"), Some(fetched));
}

#[tokio::test]
async fn test_fetch_once_trusts_server_canonicalization() {
    let (_, poller) = poller_with(vec![Ok(batch(vec![quote("AAPL.US", 150.0)]))]);

    let fetched = tokio_test::assert_ok!(poller.fetch_once("aapl").await);

    assert_eq!(fetched.symbol, "AAPL.US");
    assert!(poller.store().quote("AAPL.US").is_some());
    assert!(poller.store().quote("AAPL").is_none());
}

#[tokio::test]
async fn test_fetch_once_empty_response_is_no_data() {
    let (_, poller) = poller_with(vec![Ok(QuoteBatch {
        message: Some("no quotes found".to_string()),
        quotes: Vec::new(),
    })]);

    let err = tokio_test::assert_err!(poller.fetch_once("ZZZZ").await);

    assert!(matches!(err, FetchError::NoData { .. }));
    let message = err.to_string();
    assert!(message.contains("ZZZZ"), "got: {message}");
    assert!(message.contains("no quotes found"), "got: {message}");
    assert!(poller.store().quotes().is_empty());
}

#[tokio::test]
async fn test_fetch_once_empty_response_without_server_message() {
    let (_, poller) = poller_with(vec![Ok(QuoteBatch::default())]);

    let err = tokio_test::assert_err!(poller.fetch_once("ZZZZ").await);
    assert!(err.to_string().contains("empty response"));
}

#[tokio::test]
async fn test_fetch_once_transport_error_keeps_cache() {
    let (_, poller) = poller_with(vec![Err(FetchError::Transport(
        "connection refused".to_string(),
    ))]);

    let err = tokio_test::assert_err!(poller.fetch_once("AAPL").await);

    assert!(err.to_string().contains("connection refused"));
    assert!(poller.store().quotes().is_empty());
}

#[tokio::test]
async fn test_fetch_once_uses_first_record_only() {
    let (_, poller) = poller_with(vec![Ok(batch(vec![
        quote("AAPL", 150.0),
        quote("MSFT", 300.0),
    ]))]);

    let fetched = tokio_test::assert_ok!(poller.fetch_once("AAPL").await);

    assert_eq!(fetched.symbol, "AAPL");
    assert!(poller.store().quote("MSFT").is_none());
}
