//! Background refresh loop and one-shot fetch-and-cache.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::core::store::QuoteStore;
use crate::models::Quote;
use crate::services::provider::{FetchError, QuoteProvider};

/// Keeps the watchlist fresh by polling the quote provider.
///
/// At most one refresh loop is active per poller: `start` replaces any
/// prior loop, and `stop` signals shutdown then waits until the loop
/// task has actually exited, so stop-then-start cannot leave two loops
/// racing on the cache.
pub struct QuotePoller {
    provider: Arc<dyn QuoteProvider>,
    store: Arc<QuoteStore>,
    refresh: RwLock<Option<RefreshTask>>,
}

struct RefreshTask {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl QuotePoller {
    pub fn new(provider: Arc<dyn QuoteProvider>, store: Arc<QuoteStore>) -> Self {
        Self {
            provider,
            store,
            refresh: RwLock::new(None),
        }
    }

    pub fn store(&self) -> &Arc<QuoteStore> {
        &self.store
    }

    /// Fetch one symbol and cache the first returned record under the
    /// symbol the server reports, which may differ from the queried
    /// form. Zero records is a [`FetchError::NoData`] and leaves the
    /// cache untouched.
    pub async fn fetch_once(&self, symbol: &str) -> Result<Quote, FetchError> {
        let queried = QuoteStore::normalize(symbol);
        let batch = self.provider.latest_quotes(&queried).await?;

        match batch.quotes.into_iter().next() {
            Some(quote) => {
                debug!(symbol = %quote.symbol, price = quote.price, "cached one-shot quote");
                self.store.upsert(quote.clone());
                Ok(quote)
            }
            None => Err(FetchError::NoData {
                symbol: queried,
                message: batch
                    .message
                    .unwrap_or_else(|| "empty response".to_string()),
            }),
        }
    }

    /// Start the background refresh loop, replacing any prior one.
    ///
    /// Each tick snapshots the watchlist, batches it into one request,
    /// and merges every returned record into the cache; an empty
    /// watchlist skips the request. A failed tick is logged and never
    /// stops the loop. The interval runs from the end of one tick to
    /// the start of the next; the first tick fires immediately.
    pub async fn start(&self, interval: Duration) {
        let mut slot = self.refresh.write().await;
        stop_task(&mut slot).await;

        let (shutdown, mut shutdown_rx) = watch::channel(false);
        let provider = self.provider.clone();
        let store = self.store.clone();

        let handle = tokio::spawn(async move {
            info!(interval_secs = interval.as_secs(), "refresh loop started");
            loop {
                tokio::select! {
                    _ = refresh_tick(provider.as_ref(), &store) => {}
                    _ = shutdown_rx.changed() => break,
                }
                tokio::select! {
                    _ = tokio::time::sleep(interval) => {}
                    _ = shutdown_rx.changed() => break,
                }
            }
            info!("refresh loop stopped");
        });

        *slot = Some(RefreshTask { shutdown, handle });
    }

    /// Stop the refresh loop and wait for it to exit. Safe to call when
    /// not running.
    pub async fn stop(&self) {
        let mut slot = self.refresh.write().await;
        stop_task(&mut slot).await;
    }

    /// Whether a refresh loop is currently active.
    pub async fn is_running(&self) -> bool {
        self.refresh.read().await.is_some()
    }
}

async fn stop_task(slot: &mut Option<RefreshTask>) {
    if let Some(task) = slot.take() {
        let _ = task.shutdown.send(true);
        if let Err(e) = task.handle.await {
            warn!(error = %e, "refresh task did not exit cleanly");
        }
    }
}

/// One pass over the watchlist. Failures are contained here.
async fn refresh_tick(provider: &dyn QuoteProvider, store: &QuoteStore) {
    let symbols = store.watchlist();
    if symbols.is_empty() {
        debug!("watchlist empty, skipping refresh tick");
        return;
    }

    let csv = symbols.join(",");
    match provider.latest_quotes(&csv).await {
        Ok(batch) => {
            debug!(
                requested = symbols.len(),
                received = batch.quotes.len(),
                "merged refresh batch"
            );
            store.merge(batch.quotes);
        }
        Err(e) => {
            warn!(error = %e, "refresh tick failed");
        }
    }
}
