//! In-memory watchlist and quote cache with observable state.

use std::collections::HashMap;

use tokio::sync::watch;

use crate::models::Quote;

/// Watchlist plus per-symbol quote cache.
///
/// State lives inside `watch` channels: every mutation is one atomic
/// `send_modify`, so subscribers never observe a half-applied merge and
/// late subscribers always see the current value. Concurrent writers
/// (a one-shot fetch racing a refresh tick) are last-write-wins; there
/// is no ordering guarantee between them.
///
/// Every key in the cache and every watchlist entry is canonical
/// uppercase. A watch-listed symbol with no cache entry is simply not
/// fetched yet, never an error.
pub struct QuoteStore {
    watchlist: watch::Sender<Vec<String>>,
    quotes: watch::Sender<HashMap<String, Quote>>,
}

impl QuoteStore {
    pub fn new() -> Self {
        let (watchlist, _) = watch::channel(Vec::new());
        let (quotes, _) = watch::channel(HashMap::new());
        Self { watchlist, quotes }
    }

    /// Canonical symbol form used for every key in the store.
    pub fn normalize(symbol: &str) -> String {
        symbol.trim().to_uppercase()
    }

    /// Append a symbol to the watchlist, preserving insertion order.
    /// No-op when already present.
    pub fn add(&self, symbol: &str) {
        let upper = Self::normalize(symbol);
        self.watchlist.send_if_modified(|list| {
            if list.contains(&upper) {
                false
            } else {
                list.push(upper.clone());
                true
            }
        });
    }

    /// Remove a symbol from the watchlist and evict its cached quote.
    /// Both halves are no-ops when the entry does not exist.
    pub fn remove(&self, symbol: &str) {
        let upper = Self::normalize(symbol);
        self.watchlist.send_if_modified(|list| {
            let before = list.len();
            list.retain(|s| s != &upper);
            list.len() != before
        });
        self.quotes
            .send_if_modified(|map| map.remove(&upper).is_some());
    }

    /// Store a quote under its own reported symbol, overwriting any
    /// previous entry.
    pub fn upsert(&self, quote: Quote) {
        self.quotes.send_modify(|map| {
            map.insert(quote.symbol.clone(), quote);
        });
    }

    /// Merge a batch of quotes in one atomic update.
    pub fn merge(&self, quotes: Vec<Quote>) {
        if quotes.is_empty() {
            return;
        }
        self.quotes.send_modify(|map| {
            for quote in quotes {
                map.insert(quote.symbol.clone(), quote);
            }
        });
    }

    /// Current watchlist, in insertion order.
    pub fn watchlist(&self) -> Vec<String> {
        self.watchlist.borrow().clone()
    }

    /// Current cache contents.
    pub fn quotes(&self) -> HashMap<String, Quote> {
        self.quotes.borrow().clone()
    }

    /// Cached quote for one symbol, if fetched yet.
    pub fn quote(&self, symbol: &str) -> Option<Quote> {
        self.quotes.borrow().get(&Self::normalize(symbol)).cloned()
    }

    /// Subscribe to watchlist updates.
    pub fn subscribe_watchlist(&self) -> watch::Receiver<Vec<String>> {
        self.watchlist.subscribe()
    }

    /// Subscribe to quote-cache updates.
    pub fn subscribe_quotes(&self) -> watch::Receiver<HashMap<String, Quote>> {
        self.quotes.subscribe()
    }
}

impl Default for QuoteStore {
    fn default() -> Self {
        Self::new()
    }
}
