//! One-shot search flow state machine.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::core::poller::QuotePoller;
use crate::models::Quote;

/// Lifecycle of a symbol search, as seen by the presentation layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Success(Quote),
    Error(String),
}

/// Drives [`SearchState`] around one-shot fetches.
///
/// Blank input is ignored here rather than surfaced as an error; the
/// watchlist's `add` deliberately does not share that check and stores
/// whatever the user typed.
pub struct SearchController {
    poller: Arc<QuotePoller>,
    state: watch::Sender<SearchState>,
}

impl SearchController {
    pub fn new(poller: Arc<QuotePoller>) -> Self {
        let (state, _) = watch::channel(SearchState::Idle);
        Self { poller, state }
    }

    /// Current state snapshot.
    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Subscribe to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Search for `symbol`: Loading, then Success with the cached quote
    /// or Error with a display message. Blank input leaves the current
    /// state untouched.
    pub async fn search(&self, symbol: &str) {
        if symbol.trim().is_empty() {
            debug!("ignoring blank search input");
            return;
        }

        self.state.send_replace(SearchState::Loading);
        let next = match self.poller.fetch_once(symbol).await {
            Ok(quote) => SearchState::Success(quote),
            Err(e) => SearchState::Error(e.to_string()),
        };
        self.state.send_replace(next);
    }

    /// Back to idle, e.g. when the search view is dismissed.
    pub fn reset(&self) {
        self.state.send_replace(SearchState::Idle);
    }
}
