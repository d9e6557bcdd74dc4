//! Tickwatch Watcher
//!
//! Keeps the in-memory quote cache fresh for every watch-listed symbol
//! until shutdown. Seed symbols come from the WATCHLIST environment
//! variable (comma-separated).

use std::env;
use std::sync::Arc;

use dotenvy::dotenv;
use tickwatch::config::{self, Config};
use tickwatch::core::{QuotePoller, QuoteStore};
use tickwatch::logging;
use tickwatch::services::InsightClient;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    // Initialize logging based on environment
    logging::init_logging();

    let env_name = config::get_environment();
    info!("Starting Tickwatch Watcher");
    info!(environment = %env_name, "Environment");

    let config =
        Config::from_env().map_err(|_| "INSIGHT_API_KEY must be set for the watcher")?;

    let seed_symbols: Vec<String> = env::var("WATCHLIST")
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let client = Arc::new(InsightClient::new(&config)?);
    let store = Arc::new(QuoteStore::new());

    if seed_symbols.is_empty() {
        warn!("WATCHLIST is empty - refresh ticks are skipped until symbols are added");
    } else {
        info!(symbols = ?seed_symbols, "Seeding watchlist with {} symbols", seed_symbols.len());
        for symbol in &seed_symbols {
            store.add(symbol);
        }
    }

    let poller = Arc::new(QuotePoller::new(client, store.clone()));
    poller.start(config.refresh_interval).await;
    info!(
        interval_secs = config.refresh_interval.as_secs(),
        "Auto refresh: every {} seconds",
        config.refresh_interval.as_secs()
    );

    // Surface cache updates in the logs so a headless run is observable.
    let mut quotes_rx = store.subscribe_quotes();
    tokio::spawn(async move {
        while quotes_rx.changed().await.is_ok() {
            let cached = quotes_rx.borrow_and_update().len();
            info!(cached, "quote cache updated");
        }
    });

    info!("Watcher started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down watcher...");
            poller.stop().await;
            info!("Watcher stopped");
        }
    }

    Ok(())
}
