//! In-memory stock watchlist service.
//!
//! A cancellable background loop polls a REST quote endpoint for every
//! watch-listed symbol and keeps the latest quote per symbol cached and
//! observable. A one-shot search flow drives the same fetch-and-cache
//! path for a single symbol.

pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod services;
