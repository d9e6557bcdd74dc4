//! Insight REST API integration.

pub mod client;
pub mod messages;

pub use client::InsightClient;
