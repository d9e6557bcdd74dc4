use serde::{Deserialize, Serialize};

/// A point-in-time price snapshot for a single symbol.
///
/// Immutable once mapped from a provider record. The symbol is the
/// server-reported one, canonicalized to uppercase; `timestamp` is the
/// server's display string and is never parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    pub currency: String,
    pub change: f64,
    pub change_percent: String,
    pub high: f64,
    pub low: f64,
    pub exchange: String,
    pub timestamp: String,
}

impl Quote {
    /// True when the day's change is flat or positive.
    pub fn is_gain(&self) -> bool {
        self.change >= 0.0
    }
}
