use serde::{Deserialize, Serialize};

/// A single headline from the provider's news feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: String,
    pub headline: String,
    pub summary: String,
    pub url: String,
    pub published: String,
}
