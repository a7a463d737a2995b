use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// A single image attached to an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// One news article as delivered by the remote endpoint and persisted in the
/// cache. Immutable once constructed; `id` is stable across fetches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub author: String,
    #[serde(rename = "isLocal")]
    pub is_local: bool,
    /// Unix timestamp in milliseconds (the endpoint emits epoch-millis).
    #[serde(rename = "publishedAtUnix")]
    pub published_at_unix: i64,
    pub media: Option<Media>,
}

impl NewsArticle {
    /// Publication date as "MMM dd, yyyy", e.g. "Jan 15, 2024".
    pub fn published_date(&self) -> String {
        DateTime::from_timestamp_millis(self.published_at_unix)
            .map(|dt| dt.format("%b %d, %Y").to_string())
            .unwrap_or_default()
    }

    pub fn media_url(&self) -> Option<&str> {
        self.media.as_ref().map(|m| m.image_url.as_str())
    }
}
