pub mod sqlite;

use crate::app::Result;
use crate::domain::NewsArticle;

pub use sqlite::SqliteStore;

/// Local article cache. The repository treats this as the canonical read
/// path after every successful fetch and as the fallback when offline.
pub trait CacheStore {
    /// Read up to `limit` articles, skipping the first `offset`, in stable
    /// id order. An offset past the end yields an empty page, not an error.
    fn read_page(&self, offset: u32, limit: u32) -> Result<Vec<NewsArticle>>;

    /// Insert each article, replacing any stored article with the same id.
    fn upsert(&self, articles: &[NewsArticle]) -> Result<()>;

    /// Delete every stored article. No-op when already empty.
    fn clear(&self) -> Result<()>;
}
