use std::sync::Arc;

use crate::app::Result;
use crate::domain::NewsArticle;
use crate::remote::{RemoteError, RemoteSource};
use crate::store::CacheStore;

/// Orchestrates the remote fetch and the local cache.
///
/// Every successful fetch re-synchronizes the whole cache (the endpoint
/// returns the full collection) and the returned page is always read back
/// from the cache, so offsets and limits are honored consistently no matter
/// how the remote orders its payload. A connection failure degrades to the
/// cached page; every other remote failure is surfaced as-is.
pub struct NewsRepository {
    remote: Arc<dyn RemoteSource + Send + Sync>,
    store: Arc<dyn CacheStore + Send + Sync>,
}

impl NewsRepository {
    pub fn new(
        remote: Arc<dyn RemoteSource + Send + Sync>,
        store: Arc<dyn CacheStore + Send + Sync>,
    ) -> Self {
        Self { remote, store }
    }

    /// Fetch one page of news. `page` is 1-based.
    pub async fn get_news(&self, page: u32, page_size: u32) -> Result<Vec<NewsArticle>> {
        let offset = (page - 1) * page_size;

        match self.remote.fetch_news().await {
            Ok(articles) => {
                // Fresh data supersedes any stale cache on a first-page load
                if page == 1 {
                    self.store.clear()?;
                }
                self.store.upsert(&articles)?;
                Ok(self.store.read_page(offset, page_size)?)
            }
            Err(RemoteError::Connection) => {
                tracing::info!("offline, serving page {} from cache", page);
                Ok(self.store.read_page(offset, page_size)?)
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::app::NewsreelError;
    use crate::store::SqliteStore;

    struct FakeRemote {
        outcome: std::result::Result<Vec<NewsArticle>, RemoteError>,
        calls: Mutex<u32>,
    }

    impl FakeRemote {
        fn ok(articles: Vec<NewsArticle>) -> Self {
            Self {
                outcome: Ok(articles),
                calls: Mutex::new(0),
            }
        }

        fn err(error: RemoteError) -> Self {
            Self {
                outcome: Err(error),
                calls: Mutex::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl RemoteSource for FakeRemote {
        async fn fetch_news(&self) -> std::result::Result<Vec<NewsArticle>, RemoteError> {
            *self.calls.lock().unwrap() += 1;
            self.outcome.clone()
        }
    }

    /// Records every store call so tests can assert call order and arguments.
    #[derive(Default)]
    struct RecordingStore {
        log: Mutex<Vec<String>>,
    }

    impl CacheStore for RecordingStore {
        fn read_page(&self, offset: u32, limit: u32) -> Result<Vec<NewsArticle>> {
            self.log
                .lock()
                .unwrap()
                .push(format!("read_page({}, {})", offset, limit));
            Ok(Vec::new())
        }

        fn upsert(&self, articles: &[NewsArticle]) -> Result<()> {
            self.log
                .lock()
                .unwrap()
                .push(format!("upsert({})", articles.len()));
            Ok(())
        }

        fn clear(&self) -> Result<()> {
            self.log.lock().unwrap().push("clear".into());
            Ok(())
        }
    }

    fn article(id: i64) -> NewsArticle {
        NewsArticle {
            id,
            title: format!("Title {}", id),
            description: "d".into(),
            author: "a".into(),
            is_local: false,
            published_at_unix: 1_748_107_452_000,
            media: None,
        }
    }

    fn collection(n: i64) -> Vec<NewsArticle> {
        (1..=n).map(article).collect()
    }

    #[tokio::test]
    async fn test_page_one_clears_before_upsert() {
        let store = Arc::new(RecordingStore::default());
        let repo = NewsRepository::new(Arc::new(FakeRemote::ok(collection(3))), store.clone());

        repo.get_news(1, 5).await.unwrap();

        let log = store.log.lock().unwrap();
        assert_eq!(*log, vec!["clear", "upsert(3)", "read_page(0, 5)"]);
    }

    #[tokio::test]
    async fn test_later_pages_do_not_clear() {
        let store = Arc::new(RecordingStore::default());
        let repo = NewsRepository::new(Arc::new(FakeRemote::ok(collection(8))), store.clone());

        repo.get_news(2, 5).await.unwrap();

        let log = store.log.lock().unwrap();
        assert_eq!(*log, vec!["upsert(8)", "read_page(5, 5)"]);
    }

    #[tokio::test]
    async fn test_offset_is_page_minus_one_times_page_size() {
        let store = Arc::new(RecordingStore::default());
        let repo = NewsRepository::new(Arc::new(FakeRemote::ok(collection(0))), store.clone());

        repo.get_news(4, 7).await.unwrap();

        let log = store.log.lock().unwrap();
        assert!(log.contains(&"read_page(21, 7)".to_string()));
    }

    #[tokio::test]
    async fn test_returned_page_comes_from_cache() {
        let store = Arc::new(SqliteStore::in_memory().unwrap());
        // Pre-existing cache rows disappear on a page-1 fetch
        store.upsert(&[article(99)]).unwrap();

        let repo = NewsRepository::new(Arc::new(FakeRemote::ok(collection(8))), store.clone());

        let page = repo.get_news(1, 5).await.unwrap();
        assert_eq!(page.len(), 5);
        assert_eq!(page[0].id, 1);

        let page2 = repo.get_news(2, 5).await.unwrap();
        assert_eq!(page2.len(), 3);
        assert_eq!(page2[0].id, 6);
    }

    #[tokio::test]
    async fn test_connection_error_falls_back_to_cache() {
        let store = Arc::new(SqliteStore::in_memory().unwrap());
        store.upsert(&collection(8)).unwrap();

        let repo = NewsRepository::new(
            Arc::new(FakeRemote::err(RemoteError::Connection)),
            store.clone(),
        );

        let page = repo.get_news(1, 5).await.unwrap();
        assert_eq!(page.len(), 5);

        // Fallback past the cached set is an empty page, still a success
        let empty = repo.get_news(3, 5).await.unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn test_other_errors_propagate_and_leave_cache_alone() {
        for remote_err in [
            RemoteError::Server,
            RemoteError::Parse,
            RemoteError::Status(Some("Server Message".into())),
        ] {
            let store = Arc::new(RecordingStore::default());
            let repo =
                NewsRepository::new(Arc::new(FakeRemote::err(remote_err.clone())), store.clone());

            let err = repo.get_news(1, 5).await.unwrap_err();
            match err {
                NewsreelError::Remote(e) => assert_eq!(e, remote_err),
                other => panic!("unexpected error: {:?}", other),
            }

            assert!(store.log.lock().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_exactly_one_remote_attempt_per_call() {
        let remote = Arc::new(FakeRemote::err(RemoteError::Server));
        let repo = NewsRepository::new(remote.clone(), Arc::new(RecordingStore::default()));

        let _ = repo.get_news(1, 5).await;
        assert_eq!(*remote.calls.lock().unwrap(), 1);
    }
}
