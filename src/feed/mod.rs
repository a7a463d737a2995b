use crate::domain::NewsArticle;
use crate::repo::NewsRepository;

pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Observable pagination state, published to the presentation layer.
///
/// `articles` accumulates pages in fetch order within a session and is
/// replaced wholesale on refresh. At most one of `is_loading` /
/// `is_loading_more` is true at a time; `current_page` is 0 until the first
/// page lands.
#[derive(Debug, Clone, Default)]
pub struct NewsFeedState {
    pub articles: Vec<NewsArticle>,
    pub is_loading: bool,
    pub is_loading_more: bool,
    pub error: Option<String>,
    pub has_more: bool,
    pub current_page: u32,
}

impl NewsFeedState {
    pub fn new() -> Self {
        Self {
            has_more: true,
            ..Self::default()
        }
    }

    pub fn is_busy(&self) -> bool {
        self.is_loading || self.is_loading_more
    }
}

/// Drives infinite-scroll pagination over the repository.
///
/// The loading flags double as a single-flight guard: a load-more intent
/// that arrives while a fetch is outstanding, or after the last page, is
/// dropped. Intents are issued by one cooperative owner, so the guard is a
/// plain field check, not a lock.
pub struct NewsFeed {
    repo: NewsRepository,
    page_size: u32,
    pub state: NewsFeedState,
}

impl NewsFeed {
    pub fn new(repo: NewsRepository) -> Self {
        Self::with_page_size(repo, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(repo: NewsRepository, page_size: u32) -> Self {
        Self {
            repo,
            page_size,
            state: NewsFeedState::new(),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Load the next page. Also the initial-load path: from the zero state
    /// this fetches page 1.
    pub async fn load_more(&mut self) {
        self.load_news(false).await;
    }

    /// Discard the accumulation and reload from page 1. Unconditional.
    pub async fn refresh(&mut self) {
        self.load_news(true).await;
    }

    pub fn dismiss_error(&mut self) {
        self.state.error = None;
    }

    async fn load_news(&mut self, refresh: bool) {
        let page = if refresh {
            1
        } else {
            self.state.current_page + 1
        };

        if refresh {
            self.state.is_loading = true;
            self.state.error = None;
            self.state.current_page = 1;
        } else if self.state.is_busy() || !self.state.has_more {
            return;
        } else if page == 1 {
            self.state.is_loading = true;
            self.state.error = None;
        } else {
            self.state.is_loading_more = true;
            self.state.error = None;
        }

        match self.repo.get_news(page, self.page_size).await {
            Ok(articles) => {
                if refresh {
                    self.state.articles.clear();
                }
                let fetched = articles.len() as u32;
                self.state.articles.extend(articles);
                self.state.is_loading = false;
                self.state.is_loading_more = false;
                self.state.error = None;
                self.state.has_more = fetched == self.page_size;
                self.state.current_page = page;
            }
            Err(err) => {
                // Failed page: keep what we have, do not advance
                self.state.is_loading = false;
                self.state.is_loading_more = false;
                self.state.error = Some(err.to_string());
            }
        }
    }
}
