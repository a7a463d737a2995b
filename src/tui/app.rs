use ratatui::widgets::ListState;

use crate::domain::NewsArticle;
use crate::feed::NewsFeed;

/// How close to the bottom the selection may get before the next page is
/// requested.
pub const LOAD_MORE_THRESHOLD: usize = 2;

pub struct TuiApp {
    pub feed: NewsFeed,
    pub selected: usize,
    pub list_state: ListState,
    pub should_quit: bool,
}

impl TuiApp {
    pub fn new(feed: NewsFeed) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            feed,
            selected: 0,
            list_state,
            should_quit: false,
        }
    }

    pub fn selected_article(&self) -> Option<&NewsArticle> {
        self.feed.state.articles.get(self.selected)
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.list_state.select(Some(self.selected));
        }
    }

    pub fn move_down(&mut self) {
        let len = self.feed.state.articles.len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
            self.list_state.select(Some(self.selected));
        }
    }

    pub fn goto_top(&mut self) {
        self.selected = 0;
        self.list_state.select(Some(0));
    }

    pub fn goto_bottom(&mut self) {
        let len = self.feed.state.articles.len();
        if len > 0 {
            self.selected = len - 1;
            self.list_state.select(Some(self.selected));
        }
    }

    /// True once the selection is near the end of the accumulated list.
    pub fn near_end(&self) -> bool {
        let len = self.feed.state.articles.len();
        len > 0 && self.selected + LOAD_MORE_THRESHOLD >= len - 1
    }

    /// Keep the selection valid after the article list shrank (refresh).
    pub fn clamp_selection(&mut self) {
        let len = self.feed.state.articles.len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
        self.list_state.select(Some(self.selected));
    }
}
