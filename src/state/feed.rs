// Feed list state.
// Holds the published photos, the list-level loading flag, and the current page.

use std::ops::Range;

use crate::picsum::PhotoRecord;

use super::loader::{LoadOutcome, Origin};

/// Published list plus paging position.
#[derive(Debug, Clone)]
pub struct FeedState {
    /// True until the loader finishes, whatever the result.
    pub loading: bool,
    pub photos: Vec<PhotoRecord>,
    pub origin: Option<Origin>,
    /// Index of the page snapped to the top of the screen.
    page: usize,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            loading: true,
            photos: Vec::new(),
            origin: None,
            page: 0,
        }
    }
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the loader's outcome and end the loading state.
    pub fn finish(&mut self, outcome: &LoadOutcome) {
        if let Some(published) = &outcome.published {
            self.photos = published.photos.clone();
            self.origin = Some(published.origin);
            self.page = 0;
        }
        self.loading = false;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.photos.len()
    }

    pub fn current(&self) -> Option<&PhotoRecord> {
        self.photos.get(self.page)
    }

    /// Move one page down, stopping at the last page.
    pub fn next_page(&mut self) {
        if self.page + 1 < self.photos.len() {
            self.page += 1;
        }
    }

    /// Move one page up, stopping at the first page.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn first_page(&mut self) {
        self.page = 0;
    }

    pub fn last_page(&mut self) {
        self.page = self.photos.len().saturating_sub(1);
    }

    /// Indices of the current page and up to `radius` neighbours each side.
    pub fn window(&self, radius: usize) -> Range<usize> {
        if self.photos.is_empty() {
            return 0..0;
        }
        let start = self.page.saturating_sub(radius);
        let end = (self.page + radius + 1).min(self.photos.len());
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::loader::Published;

    fn photos(n: usize) -> Vec<PhotoRecord> {
        (0..n)
            .map(|i| PhotoRecord {
                id: i.to_string(),
                author: format!("Author {}", i),
                download_url: format!("https://picsum.photos/id/{}/100/100", i),
                width: None,
                height: None,
                url: None,
            })
            .collect()
    }

    fn loaded(n: usize) -> FeedState {
        let mut feed = FeedState::new();
        feed.finish(&LoadOutcome {
            published: Some(Published {
                photos: photos(n),
                origin: Origin::Network,
            }),
            failure: None,
        });
        feed
    }

    #[test]
    fn test_starts_loading() {
        let feed = FeedState::new();
        assert!(feed.loading);
        assert!(feed.current().is_none());
    }

    #[test]
    fn test_finish_without_publish_is_empty() {
        let mut feed = FeedState::new();
        feed.finish(&LoadOutcome::default());
        assert!(!feed.loading);
        assert_eq!(feed.page_count(), 0);
        assert!(feed.origin.is_none());
    }

    #[test]
    fn test_paging_clamps_at_ends() {
        let mut feed = loaded(3);
        assert_eq!(feed.current().unwrap().id, "0");

        feed.prev_page();
        assert_eq!(feed.page(), 0);

        feed.next_page();
        feed.next_page();
        feed.next_page();
        assert_eq!(feed.page(), 2);

        feed.first_page();
        assert_eq!(feed.page(), 0);
        feed.last_page();
        assert_eq!(feed.current().unwrap().id, "2");
    }

    #[test]
    fn test_paging_empty_list() {
        let mut feed = loaded(0);
        feed.next_page();
        feed.last_page();
        assert_eq!(feed.page(), 0);
        assert_eq!(feed.window(1), 0..0);
    }

    #[test]
    fn test_window() {
        let mut feed = loaded(10);
        assert_eq!(feed.window(1), 0..2);
        feed.next_page();
        feed.next_page();
        assert_eq!(feed.window(1), 1..4);
        feed.last_page();
        assert_eq!(feed.window(1), 8..10);
    }
}
