//! Catalog State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use leptos_carousel::find_by_id;
use reactive_stores::Store;

use crate::models::{ListKind, Movie};

/// Fetched lists; `None` until the first successful load
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    pub now_playing: Option<Vec<Movie>>,
    pub popular: Option<Vec<Movie>>,
    /// Last fetch failure, shown under the loader
    pub error: Option<String>,
}

impl CatalogState {
    /// The home view waits on now-playing only
    pub fn is_loading(&self) -> bool {
        self.now_playing.is_none()
    }

    pub fn list(&self, kind: ListKind) -> &[Movie] {
        let list = match kind {
            ListKind::NowPlaying => &self.now_playing,
            ListKind::Popular => &self.popular,
        };
        list.as_deref().unwrap_or(&[])
    }

    /// Banner title: first now-playing entry
    pub fn banner(&self) -> Option<&Movie> {
        self.list(ListKind::NowPlaying).first()
    }

    /// Detail lookup, now-playing first
    pub fn find_movie(&self, id: &str) -> Option<&Movie> {
        find_by_id(
            &[self.list(ListKind::NowPlaying), self.list(ListKind::Popular)],
            id,
        )
    }
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

/// Get the catalog store from context
pub fn use_catalog_store() -> CatalogStore {
    expect_context::<CatalogStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_list(store: &CatalogStore, kind: ListKind, movies: Vec<Movie>) {
    match kind {
        ListKind::NowPlaying => store.now_playing().set(Some(movies)),
        ListKind::Popular => store.popular().set(Some(movies)),
    }
}

pub fn store_set_error(store: &CatalogStore, message: String) {
    store.error().set(Some(message));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            overview: String::new(),
            backdrop_path: None,
            poster_path: None,
        }
    }

    #[test]
    fn test_loading_until_now_playing() {
        let mut state = CatalogState::default();
        assert!(state.is_loading());
        assert!(state.banner().is_none());

        state.popular = Some(vec![movie(1, "A")]);
        assert!(state.is_loading());

        state.now_playing = Some(Vec::new());
        assert!(!state.is_loading());
        assert!(state.banner().is_none());
    }

    #[test]
    fn test_find_movie_prefers_now_playing() {
        let state = CatalogState {
            now_playing: Some(vec![movie(10, "Banner"), movie(20, "Now")]),
            popular: Some(vec![movie(20, "Popular"), movie(30, "Only popular")]),
            error: None,
        };
        assert_eq!(state.banner().map(|m| m.id), Some(10));
        assert_eq!(state.find_movie("20").map(|m| m.title.as_str()), Some("Now"));
        assert_eq!(state.find_movie("30").map(|m| m.title.as_str()), Some("Only popular"));
        assert_eq!(state.find_movie("10").map(|m| m.title.as_str()), Some("Banner"));
        assert!(state.find_movie("40").is_none());
    }

    #[test]
    fn test_find_movie_with_missing_lists() {
        let state = CatalogState {
            now_playing: None,
            popular: Some(vec![movie(5, "P")]),
            error: None,
        };
        assert_eq!(state.find_movie("5").map(|m| m.id), Some(5));
        assert!(state.list(ListKind::NowPlaying).is_empty());
    }
}
