//! Frontend Models
//!
//! Catalog payloads as returned by the TMDB list endpoints.

use leptos_carousel::Identified;
use serde::{Deserialize, Serialize};

/// A movie entry (matches TMDB list results)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl Movie {
    /// Backdrop image path, empty if the catalog has none
    pub fn backdrop(&self) -> &str {
        self.backdrop_path.as_deref().unwrap_or("")
    }

    pub fn poster(&self) -> &str {
        self.poster_path.as_deref().unwrap_or("")
    }
}

impl Identified for Movie {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }
}

/// Release window reported alongside now-playing results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub maximum: String,
    pub minimum: String,
}

/// One page of a movie list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePage {
    #[serde(default)]
    pub dates: Option<DateRange>,
    pub page: u32,
    pub results: Vec<Movie>,
    pub total_pages: u32,
    pub total_results: u32,
}

/// Which catalog list a carousel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    NowPlaying,
    Popular,
}

impl ListKind {
    pub fn title(&self) -> &'static str {
        match self {
            ListKind::NowPlaying => "Now Playing",
            ListKind::Popular => "Popular",
        }
    }

    /// Catalog endpoint path, relative to the API root
    pub fn endpoint(&self) -> &'static str {
        match self {
            ListKind::NowPlaying => "movie/now_playing",
            ListKind::Popular => "movie/popular",
        }
    }

    /// Suffix keeping tile keys distinct when a movie is in both lists
    pub fn key_suffix(&self) -> &'static str {
        match self {
            ListKind::NowPlaying => "now",
            ListKind::Popular => "popular",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW_PLAYING: &str = r#"{
        "dates": {"maximum": "2026-10-21", "minimum": "2026-09-03"},
        "page": 1,
        "results": [
            {"id": 550, "title": "Fight Club", "overview": "An insomniac...",
             "backdrop_path": "/hZkgoQYus5vegHoetLkCJzb17zJ.jpg",
             "poster_path": "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
             "vote_average": 8.4, "adult": false},
            {"id": 13, "title": "Forrest Gump", "overview": "",
             "backdrop_path": null, "poster_path": null}
        ],
        "total_pages": 40,
        "total_results": 793
    }"#;

    #[test]
    fn test_parse_now_playing_page() {
        let page: MoviePage = serde_json::from_str(NOW_PLAYING).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.dates.as_ref().unwrap().minimum, "2026-09-03");
        assert_eq!(page.results[0].backdrop(), "/hZkgoQYus5vegHoetLkCJzb17zJ.jpg");
        assert_eq!(page.results[1].backdrop(), "");
        assert_eq!(page.results[1].poster(), "");
    }

    #[test]
    fn test_parse_popular_page_without_dates() {
        let json =
            r#"{"page":1,"results":[{"id":1,"title":"A"}],"total_pages":1,"total_results":1}"#;
        let page: MoviePage = serde_json::from_str(json).unwrap();
        assert!(page.dates.is_none());
        assert_eq!(page.results[0].overview, "");
        assert_eq!(Identified::id(&page.results[0]), 1);
    }

    #[test]
    fn test_list_kind() {
        assert_eq!(ListKind::NowPlaying.endpoint(), "movie/now_playing");
        assert_eq!(ListKind::Popular.title(), "Popular");
        assert_ne!(ListKind::NowPlaying.key_suffix(), ListKind::Popular.key_suffix());
    }
}
