//! Detail Matching
//!
//! Resolves a selected identifier (as it arrives from a route string)
//! against the lists currently loaded.

use std::fmt::Display;

/// Anything shown in a carousel tile
pub trait Identified {
    /// Identifier, compared by its string form
    type Id: Display;

    fn id(&self) -> Self::Id;
}

/// First item across `lists` (searched in order) whose id prints as `id`.
pub fn find_by_id<'a, T: Identified>(lists: &[&'a [T]], id: &str) -> Option<&'a T> {
    lists
        .iter()
        .flat_map(|list| list.iter())
        .find(|item| item.id().to_string() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Entry {
        id: u64,
        source: &'static str,
    }

    impl Identified for Entry {
        type Id = u64;

        fn id(&self) -> u64 {
            self.id
        }
    }

    fn entry(id: u64, source: &'static str) -> Entry {
        Entry { id, source }
    }

    #[test]
    fn test_first_list_wins() {
        let now = vec![entry(1, "now"), entry(2, "now")];
        let popular = vec![entry(2, "popular"), entry(3, "popular")];

        let found = find_by_id(&[now.as_slice(), popular.as_slice()], "2").unwrap();
        assert_eq!(found.source, "now");

        let found = find_by_id(&[popular.as_slice(), now.as_slice()], "2").unwrap();
        assert_eq!(found.source, "popular");
    }

    #[test]
    fn test_falls_through_to_later_lists() {
        let now = vec![entry(1, "now")];
        let popular = vec![entry(3, "popular")];
        assert_eq!(find_by_id(&[now.as_slice(), popular.as_slice()], "3"), Some(&popular[0]));
    }

    #[test]
    fn test_no_match() {
        let now = vec![entry(1, "now")];
        let empty: Vec<Entry> = Vec::new();
        assert_eq!(find_by_id(&[now.as_slice(), empty.as_slice()], "10"), None);
        assert_eq!(find_by_id(&[now.as_slice()], "01"), None);
        assert_eq!(find_by_id(&[now.as_slice()], ""), None);
        assert_eq!(find_by_id::<Entry>(&[], "1"), None);
    }
}
