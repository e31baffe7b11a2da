//! Carousel Windowing
//!
//! Pure paging arithmetic over an in-memory list. The hosting UI owns the
//! [`WindowState`] value and feeds it back through these functions.

/// Items shown per carousel page
pub const PAGE_SIZE: usize = 6;

/// Whether a carousel accepts advance requests
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning,
}

/// Per-carousel paging state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WindowState {
    /// Current page index, always within `0..=max_index`
    pub index: usize,
    /// Set while the row swap animation is running
    pub transitioning: bool,
    /// Page animating out during a transition
    pub leaving: Option<usize>,
}

impl WindowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.transitioning {
            Phase::Transitioning
        } else {
            Phase::Idle
        }
    }
}

/// Highest reachable page index for a list.
///
/// Computed as `floor((len - 1) / page_size) - 1`; anything that would go
/// negative (including an empty list) collapses to a single page.
pub fn max_index(list_len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    match list_len.checked_sub(1) {
        Some(last) => (last / page_size).saturating_sub(1),
        None => 0,
    }
}

/// Move to the next page, wrapping to 0 after the last one.
///
/// Dropped (state returned unchanged) while a transition is in flight.
pub fn advance(state: WindowState, list_len: usize, page_size: usize) -> WindowState {
    if state.transitioning {
        return state;
    }
    let max = max_index(list_len, page_size);
    let index = if state.index >= max { 0 } else { state.index + 1 };
    WindowState {
        index,
        transitioning: true,
        leaving: Some(state.index),
    }
}

/// Mark the running transition as finished.
pub fn complete_transition(state: WindowState) -> WindowState {
    WindowState {
        index: state.index,
        transitioning: false,
        leaving: None,
    }
}

/// Contiguous page of `list` for `index`, after skipping `skip` leading items.
///
/// Out-of-range pages are clamped: they come back short or empty.
pub fn window_slice<T>(list: &[T], index: usize, page_size: usize, skip: usize) -> &[T] {
    let start = index
        .saturating_mul(page_size)
        .saturating_add(skip)
        .min(list.len());
    let end = start.saturating_add(page_size).min(list.len());
    &list[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn advance_n(mut state: WindowState, len: usize, times: usize) -> WindowState {
        for _ in 0..times {
            state = complete_transition(advance(state, len, PAGE_SIZE));
        }
        state
    }

    #[test]
    fn test_max_index() {
        assert_eq!(max_index(0, PAGE_SIZE), 0);
        assert_eq!(max_index(1, PAGE_SIZE), 0);
        assert_eq!(max_index(7, PAGE_SIZE), 0);
        assert_eq!(max_index(13, PAGE_SIZE), 1);
        assert_eq!(max_index(20, PAGE_SIZE), 2);
        assert_eq!(max_index(5, 0), 3);
    }

    #[test]
    fn test_advance_wraps_for_thirteen_items() {
        let state = WindowState::new();
        let first = advance(state, 13, PAGE_SIZE);
        assert_eq!(first.index, 1);
        assert_eq!(first.leaving, Some(0));
        assert_eq!(first.phase(), Phase::Transitioning);

        let second = advance(complete_transition(first), 13, PAGE_SIZE);
        assert_eq!(second.index, 0);
        assert_eq!(second.leaving, Some(1));
    }

    #[test]
    fn test_advance_dropped_while_transitioning() {
        let moving = advance(WindowState::new(), 20, PAGE_SIZE);
        let again = advance(moving, 20, PAGE_SIZE);
        let and_again = advance(again, 20, PAGE_SIZE);
        assert_eq!(again, moving);
        assert_eq!(and_again, moving);

        let idle = complete_transition(and_again);
        assert_eq!(idle.phase(), Phase::Idle);
        assert_eq!(idle.leaving, None);
        assert_eq!(advance(idle, 20, PAGE_SIZE).index, 2);
    }

    #[test]
    fn test_empty_list_stays_on_first_page() {
        for times in 0..5 {
            assert_eq!(advance_n(WindowState::new(), 0, times).index, 0);
        }
    }

    #[test]
    fn test_index_past_end_wraps() {
        // list shrank under a carousel that was on a later page
        let state = WindowState { index: 3, transitioning: false, leaving: None };
        assert_eq!(advance(state, 13, PAGE_SIZE).index, 0);
    }

    #[test]
    fn test_window_slice_with_banner_skip() {
        let list: Vec<u32> = (0..13).collect();
        assert_eq!(window_slice(&list, 0, PAGE_SIZE, 1), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(window_slice(&list, 1, PAGE_SIZE, 1), &[7, 8, 9, 10, 11, 12]);
        assert!(window_slice(&list, 2, PAGE_SIZE, 1).is_empty());
        assert_eq!(window_slice(&list, 0, PAGE_SIZE, 0), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_window_slice_clamps() {
        let list = [1, 2, 3];
        assert_eq!(window_slice(&list, 0, PAGE_SIZE, 0), &[1, 2, 3]);
        assert_eq!(window_slice(&list, 0, PAGE_SIZE, 5), &[] as &[i32]);
        assert_eq!(window_slice(&list, usize::MAX, PAGE_SIZE, 0), &[] as &[i32]);
        let empty: [u8; 0] = [];
        assert!(window_slice(&empty, 0, PAGE_SIZE, 1).is_empty());
    }

    proptest! {
        #[test]
        fn slice_never_exceeds_page(len in 0usize..200, index in 0usize..50, skip in 0usize..2) {
            let list: Vec<usize> = (0..len).collect();
            prop_assert!(window_slice(&list, index, PAGE_SIZE, skip).len() <= PAGE_SIZE);
        }

        #[test]
        fn index_stays_in_range(len in 0usize..200, steps in 0usize..40) {
            let mut state = WindowState::new();
            for _ in 0..steps {
                state = advance(state, len, PAGE_SIZE);
                prop_assert!(state.index <= max_index(len, PAGE_SIZE));
                state = complete_transition(state);
            }
        }

        #[test]
        fn reachable_pages_are_full_with_banner(len in 1usize..200, steps in 0usize..40) {
            let list: Vec<usize> = (0..len).collect();
            let state = advance_n(WindowState::new(), len, steps);
            let page = window_slice(&list, state.index, PAGE_SIZE, 1);
            if len > PAGE_SIZE {
                prop_assert_eq!(page.len(), PAGE_SIZE);
            }
        }
    }
}
