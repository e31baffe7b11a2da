//! Reactive carousel state
//!
//! One [`CarouselSignals`] per carousel instance; the component that creates
//! it is its only writer.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::window::{self, Phase, WindowState};

/// Carousel state signals
#[derive(Clone, Copy)]
pub struct CarouselSignals {
    pub state_read: ReadSignal<WindowState>,
    state_write: WriteSignal<WindowState>,
    pub page_size: usize,
    /// Leading items reserved outside the carousel (e.g. a banner)
    pub skip: usize,
}

pub fn create_carousel(page_size: usize, skip: usize) -> CarouselSignals {
    let (state_read, state_write) = signal(WindowState::new());
    CarouselSignals {
        state_read,
        state_write,
        page_size,
        skip,
    }
}

impl CarouselSignals {
    /// Ask for the next page. Returns false if the request was dropped.
    pub fn request_advance(&self, list_len: usize) -> bool {
        let current = self.state_read.get_untracked();
        if current.phase() == Phase::Transitioning {
            return false;
        }
        self.state_write
            .set(window::advance(current, list_len, self.page_size));
        true
    }

    /// Transition finished notification
    pub fn finish(&self) {
        self.state_write
            .update(|state| *state = window::complete_transition(*state));
    }

    /// Call [`CarouselSignals::finish`] once the row animation has played out
    pub fn schedule_finish(&self, after_ms: u32) {
        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(after_ms).await;
            this.finish();
        });
    }

    pub fn is_transitioning(&self) -> bool {
        self.state_read.get().transitioning
    }

    /// Page currently entering or on screen
    pub fn visible<T: Clone>(&self, list: &[T]) -> Vec<T> {
        let state = self.state_read.get();
        window::window_slice(list, state.index, self.page_size, self.skip).to_vec()
    }

    /// Page sliding out, if a transition moved to a different page
    pub fn leaving_window<T: Clone>(&self, list: &[T]) -> Option<Vec<T>> {
        let state = self.state_read.get();
        state
            .leaving
            .filter(|leaving| *leaving != state.index)
            .map(|leaving| window::window_slice(list, leaving, self.page_size, self.skip).to_vec())
    }
}
