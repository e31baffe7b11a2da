//! Leptos Carousel Utilities
//!
//! Paged, cyclic carousel rows for Leptos.
//! The windowing and matching logic is plain Rust; `signals` wires it into
//! reactive state and `motion` describes how rows and tiles animate.

pub mod find;
pub mod motion;
pub mod window;
mod signals;

pub use find::{find_by_id, Identified};
pub use motion::{Easing, Timing, Variant, ROW_TRANSITION_MS};
pub use signals::{create_carousel, CarouselSignals};
pub use window::{
    advance, complete_transition, max_index, window_slice, Phase, WindowState, PAGE_SIZE,
};
