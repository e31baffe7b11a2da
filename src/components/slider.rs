//! Slider Component
//!
//! One carousel row with its own paging state. The arrow advances this
//! slider only; clicks during a slide are dropped.

use leptos::prelude::*;
use leptos_carousel::{create_carousel, PAGE_SIZE, ROW_TRANSITION_MS};

use crate::components::MovieBox;
use crate::models::{ListKind, Movie};
use crate::store::{use_catalog_store, CatalogStateStoreFields};

fn tile_row(
    class: &'static str,
    tiles: Vec<Movie>,
    kind: ListKind,
    on_select: Callback<u64>,
) -> impl IntoView {
    view! {
        <div class=class>
            {tiles.into_iter().map(|movie| view! {
                <MovieBox movie=movie kind=kind on_select=on_select />
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn Slider(
    kind: ListKind,
    /// Leading items kept out of the carousel (the banner title)
    #[prop(optional)]
    skip: usize,
    on_select: Callback<u64>,
) -> impl IntoView {
    let store = use_catalog_store();
    let carousel = create_carousel(PAGE_SIZE, skip);

    let movies = Memo::new(move |_| {
        let list = match kind {
            ListKind::NowPlaying => store.now_playing().get(),
            ListKind::Popular => store.popular().get(),
        };
        list.unwrap_or_default()
    });

    let on_next = move |_| {
        let len = movies.with_untracked(|list| list.len());
        if carousel.request_advance(len) {
            tracing::debug!(
                list = kind.title(),
                index = carousel.state_read.get_untracked().index,
                "slider advanced"
            );
            carousel.schedule_finish(ROW_TRANSITION_MS);
        }
    };

    let rows = move || {
        let transitioning = carousel.is_transitioning();
        let visible = movies.with(|list| carousel.visible(list));
        let leaving = movies.with(|list| carousel.leaving_window(list));
        let class = if transitioning { "slider-row entering" } else { "slider-row" };
        view! {
            {leaving.map(|tiles| tile_row("slider-row leaving", tiles, kind, on_select))}
            {tile_row(class, visible, kind, on_select)}
        }
    };

    view! {
        <section class="slider-box">
            <h2 class="slider-title">{kind.title()}</h2>
            <div class="slider-container">
                <div class="slider">{rows}</div>
                <button
                    class="slider-button"
                    class:busy=move || carousel.is_transitioning()
                    title="Next"
                    on:click=on_next
                >
                    "→"
                </button>
            </div>
        </section>
    }
}
