//! Movie Detail Overlay
//!
//! Open while the route names a movie; the id is resolved against the
//! loaded lists, now-playing first.

use leptos::prelude::*;

use crate::api::{background_image, image_url, ImageSize};
use crate::context::use_app_context;
use crate::route::Route;
use crate::store::use_catalog_store;
use crate::theme::COVER_GRADIENT;

/// Offset of the panel below the current scroll position
const PANEL_TOP_OFFSET_PX: f64 = 100.0;

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

#[component]
pub fn MovieDetail() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_catalog_store();

    let selected_id =
        Memo::new(move |_| ctx.route.with(|route| route.movie_id().map(str::to_string)));
    let selected = Memo::new(move |_| {
        let id = selected_id.get()?;
        store.with(|state| state.find_movie(&id).cloned())
    });

    let close = move |_| ctx.navigate(Route::Home);

    view! {
        <Show when=move || selected_id.with(Option::is_some)>
            <div class="overlay" on:click=close />
            <div class="big-movie" style=format!("top: {}px;", scroll_y() + PANEL_TOP_OFFSET_PX)>
                {move || selected.get().map(|movie| {
                    let base = ctx.image_base();
                    let url = image_url(&base, movie.backdrop(), ImageSize::Original)
                        .or_else(|| image_url(&base, movie.poster(), ImageSize::W780));
                    view! {
                        <div
                            class="big-cover"
                            style=background_image(Some(COVER_GRADIENT), url.as_deref())
                        />
                        <h3 class="big-title">{movie.title}</h3>
                        <p class="big-overview">{movie.overview}</p>
                    }
                })}
            </div>
        </Show>
    }
}
