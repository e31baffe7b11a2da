//! Movie Box Component
//!
//! A single carousel tile; hover lifts it and reveals the title.

use leptos::prelude::*;

use crate::api::{background_image, image_url, ImageSize};
use crate::context::use_app_context;
use crate::models::{ListKind, Movie};

#[component]
pub fn MovieBox(
    movie: Movie,
    /// List the tile belongs to (a movie can be in both)
    kind: ListKind,
    on_select: Callback<u64>,
) -> impl IntoView {
    let ctx = use_app_context();
    let url = image_url(&ctx.image_base(), movie.backdrop(), ImageSize::W500);
    let id = movie.id;

    view! {
        <div
            class="movie-box"
            data-key=format!("{}{}", id, kind.key_suffix())
            style=background_image(None, url.as_deref())
            on:click=move |_| on_select.run(id)
        >
            <div class="movie-info">
                <h4>{movie.title}</h4>
            </div>
        </div>
    }
}
