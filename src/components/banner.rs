//! Banner Component
//!
//! Full-width hero for the first now-playing title.

use leptos::prelude::*;

use crate::api::{background_image, image_url, ImageSize};
use crate::context::use_app_context;
use crate::store::use_catalog_store;
use crate::theme::BANNER_GRADIENT;

#[component]
pub fn Banner() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_catalog_store();
    let banner = Memo::new(move |_| store.with(|state| state.banner().cloned()));

    move || {
        banner.get().map(|movie| {
            let url = image_url(&ctx.image_base(), movie.backdrop(), ImageSize::Original);
            view! {
                <div class="banner" style=background_image(Some(BANNER_GRADIENT), url.as_deref())>
                    <h2 class="banner-title">{movie.title}</h2>
                    <p class="banner-overview">{movie.overview}</p>
                </div>
            }
        })
    }
}
