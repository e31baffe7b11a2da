//! Home View
//!
//! Banner, the two carousels and the detail overlay.

use leptos::prelude::*;

use crate::components::{Banner, Loader, MovieDetail, Slider};
use crate::context::use_app_context;
use crate::models::ListKind;
use crate::route::Route;
use crate::store::{use_catalog_store, CatalogState};

#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_catalog_store();

    let on_select = Callback::new(move |id: u64| {
        ctx.navigate(Route::Movie(id.to_string()));
    });
    let loading = Memo::new(move |_| store.with(CatalogState::is_loading));

    view! {
        <div class="home">
            <Show when=move || !loading.get() fallback=|| view! { <Loader /> }>
                <Banner />
                // First now-playing title is the banner
                <Slider kind=ListKind::NowPlaying skip=1 on_select=on_select />
                <Slider kind=ListKind::Popular on_select=on_select />
                <MovieDetail />
            </Show>
        </div>
    }
}
