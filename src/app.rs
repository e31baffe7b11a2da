//! MovieReel Frontend App
//!
//! App shell: context, catalog loading, hash routing.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{Home, NavBar, SignUpPage};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::ListKind;
use crate::route::{self, Route};
use crate::store::{store_set_error, store_set_list, CatalogState};
use crate::theme::{stylesheet, DARK};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let route_signal = signal(route::current_route());
    let ctx = AppContext::new(route_signal, config);
    let store = Store::new(CatalogState::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    route::bind_hashchange(move |current| ctx.sync_route(current));

    // Load both lists on mount; failures keep the loader up
    Effect::new(move |_| {
        let client = ctx.client();
        if !client.config().has_api_key() {
            tracing::warn!("TMDB_API_KEY was not set at build time");
        }
        for kind in [ListKind::NowPlaying, ListKind::Popular] {
            let client = client.clone();
            spawn_local(async move {
                match client.list(kind).await {
                    Ok(page) => store_set_list(&store, kind, page.results),
                    Err(err) => {
                        tracing::error!(list = kind.title(), %err, "failed to load movies");
                        store_set_error(&store, err.to_string());
                    }
                }
            });
        }
    });

    // Home and the detail overlay share one view so carousels keep their page
    let on_sign_up = Memo::new(move |_| ctx.route.with(|r| *r == Route::SignUp));

    view! {
        <style>{stylesheet(&DARK)}</style>
        <NavBar />
        <main class="main-content">
            {move || if on_sign_up.get() {
                view! { <SignUpPage /> }.into_any()
            } else {
                view! { <Home /> }.into_any()
            }}
        </main>
    }
}
