//! Loader Component
//!
//! Placeholder shown until now-playing arrives. After a failed fetch it also
//! lists the latest warnings and errors from the in-memory log.

use leptos::prelude::*;

use crate::store::{use_catalog_store, CatalogStateStoreFields};

/// Log lines shown under a fetch error
const RECENT_PROBLEMS: usize = 5;

#[component]
pub fn Loader() -> impl IntoView {
    let store = use_catalog_store();

    view! {
        <div class="loader">
            <span>"Loading..."</span>
            {move || store.error().get().map(|err| view! {
                <p class="loader-error">{err}</p>
                <ul class="loader-log">
                    {rolling_logger::recent_problems(RECENT_PROBLEMS)
                        .into_iter()
                        .map(|line| view! { <li>{line.to_string()}</li> })
                        .collect_view()}
                </ul>
            })}
        </div>
    }
}
