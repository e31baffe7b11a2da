//! Navigation Bar Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::route::Route;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let on_sign_up = move || ctx.route.get() == Route::SignUp;

    view! {
        <nav class="nav-bar">
            <span class="nav-logo">"MovieReel"</span>
            <a
                href=Route::Home.to_hash()
                class=move || if on_sign_up() { "nav-link" } else { "nav-link active" }
            >
                "Home"
            </a>
            <a
                href=Route::SignUp.to_hash()
                class=move || if on_sign_up() { "nav-link active" } else { "nav-link" }
            >
                "Sign up"
            </a>
        </nav>
    }
}
