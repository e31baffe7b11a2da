//! Hash Routing
//!
//! `#/`, `#/movies/{id}` and `#/signup`. The hash is the only navigation
//! state, so reloads and the back button keep working.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    /// Home with the detail overlay open for this movie id
    Movie(String),
    SignUp,
}

impl Route {
    /// Parse a location hash (with or without the leading `#`)
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        let mut parts = path.splitn(2, '/');
        match (parts.next(), parts.next()) {
            (Some("movies"), Some(id)) if !id.is_empty() && !id.contains('/') => {
                Route::Movie(percent_decode_str(id).decode_utf8_lossy().into_owned())
            }
            (Some("signup"), None) => Route::SignUp,
            _ => Route::Home,
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::Movie(id) => format!("#/movies/{}", utf8_percent_encode(id, NON_ALPHANUMERIC)),
            Route::SignUp => "#/signup".to_string(),
        }
    }

    /// Selected movie id, if the detail overlay should be open
    pub fn movie_id(&self) -> Option<&str> {
        match self {
            Route::Movie(id) => Some(id),
            _ => None,
        }
    }
}

/// Route for the current location
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|win| win.location().hash().ok())
        .map(|hash| Route::from_hash(&hash))
        .unwrap_or_default()
}

/// Change the location hash; the `hashchange` listener picks it up
pub fn navigate(route: &Route) {
    if let Some(win) = web_sys::window() {
        if let Err(err) = win.location().set_hash(&route.to_hash()) {
            tracing::warn!(?err, "failed to set location hash");
        }
    }
}

/// Bind a window `hashchange` listener for the app lifetime
pub fn bind_hashchange<F>(on_change: F)
where
    F: Fn(Route) + 'static,
{
    let on_hashchange = Closure::<dyn FnMut(web_sys::HashChangeEvent)>::new(
        move |_ev: web_sys::HashChangeEvent| {
            on_change(current_route());
        },
    );

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback(
            "hashchange",
            on_hashchange.as_ref().unchecked_ref(),
        );
    }
    on_hashchange.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#/"), Route::Home);
        assert_eq!(Route::from_hash("#/movies/550"), Route::Movie("550".to_string()));
        assert_eq!(Route::from_hash("movies/550/"), Route::Movie("550".to_string()));
        assert_eq!(Route::from_hash("#/signup"), Route::SignUp);
    }

    #[test]
    fn test_unknown_routes_go_home() {
        assert_eq!(Route::from_hash("#/movies"), Route::Home);
        assert_eq!(Route::from_hash("#/movies/"), Route::Home);
        assert_eq!(Route::from_hash("#/movies/1/2"), Route::Home);
        assert_eq!(Route::from_hash("#/tv/1"), Route::Home);
        assert_eq!(Route::from_hash("#/signup/extra"), Route::Home);
    }

    #[test]
    fn test_round_trip() {
        for route in [
            Route::Home,
            Route::SignUp,
            Route::Movie("550".to_string()),
            Route::Movie("a b/c".to_string()),
        ] {
            assert_eq!(Route::from_hash(&route.to_hash()), route);
        }
    }

    #[test]
    fn test_movie_id() {
        assert_eq!(Route::Movie("7".into()).movie_id(), Some("7"));
        assert_eq!(Route::Home.movie_id(), None);
    }
}
