//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::CatalogClient;
use crate::config::AppConfig;
use crate::route::{self, Route};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current hash route - read
    pub route: ReadSignal<Route>,
    /// Current hash route - write
    set_route: WriteSignal<Route>,
    /// Build-time settings
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>), config: AppConfig) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            config: StoredValue::new(config),
        }
    }

    /// Navigate by hash; the route signal is updated right away so the view
    /// does not wait for `hashchange`
    pub fn navigate(&self, to: Route) {
        route::navigate(&to);
        self.set_route.set(to);
    }

    /// Sync the route signal from a `hashchange`
    pub fn sync_route(&self, current: Route) {
        if self.route.get_untracked() != current {
            self.set_route.set(current);
        }
    }

    pub fn client(&self) -> CatalogClient {
        CatalogClient::new(self.config.get_value())
    }

    /// Image CDN root without cloning the whole config
    pub fn image_base(&self) -> String {
        self.config.with_value(|config| config.image_base.clone())
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
