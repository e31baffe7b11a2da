//! MovieReel Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod models;
mod route;
mod store;
mod theme;
mod validation;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use rolling_logger::LoggerConfig;

fn main() {
    console_error_panic_hook::set_once();

    let env_config = AppConfig::from_env();
    let (config, rejected) = match config::inline_override() {
        Some(json) => match env_config.clone().with_overrides(&json) {
            Ok(merged) => (merged, None),
            Err(err) => (env_config, Some(err)),
        },
        None => (env_config, None),
    };

    rolling_logger::init(LoggerConfig {
        capacity: config.log_capacity,
        ..LoggerConfig::default()
    });
    if let Some(err) = rejected {
        tracing::warn!(%err, "ignoring inline config override");
    }
    tracing::info!(language = %config.language, region = %config.region, "starting");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
