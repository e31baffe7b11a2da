//! Application Configuration
//!
//! Catalog endpoint settings, baked in at build time from `TMDB_*`
//! environment variables. A page may override them with an inline
//! `<script id="app-config" type="application/json">` document.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3/";
pub const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/";
pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_REGION: &str = "kr";

/// Element holding the inline override document
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Catalog API root, with trailing slash
    pub api_base: String,
    pub api_key: String,
    pub language: String,
    pub region: String,
    /// Image CDN root, with trailing slash
    pub image_base: String,
    /// Log lines retained in memory
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            region: DEFAULT_REGION.to_string(),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            log_capacity: rolling_logger::DEFAULT_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Defaults plus whatever `TMDB_API_KEY`, `TMDB_LANG` and `TMDB_REGION`
    /// held when the crate was compiled
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("TMDB_API_KEY"),
            option_env!("TMDB_LANG"),
            option_env!("TMDB_REGION"),
        )
    }

    fn from_values(api_key: Option<&str>, language: Option<&str>, region: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(key) = api_key.map(str::trim).filter(|k| !k.is_empty()) {
            config.api_key = key.to_string();
        }
        if let Some(lang) = language.filter(|l| !l.is_empty()) {
            config.language = lang.to_string();
        }
        if let Some(region) = region.filter(|r| !r.is_empty()) {
            config.region = region.to_string();
        }
        config
    }

    /// Parse an override document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, String> {
        let mut config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.api_base = with_trailing_slash(config.api_base);
        config.image_base = with_trailing_slash(config.image_base);
        Ok(config)
    }

    /// Apply the keys present in `json` on top of this config
    pub fn with_overrides(self, json: &str) -> Result<Self, String> {
        let overrides: serde_json::Value = serde_json::from_str(json).map_err(|e| e.to_string())?;
        let serde_json::Value::Object(overrides) = overrides else {
            return Err("config override must be a JSON object".to_string());
        };
        let mut merged = serde_json::to_value(self).map_err(|e| e.to_string())?;
        if let serde_json::Value::Object(fields) = &mut merged {
            fields.extend(overrides);
        }
        Self::from_json(&merged.to_string())
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

/// Text of the inline override element, if the page has one
pub fn inline_override() -> Option<String> {
    web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty())
}
