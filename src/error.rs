//! Catalog errors

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("No TMDB API key configured (set TMDB_API_KEY at build time)")]
    MissingApiKey,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Not found")]
    NotFound,

    #[error("Rate limited")]
    RateLimited,

    #[error("API error: {0}")]
    Api(String),

    #[error("Unexpected response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl CatalogError {
    /// Map a failed HTTP status to an error, keeping the service's message
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 => CatalogError::InvalidApiKey,
            404 => CatalogError::NotFound,
            429 => CatalogError::RateLimited,
            _ => CatalogError::Api(
                message.unwrap_or_else(|| format!("request failed with status {}", status)),
            ),
        }
    }
}
