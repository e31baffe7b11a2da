//! Movie List Requests
//!
//! `movie/now_playing` and `movie/popular`, first page only.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::CatalogError;
use crate::models::{ListKind, MoviePage};

// ========================
// Query Structs
// ========================

#[derive(Debug, Serialize, PartialEq)]
pub struct ListQuery<'a> {
    pub api_key: &'a str,
    pub language: &'a str,
    pub page: u32,
    pub region: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    status_message: Option<String>,
}

// ========================
// Client
// ========================

#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    config: AppConfig,
}

impl CatalogClient {
    pub fn new(config: AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn list_url(&self, kind: ListKind) -> String {
        format!("{}{}", self.config.api_base, kind.endpoint())
    }

    pub fn list_query(&self) -> ListQuery<'_> {
        ListQuery {
            api_key: &self.config.api_key,
            language: &self.config.language,
            page: 1,
            region: &self.config.region,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        if !self.config.has_api_key() {
            return Err(CatalogError::MissingApiKey);
        }

        let response = self.http.get(url).query(&self.list_query()).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            return decode(&body);
        }

        let message = decode::<ErrorBody>(&body)
            .ok()
            .and_then(|body| body.status_message);
        tracing::warn!(url, status = status.as_u16(), "catalog request failed");
        Err(CatalogError::from_status(status.as_u16(), message))
    }

    pub async fn list(&self, kind: ListKind) -> Result<MoviePage, CatalogError> {
        let page: MoviePage = self.get_json(&self.list_url(kind)).await?;
        tracing::info!(list = kind.title(), count = page.results.len(), "loaded movies");
        Ok(page)
    }
}

/// Parse a response body; schema mismatches are not transport failures
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, CatalogError> {
    serde_json::from_str(body).map_err(CatalogError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CatalogClient {
        CatalogClient::new(AppConfig {
            api_key: "secret".to_string(),
            ..AppConfig::default()
        })
    }

    #[test]
    fn test_list_urls() {
        let client = client();
        assert_eq!(
            client.list_url(ListKind::NowPlaying),
            "https://api.themoviedb.org/3/movie/now_playing"
        );
        assert_eq!(
            client.list_url(ListKind::Popular),
            "https://api.themoviedb.org/3/movie/popular"
        );
    }

    #[test]
    fn test_list_query() {
        let client = client();
        assert_eq!(
            client.list_query(),
            ListQuery { api_key: "secret", language: "en-US", page: 1, region: "kr" }
        );
        let encoded = serde_json::to_value(client.list_query()).unwrap();
        assert_eq!(encoded["page"], 1);
        assert_eq!(encoded["region"], "kr");
    }

    #[test]
    fn test_error_body() {
        let body: ErrorBody =
            decode(r#"{"status_code":7,"status_message":"Invalid API key"}"#).unwrap();
        assert_eq!(body.status_message.as_deref(), Some("Invalid API key"));
        let body: ErrorBody = decode("{}").unwrap();
        assert!(body.status_message.is_none());
    }

    #[test]
    fn test_malformed_payload_is_decode_error() {
        let err = decode::<MoviePage>(r#"{"page":1,"results":"none"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
        assert!(err.to_string().starts_with("Unexpected response: "));

        let err = decode::<MoviePage>("<html>").unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }
}
