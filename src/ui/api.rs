//! HTTP client for the catalog API, used by the terminal front end.

use crate::domain::catalog::Product;
use crate::transport::http::types::{AskResponse, ErrorResponse, ProductsResponse};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// Non-2xx response that carried an `error` message.
    #[error("{0}")]
    Server(String),
    /// Non-2xx response without a readable error body.
    #[error("HTTP {0}")]
    Status(u16),
}

impl ApiClientError {
    /// Whether the backend answered at all (as opposed to a transport or decode failure).
    pub fn is_server_reported(&self) -> bool {
        matches!(self, ApiClientError::Server(_) | ApiClientError::Status(_))
    }
}

/// The two calls the front end makes.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetches the catalog; an empty `category` means no filter.
    async fn fetch_products(&self, category: &str) -> Result<Vec<Product>, ApiClientError>;

    async fn ask(&self, query: &str) -> Result<AskResponse, ApiClientError>;
}

pub struct HttpCatalogApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn error_from_body(status: reqwest::StatusCode, body: &str) -> ApiClientError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(e) if !e.error.is_empty() => ApiClientError::Server(e.error),
        _ => ApiClientError::Status(status.as_u16()),
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn fetch_products(&self, category: &str) -> Result<Vec<Product>, ApiClientError> {
        let mut request = self.client.get(format!("{}/api/products", self.base_url));
        if !category.is_empty() {
            request = request.query(&[("category", category)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiClientError::Status(status.as_u16()));
        }
        let body: ProductsResponse = response.json().await?;
        Ok(body.products)
    }

    async fn ask(&self, query: &str) -> Result<AskResponse, ApiClientError> {
        let response = self
            .client
            .post(format!("{}/api/ask", self.base_url))
            .json(&serde_json::json!({ "query": query }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(error_from_body(status, &body));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_message_is_preferred() {
        let err = error_from_body(
            reqwest::StatusCode::BAD_GATEWAY,
            r#"{"success":false,"error":"Add GEMINI_API_KEY to .env file"}"#,
        );
        assert_eq!(err.to_string(), "Add GEMINI_API_KEY to .env file");
        assert!(err.is_server_reported());
    }

    #[test]
    fn unreadable_error_body_falls_back_to_status() {
        let err = error_from_body(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let api = HttpCatalogApi::new("http://localhost:5000/");
        assert_eq!(api.base_url(), "http://localhost:5000");
    }
}
