use crate::app::discovery_service::DiscoveryService;
use crate::domain::catalog::Product;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<DiscoveryService>,
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductsQuery {
    /// Case-insensitive category filter. Omitted or empty returns every product.
    pub category: Option<String>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct AskRequest {
    /// Free-text description of what the user is looking for. Kept as raw JSON so a
    /// non-string value is reported as a missing query, not as a malformed body.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub query: Option<JsonValue>,
}

impl AskRequest {
    /// The query text, if `query` is a string.
    pub fn query_text(&self) -> Option<&str> {
        self.query.as_ref().and_then(JsonValue::as_str)
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ProductsResponse {
    pub success: bool,
    pub count: usize,
    pub products: Vec<Product>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct AskResponse {
    pub success: bool,
    /// The trimmed query that was sent to the model.
    pub query: String,
    pub summary: String,
    /// Matched products in catalog order.
    pub products: Vec<Product>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

pub fn error_response(
    status: StatusCode,
    message: impl Into<String>,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            success: false,
            error: message.into(),
        }),
    )
}

pub fn json_400(err: JsonRejection, expected: &str) -> (StatusCode, Json<ErrorResponse>) {
    error_response(
        StatusCode::BAD_REQUEST,
        format!("Invalid JSON body: {} (expected: {})", err, expected),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(body: &str) -> AskRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn non_string_query_deserializes_without_text() {
        for body in [r#"{"query":123}"#, r#"{"query":["a"]}"#, r#"{"query":null}"#, "{}"] {
            assert_eq!(request(body).query_text(), None, "body {}", body);
        }
        assert_eq!(request(r#"{"query":" laptop "}"#).query_text(), Some(" laptop "));
    }
}
