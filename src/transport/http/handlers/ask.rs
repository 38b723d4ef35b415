use crate::app::discovery_service::AskError;
use crate::domain::recommend::Query;
use crate::infra::config::API_KEY_VAR;
use crate::transport::http::types::{error_response, json_400, AppState, AskRequest, AskResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::{error, warn};

#[utoipa::path(
    post,
    path = "/api/ask",
    request_body = AskRequest,
    responses(
        (status = 200, description = "Products matched by the model (possibly none)",
            body = AskResponse),
        (status = 400, description = "Missing or blank query",
            body = crate::transport::http::types::ErrorResponse),
        (status = 502, description = "AI backend not configured or failed",
            body = crate::transport::http::types::ErrorResponse)
    )
)]
pub async fn ask_handler(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(p) => p,
        Err(e) => return json_400(e, "{ \"query\": string }").into_response(),
    };

    let Some(query) = request.query_text().and_then(Query::parse) else {
        return error_response(StatusCode::BAD_REQUEST, "Query required").into_response();
    };

    match state.service.ask(query).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(AskResponse {
                success: true,
                query: outcome.query.to_string(),
                summary: outcome.summary,
                products: outcome.products,
            }),
        )
            .into_response(),
        Err(AskError::NotConfigured) => {
            warn!("ask rejected: {} is not set", API_KEY_VAR);
            error_response(
                StatusCode::BAD_GATEWAY,
                format!("Add {} to .env file", API_KEY_VAR),
            )
            .into_response()
        }
        Err(AskError::Recommender(e)) => {
            error!(error = %e, "recommender failed");
            error_response(StatusCode::BAD_GATEWAY, format!("AI error: {}", e)).into_response()
        }
    }
}
