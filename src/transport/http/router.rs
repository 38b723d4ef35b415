use crate::domain::catalog::Product;
use crate::domain::recommend::RecommendationResult;
use crate::transport::http::handlers::{ask, health, products};
use crate::transport::http::types::{
    AppState, AskRequest, AskResponse, ErrorResponse, HealthResponse, ProductsResponse,
};
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        products::list_products_handler,
        ask::ask_handler
    ),
    components(schemas(
        Product,
        RecommendationResult,
        AskRequest,
        AskResponse,
        ProductsResponse,
        ErrorResponse,
        HealthResponse
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/products", get(products::list_products_handler))
        .route("/api/ask", post(ask::ask_handler))
        .with_state(app_state)
}
