use crate::transport::http::types::{AppState, ProductsQuery, ProductsResponse};
use axum::extract::{Query, State};
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/products",
    params(ProductsQuery),
    responses(
        (status = 200, description = "Catalog, optionally filtered by category",
            body = ProductsResponse)
    )
)]
pub async fn list_products_handler(
    State(state): State<AppState>,
    Query(params): Query<ProductsQuery>,
) -> Json<ProductsResponse> {
    let products = state.service.products(params.category.as_deref());
    Json(ProductsResponse {
        success: true,
        count: products.len(),
        products,
    })
}
