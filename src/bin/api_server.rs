// src/bin/api_server.rs

use anyhow::Context;
use axum::http::HeaderValue;
use product_discovery::domain::recommend::Recommender;
use product_discovery::infra::config::{self, API_KEY_VAR};
use product_discovery::infra::logging::init_tracing;
use product_discovery::{transport, CatalogStore, DiscoveryService, LlmConfig, LlmRecommender};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing("info,tower_http=info");

    // --- Catalog (fatal if it cannot be loaded) ---
    let catalog_path = config::catalog_path();
    let catalog = CatalogStore::load(&catalog_path)
        .with_context(|| format!("loading catalog from {}", catalog_path.display()))?;
    info!(
        path = %catalog_path.display(),
        products = catalog.len(),
        categories = ?catalog.categories(),
        "catalog loaded"
    );

    // --- Recommender (optional: /api/ask answers 502 without a credential) ---
    let llm_config = LlmConfig::from_env()?;
    let recommender: Option<Arc<dyn Recommender>> = if llm_config.is_configured() {
        info!(model = %llm_config.model, base_url = %llm_config.base_url, "AI API configured ✓");
        Some(Arc::new(LlmRecommender::new(llm_config)?))
    } else {
        warn!("AI API NOT configured ✗ (set {})", API_KEY_VAR);
        None
    };

    let app_state = transport::http::AppState {
        service: Arc::new(DiscoveryService::new(Arc::new(catalog), recommender)),
    };

    // --- API Server ---
    let frontend_url = config::frontend_url();
    let origin = HeaderValue::from_str(&frontend_url)
        .with_context(|| format!("FRONTEND_URL is not a valid origin: {}", frontend_url))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = transport::http::create_router(app_state)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let port = config::port()?;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("server running on http://localhost:{}", port);
    info!("Swagger UI available at http://localhost:{}/swagger-ui", port);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
        }
    }

    Ok(())
}
