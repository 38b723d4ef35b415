//! Shared fixtures: an in-process API server and a fake chat-completion upstream.
#![allow(dead_code)]

use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use product_discovery::domain::recommend::Recommender;
use product_discovery::{
    transport, CatalogStore, DiscoveryService, LlmConfig, LlmRecommender, Product,
};
use serde_json::{json, Value as JsonValue};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Three products; ids 1 and 3 share a category spelled with different case.
pub fn sample_catalog() -> CatalogStore {
    let product = |id: i64, name: &str, category: &str, price: f64, tags: &[&str]| Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price,
        description: format!("{} description", name),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    };
    CatalogStore::new(vec![
        product(1, "Budget Laptop", "Electronics", 32990.0, &["laptop", "budget"]),
        product(2, "Game Pad", "Gaming", 1899.0, &["controller", "wireless"]),
        product(3, "Smart Plug", "electronics", 999.0, &["smart-home"]),
    ])
    .expect("sample catalog is valid")
}

/// Binds an ephemeral port, serves `router` on it and returns the base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

/// Starts the API with the sample catalog and the given recommender.
pub async fn spawn_app(recommender: Option<Arc<dyn Recommender>>) -> String {
    let service = DiscoveryService::new(Arc::new(sample_catalog()), recommender);
    let app_state = transport::http::AppState {
        service: Arc::new(service),
    };
    serve(transport::http::create_router(app_state)).await
}

/// One request as seen by the fake upstream: `Authorization` header and JSON body.
pub type SeenRequest = (Option<String>, JsonValue);

#[derive(Clone)]
struct FakeLlm {
    status: StatusCode,
    reply: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

async fn fake_completions(
    State(fake): State<FakeLlm>,
    headers: HeaderMap,
    Json(body): Json<JsonValue>,
) -> (StatusCode, Json<JsonValue>) {
    let auth = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    fake.seen.lock().unwrap().push((auth, body));

    if fake.status.is_success() {
        (
            fake.status,
            Json(json!({
                "id": "cmpl-test",
                "choices": [{
                    "index": 0,
                    "message": { "role": "assistant", "content": fake.reply }
                }]
            })),
        )
    } else {
        (fake.status, Json(json!({ "error": { "message": fake.reply } })))
    }
}

/// Fake OpenAI-compatible upstream answering every completion with `reply`.
/// Returns the base URL (ending in `/v1`) and the log of received requests.
pub async fn spawn_fake_llm(
    status: StatusCode,
    reply: &str,
) -> (String, Arc<Mutex<Vec<SeenRequest>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let fake = FakeLlm {
        status,
        reply: reply.to_string(),
        seen: seen.clone(),
    };
    let router = Router::new()
        .route("/v1/chat/completions", post(fake_completions))
        .with_state(fake);
    let base = serve(router).await;
    (format!("{}/v1", base), seen)
}

pub fn llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        api_key: Some("test-key".to_string()),
        base_url: base_url.to_string(),
        model: "test-model".to_string(),
        timeout: Duration::from_secs(5),
    }
}

/// API backed by a real [`LlmRecommender`] talking to a fake upstream that always replies `reply`.
pub async fn spawn_app_with_llm(reply: &str) -> (String, Arc<Mutex<Vec<SeenRequest>>>) {
    let (llm_url, seen) = spawn_fake_llm(StatusCode::OK, reply).await;
    let recommender = LlmRecommender::new(llm_config(&llm_url)).expect("recommender");
    let base = spawn_app(Some(Arc::new(recommender))).await;
    (base, seen)
}

pub fn ids(products: &JsonValue) -> Vec<i64> {
    products
        .as_array()
        .expect("products array")
        .iter()
        .map(|p| p["id"].as_i64().expect("numeric id"))
        .collect()
}
