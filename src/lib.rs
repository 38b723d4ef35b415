pub mod app;
pub mod domain;
pub mod infra;
pub mod transport;
pub mod ui;

// Convenience re-exports (keeps call-sites clean)
pub use app::discovery_service::DiscoveryService;
pub use domain::catalog::{CatalogStore, Product};
pub use domain::recommend::{Query, RecommendationResult, Recommender};
pub use infra::config::LlmConfig;
pub use infra::llm::LlmRecommender;
