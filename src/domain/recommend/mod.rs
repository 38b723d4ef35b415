//! Natural-language product recommendation.
//!
//! The domain side only knows the contract: a [`Query`] plus the catalog goes in, a
//! [`RecommendationResult`] comes out. The LLM-backed implementation lives in
//! `infra::llm`.

use crate::domain::catalog::{Product, ProductId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

pub mod extract;
pub mod prompt;

pub use extract::extract_recommendation;
pub use prompt::build_prompt;

/// Summary used when the model returns no usable summary.
pub const DEFAULT_SUMMARY: &str = "Here are matching products.";

/// Summary used when the model reply (or the call itself) could not be turned into a result.
pub const FALLBACK_SUMMARY: &str = "AI parsing failed.";

/// A user query, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Returns `None` for missing or blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Structured reply of the recommender. `product_ids` may reference ids the catalog
/// does not contain; they are dropped when joined against the store.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub product_ids: Vec<ProductId>,
    pub summary: String,
}

impl RecommendationResult {
    /// The degraded result returned whenever the model output is unusable.
    pub fn fallback() -> Self {
        Self {
            product_ids: Vec::new(),
            summary: FALLBACK_SUMMARY.to_string(),
        }
    }
}

/// Anything that can match a query against the catalog.
///
/// Implementations are expected to degrade gracefully on bad model output. An `Err` here
/// means something unexpected happened and is reported to the HTTP caller as a 502.
#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(
        &self,
        query: &Query,
        catalog: &[Product],
    ) -> anyhow::Result<RecommendationResult>;
}
