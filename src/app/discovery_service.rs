//! The product discovery service.
//!
//! Sits between the HTTP layer and the domain. It is responsible for:
//! 1.  Serving the catalog, optionally filtered by category.
//! 2.  Running a query through the configured [`Recommender`] and joining the returned ids
//!     against the catalog.

use crate::domain::catalog::{CatalogStore, Product};
use crate::domain::recommend::{Query, Recommender};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum AskError {
    /// No recommender could be built because the API credential is missing.
    #[error("recommendation backend is not configured")]
    NotConfigured,
    /// The recommender failed in a way it did not recover from itself. `LlmRecommender`
    /// never does this; it falls back instead.
    #[error(transparent)]
    Recommender(#[from] anyhow::Error),
}

/// Products matched for one query.
#[derive(Debug, Clone)]
pub struct AskOutcome {
    pub query: Query,
    pub summary: String,
    pub products: Vec<Product>,
}

/// Shared, read-only after construction.
pub struct DiscoveryService {
    catalog: Arc<CatalogStore>,
    recommender: Option<Arc<dyn Recommender>>,
}

impl DiscoveryService {
    pub fn new(catalog: Arc<CatalogStore>, recommender: Option<Arc<dyn Recommender>>) -> Self {
        Self {
            catalog,
            recommender,
        }
    }

    pub fn is_ai_configured(&self) -> bool {
        self.recommender.is_some()
    }

    /// All products, or those in `category` when it is given and non-blank.
    pub fn products(&self, category: Option<&str>) -> Vec<Product> {
        match category {
            Some(c) => self.catalog.list_by_category(c),
            None => self.catalog.list_all().to_vec(),
        }
    }

    pub async fn ask(&self, query: Query) -> Result<AskOutcome, AskError> {
        let recommender = self.recommender.as_ref().ok_or(AskError::NotConfigured)?;

        let result = recommender
            .recommend(&query, self.catalog.list_all())
            .await?;
        let products = self.catalog.select_ids(&result.product_ids);
        info!(
            query = %query,
            returned = result.product_ids.len(),
            matched = products.len(),
            "ask completed"
        );

        Ok(AskOutcome {
            query,
            summary: result.summary,
            products,
        })
    }
}
