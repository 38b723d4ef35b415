use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product identifier as it appears in the catalog file and in model replies.
pub type ProductId = i64;

/// A single catalog entry. Immutable once the catalog is loaded.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Free-form category name (e.g. `Electronics`, `Gaming`, `Accessories`).
    pub category: String,
    /// Price in rupees. Never negative.
    pub price: f64,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    /// Case-insensitive exact category comparison.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}
