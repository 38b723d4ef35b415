//! Prompt construction for the recommendation call.

use crate::domain::catalog::{Product, ProductId};
use crate::domain::recommend::Query;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// System instruction sent alongside every prompt.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a product recommendation assistant. Reply with JSON only, no prose and no Markdown.";

/// The reduced view of a product the model gets to see.
#[derive(Serialize, Debug)]
struct ProductContext<'a> {
    id: ProductId,
    name: &'a str,
    category: &'a str,
    price: JsonValue,
    tags: String,
}

impl<'a> From<&'a Product> for ProductContext<'a> {
    fn from(p: &'a Product) -> Self {
        Self {
            id: p.id,
            name: &p.name,
            category: &p.category,
            price: price_json(p.price),
            tags: p.tags.join(", "),
        }
    }
}

// Whole prices render as integers (`42990`, not `42990.0`).
fn price_json(price: f64) -> JsonValue {
    if price.fract() == 0.0 && price.abs() < i64::MAX as f64 {
        JsonValue::from(price as i64)
    } else {
        JsonValue::from(price)
    }
}

/// Builds the user prompt: catalog projection, the query, and the required reply shape.
pub fn build_prompt(query: &Query, catalog: &[Product]) -> String {
    let context: Vec<ProductContext<'_>> = catalog.iter().map(ProductContext::from).collect();
    // Serializing borrowed strings and plain numbers cannot fail.
    let catalog_json = serde_json::to_string_pretty(&context).unwrap_or_else(|_| "[]".to_string());

    format!(
        "You are a product recommendation assistant.\n\
         Product Catalog:\n\
         {catalog_json}\n\
         User Query: \"{query}\"\n\
         Respond ONLY with valid JSON, no extra text:\n\
         {{\"productIds\": [array of matching product IDs as numbers], \"summary\": \"brief explanation\"}}"
    )
}
