//! Read-only product catalog loaded once at startup.

use crate::domain::catalog::{Product, ProductId};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog file {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate product id {0} in catalog")]
    DuplicateId(ProductId),
    #[error("product {0} has a negative or non-finite price")]
    InvalidPrice(ProductId),
}

/// On-disk layout: `{ "products": [ ... ] }`.
#[derive(Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
}

/// The in-memory catalog. Product order is the file order and is preserved by every query.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// Builds a store from already-parsed products, checking id uniqueness and prices.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for p in &products {
            if !seen.insert(p.id) {
                return Err(CatalogError::DuplicateId(p.id));
            }
            if !p.price.is_finite() || p.price < 0.0 {
                return Err(CatalogError::InvalidPrice(p.id));
            }
        }
        Ok(Self { products })
    }

    /// Loads the catalog file synchronously. Meant to run once before the server starts.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: CatalogFile = serde_json::from_str(&raw).map_err(|source| CatalogError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(file.products)
    }

    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    /// Products whose category equals `category` ignoring case.
    /// A blank category means no filter.
    pub fn list_by_category(&self, category: &str) -> Vec<Product> {
        let category = category.trim();
        if category.is_empty() {
            return self.products.clone();
        }
        self.products
            .iter()
            .filter(|p| p.in_category(category))
            .cloned()
            .collect()
    }

    /// Joins a list of ids against the catalog.
    ///
    /// The result follows catalog order, not the order of `ids`. Unknown ids are dropped
    /// and repeated ids do not repeat products.
    pub fn select_ids(&self, ids: &[ProductId]) -> Vec<Product> {
        let wanted: HashSet<ProductId> = ids.iter().copied().collect();
        self.products
            .iter()
            .filter(|p| wanted.contains(&p.id))
            .cloned()
            .collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for p in &self.products {
            if !out.iter().any(|c| c.eq_ignore_ascii_case(&p.category)) {
                out.push(p.category.clone());
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: ProductId, category: &str) -> Product {
        Product {
            id,
            name: format!("p{}", id),
            category: category.to_string(),
            price: 100.0 * id as f64,
            description: String::new(),
            tags: vec![],
        }
    }

    fn store() -> CatalogStore {
        CatalogStore::new(vec![
            product(1, "Electronics"),
            product(2, "Gaming"),
            product(3, "electronics"),
            product(4, "Accessories"),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = CatalogStore::new(vec![product(1, "A"), product(1, "B")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(1)));
    }

    #[test]
    fn rejects_negative_price() {
        let mut p = product(5, "A");
        p.price = -1.0;
        let err = CatalogStore::new(vec![p]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPrice(5)));
    }

    #[test]
    fn category_filter_matches_subset_of_all() {
        let store = store();
        for category in ["Electronics", "ELECTRONICS", "gaming", "Accessories", "Unknown"] {
            let expected: Vec<Product> = store
                .list_all()
                .iter()
                .filter(|p| p.category.to_lowercase() == category.to_lowercase())
                .cloned()
                .collect();
            assert_eq!(store.list_by_category(category), expected, "category {}", category);
        }
        let ids: Vec<_> = store.list_by_category("electronics").iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn blank_category_returns_everything() {
        let store = store();
        assert_eq!(store.list_by_category(""), store.list_all().to_vec());
        assert_eq!(store.list_by_category("   ").len(), 4);
    }

    #[test]
    fn select_ids_keeps_catalog_order_and_drops_unknown() {
        let store = store();
        let ids: Vec<_> = store
            .select_ids(&[4, 999, 1, 1])
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 4]);
        assert!(store.select_ids(&[]).is_empty());
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        assert_eq!(store().categories(), vec!["Electronics", "Gaming", "Accessories"]);
    }

    #[test]
    fn loads_bundled_catalog() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/products.json");
        let store = CatalogStore::load(path).unwrap();
        assert!(!store.is_empty());
        assert_eq!(store.categories(), vec!["Electronics", "Gaming", "Accessories"]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = CatalogStore::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
