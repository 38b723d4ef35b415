//! Product catalog: the record type and the read-only store.

pub mod product;
pub mod store;

pub use product::{Product, ProductId};
pub use store::{CatalogError, CatalogStore};
