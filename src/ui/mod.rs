//! Terminal front end: API client, view state, controller and text rendering.

pub mod api;
pub mod controller;
pub mod render;
pub mod state;

pub use api::{ApiClientError, CatalogApi, HttpCatalogApi};
pub use controller::CatalogBrowser;
pub use render::render;
pub use state::{UiEvent, UiState, View};
