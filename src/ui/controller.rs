//! Drives [`UiState`] from user actions by calling the catalog API.

use crate::domain::recommend::Query;
use crate::ui::api::{ApiClientError, CatalogApi};
use crate::ui::state::{UiEvent, UiState};
use tracing::{debug, warn};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load products. Make sure the backend is running.";
pub const AI_UNAVAILABLE_MESSAGE: &str = "AI service is currently unavailable.";

pub struct CatalogBrowser<A> {
    api: A,
    state: UiState,
}

impl<A: CatalogApi> CatalogBrowser<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: UiState::default(),
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Loads the catalog (optionally filtered) into the browse view.
    pub async fn load_products(&mut self, category: &str) {
        if !self.state.can_submit() {
            return;
        }
        let category = category.trim().to_string();
        self.state.apply(UiEvent::RequestStarted);

        match self.api.fetch_products(&category).await {
            Ok(products) => {
                debug!(count = products.len(), category = %category, "products loaded");
                self.state.apply(UiEvent::ProductsLoaded { category, products });
            }
            Err(e) => {
                warn!(error = %e, "loading products failed");
                self.state
                    .apply(UiEvent::RequestFailed(LOAD_FAILED_MESSAGE.to_string()));
            }
        }
    }

    /// Selecting a tab always lands in the browse view.
    pub async fn select_category(&mut self, category: &str) {
        self.load_products(category).await;
    }

    pub async fn show_all(&mut self) {
        self.load_products("").await;
    }

    /// Submits a query. Returns `false` when nothing was sent (blank input or a request
    /// already in flight).
    pub async fn ask(&mut self, raw: &str) -> bool {
        let Some(query) = Query::parse(raw) else {
            return false;
        };
        if !self.state.can_submit() {
            return false;
        }
        self.state.apply(UiEvent::RequestStarted);

        match self.api.ask(query.as_str()).await {
            Ok(answer) => self.state.apply(UiEvent::AnswerReceived {
                query: answer.query,
                summary: answer.summary,
                products: answer.products,
            }),
            Err(e) => {
                warn!(error = %e, "ask failed");
                self.state.apply(UiEvent::RequestFailed(ask_error_message(&e)));
            }
        }
        true
    }

    pub fn dismiss_error(&mut self) {
        self.state.apply(UiEvent::ErrorDismissed);
    }
}

fn ask_error_message(err: &ApiClientError) -> String {
    if err.is_server_reported() {
        err.to_string()
    } else {
        AI_UNAVAILABLE_MESSAGE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Product;
    use crate::transport::http::types::AskResponse;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeApi {
        fail_products: bool,
        ask_error: Option<String>,
        asked: Mutex<Vec<String>>,
    }

    fn product(id: i64, category: &str) -> Product {
        Product {
            id,
            name: format!("p{}", id),
            category: category.into(),
            price: 1.0,
            description: String::new(),
            tags: vec![],
        }
    }

    #[async_trait]
    impl CatalogApi for FakeApi {
        async fn fetch_products(&self, category: &str) -> Result<Vec<Product>, ApiClientError> {
            if self.fail_products {
                return Err(ApiClientError::Status(500));
            }
            let all = vec![product(1, "Gaming"), product(2, "Electronics")];
            Ok(all
                .into_iter()
                .filter(|p| category.is_empty() || p.in_category(category))
                .collect())
        }

        async fn ask(&self, query: &str) -> Result<AskResponse, ApiClientError> {
            self.asked.lock().unwrap().push(query.to_string());
            if let Some(msg) = &self.ask_error {
                return Err(ApiClientError::Server(msg.clone()));
            }
            Ok(AskResponse {
                success: true,
                query: query.to_string(),
                summary: "one match".into(),
                products: vec![product(2, "Electronics")],
            })
        }
    }

    #[tokio::test]
    async fn ask_then_show_all() {
        let mut ui = CatalogBrowser::new(FakeApi::default());
        ui.load_products("").await;
        assert_eq!(ui.state().view.products().len(), 2);

        assert!(ui.ask("  laptop  ").await);
        assert!(ui.state().view.is_ai_result());
        assert_eq!(ui.api.asked.lock().unwrap().as_slice(), ["laptop"]);

        ui.show_all().await;
        assert!(!ui.state().view.is_ai_result());
        assert_eq!(ui.state().view.products().len(), 2);
    }

    #[tokio::test]
    async fn blank_query_is_not_sent() {
        let mut ui = CatalogBrowser::new(FakeApi::default());
        assert!(!ui.ask("   ").await);
        assert!(ui.api.asked.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn category_tab_from_ai_view_returns_to_browse() {
        let mut ui = CatalogBrowser::new(FakeApi::default());
        ui.ask("x").await;
        ui.select_category("gaming").await;
        let ids: Vec<_> = ui.state().view.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);
        assert!(!ui.state().view.is_ai_result());
    }

    #[tokio::test]
    async fn load_failure_shows_fixed_message() {
        let mut ui = CatalogBrowser::new(FakeApi {
            fail_products: true,
            ..FakeApi::default()
        });
        ui.load_products("").await;
        assert_eq!(ui.state().error.as_deref(), Some(LOAD_FAILED_MESSAGE));
        assert!(!ui.state().loading);
        ui.dismiss_error();
        assert_eq!(ui.state().error, None);
    }

    #[tokio::test]
    async fn ask_failure_surfaces_server_message() {
        let mut ui = CatalogBrowser::new(FakeApi {
            ask_error: Some("Add GEMINI_API_KEY to .env file".into()),
            ..FakeApi::default()
        });
        ui.ask("x").await;
        assert_eq!(
            ui.state().error.as_deref(),
            Some("Add GEMINI_API_KEY to .env file")
        );
        assert!(!ui.state().view.is_ai_result());
    }

    #[test]
    fn transport_failures_use_generic_message() {
        let err = ApiClientError::Decode(serde_json::from_str::<u8>("x").unwrap_err());
        assert_eq!(ask_error_message(&err), AI_UNAVAILABLE_MESSAGE);
    }
}
