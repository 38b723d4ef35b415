//! View state of the front end.
//!
//! The two display modes are variants of [`View`], so "AI results shown while a category
//! tab is active" cannot be represented. Everything changes through [`UiState::apply`].

use crate::domain::catalog::Product;

/// Category tabs offered in the browse view. The empty string is "All".
pub const CATEGORIES: [&str; 4] = ["", "Electronics", "Gaming", "Accessories"];

/// Suggestions shown under the ask box.
pub const EXAMPLE_QUERIES: [&str; 4] = [
    "budget laptop for students",
    "good for gaming under 10000",
    "wireless audio accessories",
    "home automation devices",
];

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Catalog listing. `category` is empty when no filter is active.
    Browse {
        category: String,
        products: Vec<Product>,
    },
    /// Products matched by the last query.
    AiResult {
        query: String,
        summary: String,
        products: Vec<Product>,
    },
}

impl View {
    pub fn products(&self) -> &[Product] {
        match self {
            View::Browse { products, .. } | View::AiResult { products, .. } => products,
        }
    }

    pub fn is_ai_result(&self) -> bool {
        matches!(self, View::AiResult { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    RequestStarted,
    ProductsLoaded {
        category: String,
        products: Vec<Product>,
    },
    AnswerReceived {
        query: String,
        summary: String,
        products: Vec<Product>,
    },
    RequestFailed(String),
    ErrorDismissed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub view: View,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            view: View::Browse {
                category: String::new(),
                products: Vec::new(),
            },
            loading: false,
            error: None,
        }
    }
}

impl UiState {
    /// Only one request may be outstanding at a time.
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::RequestStarted => {
                self.loading = true;
                self.error = None;
            }
            UiEvent::ProductsLoaded { category, products } => {
                self.loading = false;
                self.error = None;
                self.view = View::Browse { category, products };
            }
            UiEvent::AnswerReceived {
                query,
                summary,
                products,
            } => {
                self.loading = false;
                self.error = None;
                self.view = View::AiResult {
                    query,
                    summary,
                    products,
                };
            }
            // The view is left as it was.
            UiEvent::RequestFailed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            UiEvent::ErrorDismissed => self.error = None,
        }
    }
}
