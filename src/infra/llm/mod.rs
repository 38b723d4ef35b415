pub mod client;
pub mod recommender;

pub use client::{ChatCompletionClient, CompletionError};
pub use recommender::LlmRecommender;
