use crate::domain::catalog::Product;
use crate::domain::recommend::extract::try_extract_recommendation;
use crate::domain::recommend::prompt::SYSTEM_INSTRUCTION;
use crate::domain::recommend::{build_prompt, Query, RecommendationResult, Recommender};
use crate::infra::config::LlmConfig;
use crate::infra::llm::client::{ChatCompletionClient, CompletionError};
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Recommender backed by a chat-completion model.
///
/// Never returns `Err`: upstream failures and unparseable replies both degrade to
/// [`RecommendationResult::fallback`]. The 502 `AI error` response of `/api/ask` is
/// therefore only reachable with other [`Recommender`] implementations.
pub struct LlmRecommender {
    client: ChatCompletionClient,
}

impl LlmRecommender {
    pub fn new(config: LlmConfig) -> Result<Self, CompletionError> {
        Ok(Self {
            client: ChatCompletionClient::new(config)?,
        })
    }
}

#[async_trait]
impl Recommender for LlmRecommender {
    async fn recommend(
        &self,
        query: &Query,
        catalog: &[Product],
    ) -> anyhow::Result<RecommendationResult> {
        let prompt = build_prompt(query, catalog);

        let raw = match self.client.complete(SYSTEM_INSTRUCTION, &prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    model = self.client.model(),
                    error = %e,
                    "completion call failed, using fallback"
                );
                return Ok(RecommendationResult::fallback());
            }
        };
        debug!(reply = %raw, "raw model reply");

        match try_extract_recommendation(&raw) {
            Ok(result) => {
                info!(matched = result.product_ids.len(), "recommendation parsed");
                Ok(result)
            }
            Err(e) => {
                warn!(error = %e, "could not parse model reply, using fallback");
                Ok(RecommendationResult::fallback())
            }
        }
    }
}
