//! Best-effort extraction of a recommendation from free-text model output.
//!
//! Models are asked for bare JSON but routinely wrap it in Markdown fences or add prose
//! around it. The extraction is permissive and never fails outward: anything unusable
//! becomes [`RecommendationResult::fallback`].

use super::{RecommendationResult, DEFAULT_SUMMARY};
use crate::domain::catalog::ProductId;
use regex::Regex;
use serde_json::Value as JsonValue;
use std::sync::OnceLock;
use thiserror::Error;

/// Why a reply could not be turned into a result. Only used for logging.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("model reply is empty")]
    Empty,
    #[error("no JSON object found in model reply")]
    NoJsonObject,
    #[error("model reply is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

fn fence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"```json|```").expect("static regex"))
}

// Greedy on purpose: first `{` through last `}`.
fn object_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("static regex"))
}

/// Extracts a recommendation, substituting the fallback result on any failure.
pub fn extract_recommendation(raw: &str) -> RecommendationResult {
    try_extract_recommendation(raw).unwrap_or_else(|_| RecommendationResult::fallback())
}

/// Same as [`extract_recommendation`] but reports why extraction failed.
pub fn try_extract_recommendation(raw: &str) -> Result<RecommendationResult, ExtractError> {
    let cleaned = fence_re().replace_all(raw.trim(), "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Err(ExtractError::Empty);
    }

    let object = object_re()
        .find(cleaned)
        .ok_or(ExtractError::NoJsonObject)?
        .as_str();
    let parsed: JsonValue = serde_json::from_str(object)?;

    Ok(RecommendationResult {
        product_ids: coerce_ids(parsed.get("productIds")),
        summary: coerce_summary(parsed.get("summary")),
    })
}

/// Anything but an array becomes an empty list. Non-integer entries are skipped;
/// integral floats such as `3.0` count as ids.
fn coerce_ids(value: Option<&JsonValue>) -> Vec<ProductId> {
    let Some(JsonValue::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|v| {
            v.as_i64().or_else(|| {
                v.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            })
        })
        .collect()
}

fn coerce_summary(value: Option<&JsonValue>) -> String {
    match value.and_then(JsonValue::as_str) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => DEFAULT_SUMMARY.to_string(),
    }
}
