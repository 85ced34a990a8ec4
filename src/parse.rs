//! Parsing plans from producer output.
//!
//! The external generator is asked for a bare JSON array, but sometimes
//! wraps it in a markdown code fence (```` ```json ... ``` ````). The fence is
//! stripped before deserializing.

use thiserror::Error;

use crate::models::SchedulePlan;

/// Errors that can occur while parsing producer output.
#[derive(Debug, Error)]
pub enum PlanParseError {
    #[error("plan output is empty")]
    Empty,

    #[error("invalid plan JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Removes a surrounding markdown code fence, if present.
///
/// Returns the inner text and whether a fence was found.
fn strip_code_fence(text: &str) -> (&str, bool) {
    let trimmed = text.trim();
    let opened = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"));

    match opened {
        Some(rest) => {
            let inner = rest.strip_suffix("```").unwrap_or(rest);
            (inner.trim(), true)
        }
        None => (trimmed, false),
    }
}

/// Parses producer output into a plan.
///
/// Accepts a bare JSON array or one wrapped in a markdown code fence.
/// Shape checking is limited to what deserialization enforces; run
/// [`validate_plan`](crate::validation::validate_plan) for integrity checks.
pub fn parse_plan(text: &str) -> Result<SchedulePlan, PlanParseError> {
    let (json, fenced) = strip_code_fence(text);
    if fenced {
        tracing::warn!("plan output was wrapped in a code fence; stripped it");
    }
    if json.is_empty() {
        return Err(PlanParseError::Empty);
    }

    serde_json::from_str(json).map_err(|e| {
        tracing::debug!(error = %e, len = json.len(), "failed to parse plan output");
        PlanParseError::from(e)
    })
}
