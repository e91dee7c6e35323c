use std::sync::Arc;

use briefcheck_core::errors::GenerationError;
use briefcheck_core::models::TierRequirements;
use briefcheck_core::traits::IGenerativeModel;
use tracing::{debug, info, warn};

use super::parser::{parse_tier_response, TierParseOutcome};
use super::prompt::{build_reformat_prompt, build_tier_prompt};

/// Splits a briefing's requirements into the four tiers with one model call,
/// plus up to `parse_retries` reformatting follow-ups after an unusable answer.
pub struct TierClassifier {
    model: Arc<dyn IGenerativeModel>,
    parse_retries: u32,
}

impl TierClassifier {
    pub fn new(model: Arc<dyn IGenerativeModel>) -> Self {
        Self {
            model,
            parse_retries: 0,
        }
    }

    pub fn with_parse_retries(mut self, retries: u32) -> Self {
        self.parse_retries = retries;
        self
    }

    /// Model failures and answers that never satisfy the contract are
    /// returned as errors; they are never replaced with empty tiers.
    pub fn extract_tier_requirements(
        &self,
        briefing_text: &str,
    ) -> Result<TierRequirements, GenerationError> {
        if briefing_text.trim().is_empty() {
            debug!("empty briefing, no requirements to classify");
            return Ok(TierRequirements::default());
        }

        let mut prompt = build_tier_prompt(briefing_text);
        let mut attempt = 0u32;
        loop {
            let answer = self.model.generate(&prompt).inspect_err(|e| {
                warn!(model = self.model.name(), error = %e, "tier classification call failed");
            })?;

            match parse_tier_response(&answer) {
                TierParseOutcome::Parsed {
                    requirements,
                    missing,
                    ignored,
                } => {
                    if !missing.is_empty() {
                        let keys: Vec<&str> = missing.iter().map(|t| t.key()).collect();
                        warn!(model = self.model.name(), missing = ?keys, "tiers missing from answer, treated as empty");
                    }
                    if !ignored.is_empty() {
                        warn!(model = self.model.name(), ignored = ?ignored, "unexpected keys in answer ignored");
                    }
                    info!(
                        model = self.model.name(),
                        essential = requirements.essential.len(),
                        medium = requirements.medium.len(),
                        advanced = requirements.advanced.len(),
                        expert = requirements.expert.len(),
                        "briefing requirements classified"
                    );
                    return Ok(requirements);
                }
                TierParseOutcome::Failed { raw, reason } => {
                    if attempt >= self.parse_retries {
                        warn!(model = self.model.name(), %reason, "tier answer unusable");
                        return Err(GenerationError::MalformedResponse { reason, raw });
                    }
                    attempt += 1;
                    warn!(model = self.model.name(), attempt, %reason, "tier answer unusable, asking again");
                    prompt = build_reformat_prompt(briefing_text, &raw, &reason);
                }
            }
        }
    }
}
