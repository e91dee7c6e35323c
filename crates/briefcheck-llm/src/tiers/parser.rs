use briefcheck_core::models::{Tier, TierRequirements};
use serde_json::Value;

/// Result of validating one model answer against the tier contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TierParseOutcome {
    Parsed {
        requirements: TierRequirements,
        /// Tiers the answer left out; they are reported as empty.
        missing: Vec<Tier>,
        /// Keys outside the contract, dropped.
        ignored: Vec<String>,
    },
    Failed {
        raw: String,
        reason: String,
    },
}

impl TierParseOutcome {
    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed { .. })
    }
}

/// Validate a raw model answer.
///
/// Tolerates surrounding whitespace and one Markdown code fence. Entries are
/// trimmed and empty entries dropped.
pub fn parse_tier_response(raw: &str) -> TierParseOutcome {
    let fail = |reason: String| TierParseOutcome::Failed {
        raw: raw.to_string(),
        reason,
    };

    let body = strip_code_fence(raw.trim());
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => return fail(format!("not valid JSON: {e}")),
    };
    let Value::Object(object) = value else {
        return fail("expected a JSON object".to_string());
    };

    let mut requirements = TierRequirements::default();
    let mut missing = Vec::new();
    for tier in Tier::ALL {
        match object.get(tier.key()) {
            None => missing.push(tier),
            Some(Value::Array(items)) => {
                let slot = requirements.get_mut(tier);
                for item in items {
                    let Value::String(text) = item else {
                        return fail(format!("`{}` must contain only strings", tier.key()));
                    };
                    let text = text.trim();
                    if !text.is_empty() {
                        slot.push(text.to_string());
                    }
                }
            }
            Some(_) => return fail(format!("`{}` must be an array of strings", tier.key())),
        }
    }

    let mut ignored: Vec<String> = object
        .keys()
        .filter(|k| Tier::from_key(k).is_none())
        .cloned()
        .collect();
    ignored.sort();

    TierParseOutcome::Parsed {
        requirements,
        missing,
        ignored,
    }
}

/// Remove one enclosing ```` ``` ```` fence (with optional language tag).
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some(rest) = rest.strip_suffix("```") else {
        return text;
    };
    // Drop the info string (e.g. `json`) on the opening line.
    match rest.split_once('\n') {
        Some((_, inner)) => inner.trim(),
        None => rest.trim(),
    }
}
