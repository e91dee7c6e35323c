//! Single-call project-type classification.

use std::sync::Arc;

use briefcheck_core::constants::UNKNOWN_PROJECT_TYPE;
use briefcheck_core::errors::GenerationError;
use briefcheck_core::traits::IGenerativeModel;
use tracing::{debug, warn};

pub struct ProjectTypeDetector {
    model: Arc<dyn IGenerativeModel>,
    labels: Vec<String>,
    sample_chars: usize,
}

impl ProjectTypeDetector {
    pub fn new(model: Arc<dyn IGenerativeModel>, labels: Vec<String>, sample_chars: usize) -> Self {
        let labels = labels
            .into_iter()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        Self {
            model,
            labels,
            sample_chars,
        }
    }

    /// Ask the model for one label. An empty sample is `unknown` without a
    /// call; an answer outside the configured labels is an error.
    pub fn detect_project_type(&self, sample_text: &str) -> Result<String, GenerationError> {
        let sample: String = sample_text.trim().chars().take(self.sample_chars).collect();
        if sample.is_empty() {
            debug!("no repository text to classify");
            return Ok(UNKNOWN_PROJECT_TYPE.to_string());
        }

        let answer = self.model.generate(&self.prompt(&sample))?;
        let label = normalize_label(&answer);
        if self.labels.iter().any(|l| *l == label) {
            debug!(model = self.model.name(), %label, "project type detected");
            Ok(label)
        } else {
            warn!(model = self.model.name(), answer = %answer.trim(), "project type outside allowed labels");
            Err(GenerationError::UnexpectedLabel {
                label,
                allowed: self.labels.join(", "),
            })
        }
    }

    fn prompt(&self, sample: &str) -> String {
        format!(
            r#"Classify the software project below into exactly one of these categories: {labels}.

Project content:
"""
{sample}
"""

Answer with the category name only, in lower case, with no other text."#,
            labels = self.labels.join(", "),
        )
    }
}

/// First line, trimmed, lower-cased, without quotes, backticks or trailing
/// punctuation.
fn normalize_label(answer: &str) -> String {
    let first = answer.trim().lines().next().unwrap_or("");
    first
        .trim()
        .trim_start_matches(|c: char| matches!(c, '"' | '\'' | '`' | '*'))
        .trim_end_matches(|c: char| matches!(c, '"' | '\'' | '`' | '*' | '.' | '!' | ',' | ';' | ':'))
        .trim()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization() {
        assert_eq!(normalize_label("ml"), "ml");
        assert_eq!(normalize_label("  \"NLP\".\n"), "nlp");
        assert_eq!(normalize_label("`web`"), "web");
        assert_eq!(normalize_label("Data!\nBecause it has CSVs."), "data");
        assert_eq!(normalize_label(""), "");
    }
}
