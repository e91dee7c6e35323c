use serde::{Deserialize, Serialize};

use super::defaults;

/// Generative model configuration (tier classification, project type).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Generation provider: "ollama" or "api" (OpenAI-compatible chat completions).
    pub provider: String,
    pub model: String,
    /// Provider base URL (Ollama) or full chat-completions endpoint (API).
    pub endpoint: Option<String>,
    pub timeout_secs: u64,
    pub temperature: f32,
    /// Extra attempts, with a reformatting instruction, after an unparsable tier response.
    pub tier_parse_retries: u32,
    /// Labels the project-type detector may answer with.
    pub project_types: Vec<String>,
    /// Characters of repository text shown to the project-type detector.
    pub project_type_sample_chars: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_GENERATION_PROVIDER.to_string(),
            model: defaults::DEFAULT_GENERATION_MODEL.to_string(),
            endpoint: None,
            timeout_secs: defaults::DEFAULT_GENERATION_TIMEOUT_SECS,
            temperature: defaults::DEFAULT_TEMPERATURE,
            tier_parse_retries: defaults::DEFAULT_TIER_PARSE_RETRIES,
            project_types: defaults::DEFAULT_PROJECT_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            project_type_sample_chars: defaults::DEFAULT_PROJECT_TYPE_SAMPLE_CHARS,
        }
    }
}
