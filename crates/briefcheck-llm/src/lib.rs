//! # briefcheck-llm
//!
//! Everything that asks a generative model a question:
//! tier classification of briefing requirements and project-type detection,
//! plus the Ollama and chat-completions model clients.

pub mod project_type;
pub mod providers;
pub mod tiers;

pub use project_type::ProjectTypeDetector;
pub use providers::{create_model, ChatCompletionsModel, OllamaModel};
pub use tiers::{parse_tier_response, TierClassifier, TierParseOutcome};
