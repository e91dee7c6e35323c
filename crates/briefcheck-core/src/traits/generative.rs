use crate::errors::GenerationError;

/// A generative language model answering single-turn prompts.
pub trait IGenerativeModel: Send + Sync {
    /// Send one prompt and return the raw text completion.
    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Model identifier.
    fn name(&self) -> &str;
}
