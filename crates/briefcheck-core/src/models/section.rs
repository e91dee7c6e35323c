use serde::{Deserialize, Serialize};

/// One ordered text unit taken from the repository under analysis
/// (a whole file, or one chunk of it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySection {
    /// `"<relative path>#<chunk>"` for chunked files, or a caller-chosen id.
    pub id: String,
    pub content: String,
}

impl RepositorySection {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }

    /// Wrap plain texts as sections with positional ids (`section-0`, `section-1`, ...).
    pub fn from_texts<I, S>(texts: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Self::new(format!("section-{i}"), text))
            .collect()
    }
}
