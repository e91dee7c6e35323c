use std::path::Path;
use std::sync::Arc;

use briefcheck_core::config::AnalysisConfig;
use briefcheck_core::errors::BriefcheckError;
use briefcheck_core::models::{
    ComplianceFragment, ComplianceResult, ComplianceStatus, RepositorySection,
};
use briefcheck_core::traits::{IEmbeddingProvider, ITextExtractor};
use briefcheck_embeddings::{cosine_similarity, meets_threshold, to_percentage};
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// What happened when a set of sections was scored against a briefing.
#[derive(Debug, Clone, PartialEq)]
pub enum ComplianceOutcome {
    /// At least one section was given to score. `skipped` counts sections
    /// whose embedding or scoring failed.
    Scored {
        results: Vec<ComplianceResult>,
        skipped: usize,
    },
    /// Nothing to score.
    NoSections,
    /// The briefing could not be embedded; no section was scored.
    ReferenceUnavailable { reason: String },
}

impl ComplianceOutcome {
    pub fn into_results(self) -> Vec<ComplianceResult> {
        match self {
            Self::Scored { results, .. } => results,
            Self::NoSections | Self::ReferenceUnavailable { .. } => Vec::new(),
        }
    }

    fn into_fragment(self) -> ComplianceFragment {
        match self {
            Self::Scored { results, .. } => {
                ComplianceFragment::from_results(results, ComplianceStatus::Scored)
            }
            Self::NoSections => ComplianceFragment::empty(ComplianceStatus::NoSections),
            Self::ReferenceUnavailable { .. } => {
                ComplianceFragment::empty(ComplianceStatus::ReferenceUnavailable)
            }
        }
    }
}

/// Scores repository sections against a briefing by embedding similarity.
///
/// Sections are embedded one at a time so a failing section never takes its
/// siblings down. With `max_concurrency > 1` they are scored on a dedicated
/// rayon pool of that size; results always come back in input order.
pub struct ComplianceAnalyzer {
    embedder: Arc<dyn IEmbeddingProvider>,
    extractor: Arc<dyn ITextExtractor>,
    config: AnalysisConfig,
    pool: Option<rayon::ThreadPool>,
}

impl ComplianceAnalyzer {
    pub fn new(
        embedder: Arc<dyn IEmbeddingProvider>,
        extractor: Arc<dyn ITextExtractor>,
        config: AnalysisConfig,
    ) -> Self {
        let pool = if config.max_concurrency > 1 {
            rayon::ThreadPoolBuilder::new()
                .num_threads(config.max_concurrency)
                .thread_name(|i| format!("briefcheck-score-{i}"))
                .build()
                .inspect_err(|e| warn!(error = %e, "scoring pool unavailable, scoring sequentially"))
                .ok()
        } else {
            None
        };
        Self {
            embedder,
            extractor,
            config,
            pool,
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub(crate) fn embedder(&self) -> &dyn IEmbeddingProvider {
        self.embedder.as_ref()
    }

    /// Read the briefing document. Failures are logged and yield `""`.
    pub fn extract_text(&self, path: &Path) -> String {
        match self.extractor.extract(path) {
            Ok(text) => {
                debug!(path = %path.display(), chars = text.chars().count(), "briefing extracted");
                text
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "briefing extraction failed");
                String::new()
            }
        }
    }

    /// Ordered `{section, similarity, compliant}` for every section that
    /// could be scored. Empty when the briefing itself cannot be embedded.
    pub fn check_compliance(
        &self,
        sections: &[RepositorySection],
        briefing_text: &str,
    ) -> Vec<ComplianceResult> {
        self.assess(sections, briefing_text).into_results()
    }

    /// Score `sections` against the briefing, keeping the reason when
    /// nothing could be scored.
    pub fn assess(&self, sections: &[RepositorySection], briefing_text: &str) -> ComplianceOutcome {
        if sections.is_empty() {
            debug!("no repository sections to score");
            return ComplianceOutcome::NoSections;
        }
        if briefing_text.trim().is_empty() {
            return ComplianceOutcome::ReferenceUnavailable {
                reason: "briefing text is empty".to_string(),
            };
        }

        // The reference embedding exists before any section is touched.
        let reference = match self.embedder.embed(briefing_text) {
            Ok(v) if v.iter().any(|x| !x.is_finite()) => {
                warn!(provider = self.embedder.name(), "briefing embedding has non-finite components");
                return ComplianceOutcome::ReferenceUnavailable {
                    reason: "briefing embedding has non-finite components".to_string(),
                };
            }
            Ok(v) if v.iter().any(|x| *x != 0.0) => v,
            Ok(_) => {
                warn!(provider = self.embedder.name(), "briefing embedding is a zero vector");
                return ComplianceOutcome::ReferenceUnavailable {
                    reason: "briefing embedding has zero magnitude".to_string(),
                };
            }
            Err(e) => {
                warn!(provider = self.embedder.name(), error = %e, "briefing embedding failed, no section scored");
                return ComplianceOutcome::ReferenceUnavailable {
                    reason: e.to_string(),
                };
            }
        };

        let scored = self.run_ordered(sections, |section| self.score_section(section, &reference));
        let skipped = scored.iter().filter(|r| r.is_none()).count();
        let results: Vec<ComplianceResult> = scored.into_iter().flatten().collect();

        info!(
            sections = sections.len(),
            scored = results.len(),
            skipped,
            compliant = results.iter().filter(|r| r.compliant).count(),
            threshold = self.config.threshold,
            "compliance check complete"
        );
        ComplianceOutcome::Scored { results, skipped }
    }

    /// Extract the briefing at `briefing_path` and aggregate compliance.
    pub fn analyze_repository_compliance(
        &self,
        sections: &[RepositorySection],
        briefing_path: &Path,
    ) -> ComplianceFragment {
        let text = self.extract_text(briefing_path);
        self.analyze_text_compliance(sections, &text)
    }

    /// Aggregate compliance for a briefing already in memory.
    pub fn analyze_text_compliance(
        &self,
        sections: &[RepositorySection],
        briefing_text: &str,
    ) -> ComplianceFragment {
        if briefing_text.trim().is_empty() {
            warn!("briefing text is empty, compliance is zero");
            return ComplianceFragment::empty(ComplianceStatus::EmptyBriefing);
        }
        self.assess(sections, briefing_text).into_fragment()
    }

    fn score_section(&self, section: &RepositorySection, reference: &[f32]) -> Option<ComplianceResult> {
        let scored = self
            .embedder
            .embed(&section.content)
            .map_err(BriefcheckError::from)
            .and_then(|v| cosine_similarity(&v, reference).map_err(BriefcheckError::from));
        match scored {
            Ok(score) => Some(ComplianceResult {
                section: section.id.clone(),
                similarity: to_percentage(score),
                compliant: meets_threshold(score, self.config.threshold),
            }),
            Err(e) => {
                warn!(section = %section.id, error = %e, "section skipped");
                None
            }
        }
    }

    /// Map `f` over `items` on the scoring pool when there is one,
    /// preserving input order.
    pub(crate) fn run_ordered<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync,
    {
        match &self.pool {
            Some(pool) if items.len() > 1 => pool.install(|| items.par_iter().map(&f).collect()),
            _ => items.iter().map(f).collect(),
        }
    }
}
