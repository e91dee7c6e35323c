//! End-to-end run: repository + briefing → `AnalysisReport`.

use std::path::Path;
use std::sync::Arc;

use briefcheck_core::config::BriefcheckConfig;
use briefcheck_core::errors::{BriefcheckError, ConfigError};
use briefcheck_core::models::{
    AnalysisReport, ComplianceFragment, ComplianceStatus, RepositorySection, RepositoryStats,
    TierRequirements,
};
use briefcheck_core::traits::{
    IEmbeddingProvider, IGenerativeModel, IRepositoryStatsProvider, ITextExtractor,
};
use briefcheck_extract::DocumentExtractor;
use briefcheck_llm::{ProjectTypeDetector, TierClassifier};
use briefcheck_repo::{acquire, GitStatsProvider, RepositorySource, SectionCollector};
use tracing::{info, info_span, warn};

use crate::compliance::ComplianceAnalyzer;
use crate::report::{build_report, ReportExt};

/// Runs the whole analysis for one or many repositories against a briefing.
pub struct RequirementsAnalyzer {
    config: BriefcheckConfig,
    compliance: ComplianceAnalyzer,
    classifier: TierClassifier,
    detector: ProjectTypeDetector,
    stats: Arc<dyn IRepositoryStatsProvider>,
}

impl RequirementsAnalyzer {
    /// Build the configured providers. Provider misconfiguration fails here,
    /// never at call time.
    pub fn from_config(config: BriefcheckConfig) -> Result<Self, ConfigError> {
        let embedder: Arc<dyn IEmbeddingProvider> = Arc::from(briefcheck_embeddings::create_provider(
            &config.embedding,
            config.api_key.as_ref(),
        )?);
        let model: Arc<dyn IGenerativeModel> = Arc::from(briefcheck_llm::create_model(
            &config.generation,
            config.api_key.as_ref(),
        )?);
        info!(
            embedding = embedder.name(),
            generation = model.name(),
            threshold = config.analysis.threshold,
            "analyzer ready"
        );
        Ok(Self::new(
            config,
            embedder,
            model,
            Arc::new(DocumentExtractor::new()),
            Arc::new(GitStatsProvider),
        ))
    }

    /// Assemble from explicit collaborators.
    pub fn new(
        config: BriefcheckConfig,
        embedder: Arc<dyn IEmbeddingProvider>,
        model: Arc<dyn IGenerativeModel>,
        extractor: Arc<dyn ITextExtractor>,
        stats: Arc<dyn IRepositoryStatsProvider>,
    ) -> Self {
        let compliance = ComplianceAnalyzer::new(embedder, extractor, config.analysis.clone());
        let classifier = TierClassifier::new(Arc::clone(&model))
            .with_parse_retries(config.generation.tier_parse_retries);
        let detector = ProjectTypeDetector::new(
            model,
            config.generation.project_types.clone(),
            config.generation.project_type_sample_chars,
        );
        Self {
            config,
            compliance,
            classifier,
            detector,
            stats,
        }
    }

    pub fn config(&self) -> &BriefcheckConfig {
        &self.config
    }

    pub fn compliance(&self) -> &ComplianceAnalyzer {
        &self.compliance
    }

    pub fn classifier(&self) -> &TierClassifier {
        &self.classifier
    }

    /// Analyze one repository against the briefing at `briefing_path`.
    ///
    /// Statistics failures are logged and reported as empty statistics.
    /// Repository, generation, and report errors fail the run.
    pub fn analyze(
        &self,
        target: &RepositorySource,
        briefing_path: &Path,
    ) -> Result<AnalysisReport, BriefcheckError> {
        let span = info_span!("analyze", target = %target.display_name());
        let _guard = span.enter();

        let repo = acquire(target)?;
        let stats = self.stats.stats(repo.root()).unwrap_or_else(|e| {
            warn!(error = %e, "repository statistics unavailable");
            RepositoryStats::default()
        });
        let sections = SectionCollector::new(&self.config.repository).collect(repo.root())?;

        let briefing_text = self.compliance.extract_text(briefing_path);
        let sample = project_sample(&sections, self.config.generation.project_type_sample_chars);
        let project_type = self.detector.detect_project_type(&sample)?;

        let (tiers, fragment) = if briefing_text.trim().is_empty() {
            warn!(briefing = %briefing_path.display(), "briefing is empty, tiers and compliance skipped");
            (
                TierRequirements::default(),
                ComplianceFragment::empty(ComplianceStatus::EmptyBriefing),
            )
        } else {
            let tiers = self.classifier.extract_tier_requirements(&briefing_text)?;
            let fragment = self.compliance.analyze_text_compliance(&sections, &briefing_text);
            (tiers, fragment)
        };

        let coverage = (self.config.analysis.tier_coverage && !tiers.is_empty())
            .then(|| self.compliance.tier_coverage(&sections, &tiers));

        let mut report = build_report(&project_type, stats.to_value(), tiers, fragment)?
            .with_sources(repo.name(), briefing_path.display().to_string());
        if let Some(coverage) = coverage {
            report = report.with_coverage(coverage);
        }

        info!(
            project_type = %report.project_type,
            overall_compliance = report.overall_compliance,
            sections = report.total_sections,
            "analysis complete"
        );
        Ok(report)
    }

    /// Analyze every target against the same briefing. One result per
    /// target, in order; a failure never stops the remaining targets.
    pub fn analyze_batch(
        &self,
        targets: &[RepositorySource],
        briefing_path: &Path,
    ) -> Vec<Result<AnalysisReport, BriefcheckError>> {
        targets
            .iter()
            .map(|target| {
                self.analyze(target, briefing_path).inspect_err(|e| {
                    warn!(target = %target.display_name(), error = %e, "repository analysis failed");
                })
            })
            .collect()
    }
}

/// Leading repository text for project-type detection.
fn project_sample(sections: &[RepositorySection], max_chars: usize) -> String {
    let mut sample = String::new();
    let mut used = 0;
    for section in sections {
        if used >= max_chars {
            break;
        }
        let piece: String = section.content.chars().take(max_chars - used).collect();
        used += piece.chars().count();
        if !sample.is_empty() {
            sample.push('\n');
        }
        sample.push_str(&piece);
    }
    sample
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_bounded_and_ordered() {
        let sections = RepositorySection::from_texts(["abcdef", "ghij", "klm"]);
        assert_eq!(project_sample(&sections, 8), "abcdef\ngh");
        assert_eq!(project_sample(&sections, 100), "abcdef\nghij\nklm");
        assert_eq!(project_sample(&[], 10), "");
    }
}
