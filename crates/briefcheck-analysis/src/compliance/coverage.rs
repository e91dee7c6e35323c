//! Per-tier requirement coverage and the tier-weighted completion score.

use briefcheck_core::config::TierWeights;
use briefcheck_core::models::{
    compliance_percentage, CoverageReport, RepositorySection, RequirementMatch, Tier,
    TierCoverage, TierRequirements,
};
use briefcheck_embeddings::{cosine_similarity, meets_threshold, to_percentage};
use tracing::{debug, info, warn};

use super::analyzer::ComplianceAnalyzer;

impl ComplianceAnalyzer {
    /// Match every tier requirement against the repository sections.
    ///
    /// Each requirement keeps its best-scoring section; it is met when that
    /// best raw cosine reaches the threshold. Requirements that cannot be
    /// embedded, and all requirements when no section can be embedded,
    /// count as unmet.
    pub fn tier_coverage(
        &self,
        sections: &[RepositorySection],
        requirements: &TierRequirements,
    ) -> CoverageReport {
        let section_vectors: Vec<(String, Vec<f32>)> = self
            .run_ordered(sections, |s| match self.embedder().embed(&s.content) {
                Ok(v) => Some((s.id.clone(), v)),
                Err(e) => {
                    warn!(section = %s.id, error = %e, "section left out of coverage");
                    None
                }
            })
            .into_iter()
            .flatten()
            .collect();

        let tiers: Vec<TierCoverage> = requirements
            .iter()
            .map(|(tier, reqs)| self.cover_tier(tier, reqs, &section_vectors))
            .collect();
        let weighted_score = weighted_score(&tiers, &self.config().tier_weights);

        info!(
            requirements = requirements.total(),
            sections = section_vectors.len(),
            weighted_score,
            "tier coverage computed"
        );
        CoverageReport {
            tiers,
            weighted_score,
        }
    }

    fn cover_tier(&self, tier: Tier, reqs: &[String], sections: &[(String, Vec<f32>)]) -> TierCoverage {
        let matches: Vec<RequirementMatch> =
            self.run_ordered(reqs, |req| self.best_match(req, sections));
        let met = matches.iter().filter(|m| m.met).count();
        debug!(tier = tier.key(), total = reqs.len(), met, "tier covered");
        TierCoverage {
            tier,
            total: reqs.len(),
            met,
            coverage: compliance_percentage(met, reqs.len()),
            requirements: matches,
        }
    }

    fn best_match(&self, requirement: &str, sections: &[(String, Vec<f32>)]) -> RequirementMatch {
        let unmet = RequirementMatch {
            requirement: requirement.to_string(),
            best_section: None,
            best_similarity: None,
            met: false,
        };
        let vector = match self.embedder().embed(requirement) {
            Ok(v) => v,
            Err(e) => {
                warn!(requirement, error = %e, "requirement embedding failed, counted as unmet");
                return unmet;
            }
        };

        let best = sections
            .iter()
            .filter_map(|(id, sv)| cosine_similarity(&vector, sv).ok().map(|score| (id.as_str(), score)))
            .fold(None::<(&str, f64)>, |best, (id, score)| match best {
                Some((_, top)) if top >= score => best,
                _ => Some((id, score)),
            });

        match best {
            Some((id, score)) => RequirementMatch {
                requirement: requirement.to_string(),
                best_section: Some(id.to_string()),
                best_similarity: Some(to_percentage(score)),
                met: meets_threshold(score, self.config().threshold),
            },
            None => unmet,
        }
    }
}

/// `100 * Σ w·met / Σ w·total` over non-empty tiers, two decimals.
/// Zero when no tier has requirements or every such tier weighs zero.
pub fn weighted_score(tiers: &[TierCoverage], weights: &TierWeights) -> f64 {
    let (earned, possible) = tiers
        .iter()
        .filter(|t| t.total > 0)
        .fold((0.0, 0.0), |(earned, possible), t| {
            let w = weights.weight(t.tier);
            (earned + w * t.met as f64, possible + w * t.total as f64)
        });
    if possible <= 0.0 {
        return 0.0;
    }
    (100.0 * earned / possible * 100.0).round() / 100.0
}
