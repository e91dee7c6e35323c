use briefcheck_core::errors::ReportError;
use briefcheck_core::models::{
    compliance_percentage, AnalysisReport, ComplianceFragment, CoverageReport, TierAnalysis,
    TierRequirements,
};
use chrono::Utc;

/// Compose the analysis report. Pure apart from the timestamp.
///
/// Statistics pass through as given. Rejects an empty project type, absent
/// (`null`) statistics, and a fragment whose counters disagree with its
/// results.
pub fn build_report(
    project_type: &str,
    repository_stats: serde_json::Value,
    tier_requirements: TierRequirements,
    fragment: ComplianceFragment,
) -> Result<AnalysisReport, ReportError> {
    let project_type = project_type.trim();
    if project_type.is_empty() {
        return Err(ReportError::MissingField {
            field: "project_type".to_string(),
        });
    }
    if repository_stats.is_null() {
        return Err(ReportError::MissingField {
            field: "repository_stats".to_string(),
        });
    }
    check_fragment(&fragment)?;

    let ComplianceFragment {
        overall_compliance,
        total_sections,
        compliant_sections,
        detailed_results,
        status,
    } = fragment;

    Ok(AnalysisReport {
        repository: None,
        briefing: None,
        project_type: project_type.to_string(),
        repository_stats,
        tier_analysis: TierAnalysis {
            requirements: tier_requirements,
            coverage: None,
        },
        overall_compliance,
        total_sections,
        compliant_sections,
        detailed_results,
        compliance_status: status,
        generated_at: Utc::now(),
    })
}

fn check_fragment(fragment: &ComplianceFragment) -> Result<(), ReportError> {
    let results = &fragment.detailed_results;
    if fragment.total_sections != results.len() {
        return Err(ReportError::Inconsistent {
            reason: format!(
                "total_sections is {} but {} results are present",
                fragment.total_sections,
                results.len()
            ),
        });
    }
    let compliant = results.iter().filter(|r| r.compliant).count();
    if fragment.compliant_sections != compliant {
        return Err(ReportError::Inconsistent {
            reason: format!(
                "compliant_sections is {} but {compliant} results are compliant",
                fragment.compliant_sections
            ),
        });
    }
    let expected = compliance_percentage(compliant, results.len());
    if (fragment.overall_compliance - expected).abs() > 0.005 {
        return Err(ReportError::Inconsistent {
            reason: format!(
                "overall_compliance is {} but the results give {expected}",
                fragment.overall_compliance
            ),
        });
    }
    Ok(())
}

/// Optional report decorations applied after `build_report`.
pub trait ReportExt {
    fn with_coverage(self, coverage: CoverageReport) -> Self;
    fn with_sources(self, repository: impl Into<String>, briefing: impl Into<String>) -> Self;
}

impl ReportExt for AnalysisReport {
    fn with_coverage(mut self, coverage: CoverageReport) -> Self {
        self.tier_analysis.coverage = Some(coverage);
        self
    }

    fn with_sources(mut self, repository: impl Into<String>, briefing: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self.briefing = Some(briefing.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use briefcheck_core::models::{ComplianceResult, ComplianceStatus};
    use serde_json::json;

    fn result(id: &str, compliant: bool) -> ComplianceResult {
        ComplianceResult {
            section: id.to_string(),
            similarity: if compliant { 85.0 } else { 40.0 },
            compliant,
        }
    }

    fn half_fragment() -> ComplianceFragment {
        ComplianceFragment::from_results(
            vec![result("a", true), result("b", false)],
            ComplianceStatus::Scored,
        )
    }

    #[test]
    fn essential_only_report() {
        let tiers = TierRequirements {
            essential: vec!["Requisito 1".into(), "Requisito 2".into()],
            ..Default::default()
        };
        let report = build_report("ml", json!({}), tiers, half_fragment()).unwrap();
        assert_eq!(report.overall_compliance, 50.0);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["tier_analysis"]["nivel_medio"], json!([]));
        assert_eq!(value["tier_analysis"]["nivel_esencial"].as_array().unwrap().len(), 2);
        assert!(value["overall_compliance"].is_number());
        assert_eq!(value["compliance_status"], "scored");
    }

    #[test]
    fn structural_errors() {
        let tiers = TierRequirements::default();
        assert!(matches!(
            build_report("  ", json!({}), tiers.clone(), half_fragment()),
            Err(ReportError::MissingField { .. })
        ));
        assert!(matches!(
            build_report("ml", serde_json::Value::Null, tiers.clone(), half_fragment()),
            Err(ReportError::MissingField { field }) if field == "repository_stats"
        ));

        let mut bad = half_fragment();
        bad.total_sections = 3;
        assert!(build_report("ml", json!({}), tiers.clone(), bad).is_err());

        let mut bad = half_fragment();
        bad.overall_compliance = 100.0;
        assert!(build_report("ml", json!({}), tiers, bad).is_err());
    }

    #[test]
    fn stats_of_any_shape_pass_through() {
        for stats in [json!([1, 2]), json!("n/a"), json!(3), json!({"commit_count": 7})] {
            let report = build_report(
                "ml",
                stats.clone(),
                TierRequirements::default(),
                half_fragment(),
            )
            .unwrap();
            assert_eq!(report.repository_stats, stats);
        }
    }

    #[test]
    fn decorations() {
        let report = build_report(
            "web",
            json!({"branches": ["main"]}),
            TierRequirements::default(),
            ComplianceFragment::empty(ComplianceStatus::EmptyBriefing),
        )
        .unwrap()
        .with_sources("owner/repo", "brief.pdf")
        .with_coverage(CoverageReport {
            tiers: Vec::new(),
            weighted_score: 0.0,
        });

        assert_eq!(report.repository.as_deref(), Some("owner/repo"));
        assert_eq!(report.briefing.as_deref(), Some("brief.pdf"));
        assert!(report.tier_analysis.coverage.is_some());
        assert_eq!(report.repository_stats["branches"][0], "main");
    }
}
