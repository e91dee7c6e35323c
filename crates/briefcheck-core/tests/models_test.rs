use briefcheck_core::models::*;
use proptest::prelude::*;

#[test]
fn report_flattens_tier_keys_under_tier_analysis() {
    let mut requirements = TierRequirements::default();
    requirements.essential = vec!["auth".into(), "tests".into()];
    let report = AnalysisReport {
        repository: None,
        briefing: None,
        project_type: "ml".into(),
        repository_stats: serde_json::json!({}),
        tier_analysis: TierAnalysis {
            requirements,
            coverage: None,
        },
        overall_compliance: 50.0,
        total_sections: 2,
        compliant_sections: 1,
        detailed_results: vec![],
        compliance_status: ComplianceStatus::Scored,
        generated_at: chrono::Utc::now(),
    };

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["tier_analysis"]["nivel_esencial"].as_array().unwrap().len(), 2);
    assert_eq!(json["tier_analysis"]["nivel_medio"], serde_json::json!([]));
    assert!(json["tier_analysis"].get("coverage").is_none());
    assert!(json["overall_compliance"].is_number());
    assert!(json.get("repository").is_none());
}

#[test]
fn sections_from_texts_keep_order() {
    let sections = RepositorySection::from_texts(["a", "b", "c"]);
    let ids: Vec<_> = sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["section-0", "section-1", "section-2"]);
}

#[test]
fn repository_stats_value_is_object() {
    let stats = RepositoryStats::default();
    assert!(stats.to_value().is_object());
}

proptest! {
    #[test]
    fn percentage_matches_formula(total in 1usize..500, compliant_frac in 0.0f64..=1.0) {
        let compliant = ((total as f64) * compliant_frac).floor() as usize;
        let pct = compliance_percentage(compliant, total);
        let exact = 100.0 * compliant as f64 / total as f64;
        prop_assert!((pct - exact).abs() <= 0.005 + 1e-9);
        prop_assert!((0.0..=100.0).contains(&pct));
    }

    #[test]
    fn fragment_counts_are_consistent(flags in proptest::collection::vec(any::<bool>(), 0..50)) {
        let results: Vec<ComplianceResult> = flags
            .iter()
            .enumerate()
            .map(|(i, &c)| ComplianceResult { section: format!("s{i}"), similarity: 0.0, compliant: c })
            .collect();
        let fragment = ComplianceFragment::from_results(results, ComplianceStatus::Scored);
        prop_assert_eq!(fragment.total_sections, flags.len());
        prop_assert_eq!(fragment.compliant_sections, flags.iter().filter(|c| **c).count());
        if flags.is_empty() {
            prop_assert_eq!(fragment.overall_compliance, 0.0);
        }
    }
}
