use std::sync::Arc;

use briefcheck_analysis::ComplianceAnalyzer;
use briefcheck_core::config::AnalysisConfig;
use briefcheck_core::models::RepositorySection;
use proptest::prelude::*;
use test_fixtures::{MapEmbedder, StaticExtractor};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn overall_compliance_matches_formula(flags in prop::collection::vec(any::<bool>(), 1..30)) {
        let mut embedder = MapEmbedder::new().with("brief", vec![1.0, 0.0]);
        let texts: Vec<String> = (0..flags.len()).map(|i| format!("s{i}")).collect();
        for (text, hit) in texts.iter().zip(&flags) {
            let v = if *hit { vec![1.0, 0.0] } else { vec![0.0, 1.0] };
            embedder = embedder.with(text.clone(), v);
        }
        let analyzer = ComplianceAnalyzer::new(
            Arc::new(embedder),
            Arc::new(StaticExtractor::new()),
            AnalysisConfig::default(),
        );

        let fragment = analyzer
            .analyze_text_compliance(&RepositorySection::from_texts(texts), "brief");
        let compliant = flags.iter().filter(|f| **f).count();
        let expected = (100.0 * compliant as f64 / flags.len() as f64 * 100.0).round() / 100.0;

        prop_assert_eq!(fragment.total_sections, flags.len());
        prop_assert_eq!(fragment.compliant_sections, compliant);
        prop_assert_eq!(fragment.overall_compliance, expected);
    }
}
