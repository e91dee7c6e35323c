use briefcheck_core::errors::*;

#[test]
fn embedding_timeout_carries_provider_and_duration() {
    let err = EmbeddingError::Timeout {
        provider: "nomic-embed-text".into(),
        timeout_secs: 30,
    };
    let msg = err.to_string();
    assert!(msg.contains("nomic-embed-text"));
    assert!(msg.contains("30"));
}

#[test]
fn similarity_zero_magnitude_names_side() {
    let err = SimilarityError::ZeroMagnitude { side: "left" };
    assert!(err.to_string().contains("left"));
}

#[test]
fn similarity_non_finite_names_side() {
    let err = SimilarityError::NonFinite { side: "right" };
    let msg = err.to_string();
    assert!(msg.contains("right"));
    assert!(msg.contains("non-finite"));
}

#[test]
fn unexpected_label_lists_allowed() {
    let err = GenerationError::UnexpectedLabel {
        label: "robotics".into(),
        allowed: "ml, nlp".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("robotics"));
    assert!(msg.contains("ml, nlp"));
}

// --- From impls ---

#[test]
fn subsystem_errors_convert_to_briefcheck_error() {
    let err: BriefcheckError = ExtractionError::NotFound {
        path: "brief.pdf".into(),
    }
    .into();
    assert!(matches!(err, BriefcheckError::Extraction(_)));

    let err: BriefcheckError = ReportError::MissingField {
        field: "project_type".into(),
    }
    .into();
    assert!(matches!(err, BriefcheckError::Report(_)));
}

// --- Error codes ---

#[test]
fn aggregate_error_code_delegates_to_inner() {
    let err: BriefcheckError = GenerationError::EmptyResponse {
        model: "m".into(),
    }
    .into();
    assert_eq!(err.error_code(), "GENERATION_ERROR");

    let err: BriefcheckError = ConfigError::MissingSecret {
        field: "api_key".into(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn coded_string_prefixes_code() {
    let err = RepositoryError::InvalidUrl {
        url: "ftp://x".into(),
    };
    assert!(err.coded_string().starts_with("[REPOSITORY_ERROR]"));
}
