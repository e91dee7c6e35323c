//! Providers against a loopback responder: request shape, response decoding,
//! HTTP failures, and timeouts.

use std::time::Duration;

use briefcheck_core::config::ApiKey;
use briefcheck_core::errors::EmbeddingError;
use briefcheck_core::traits::IEmbeddingProvider;
use briefcheck_embeddings::{ApiProvider, OllamaProvider};
use test_fixtures::OneShotServer;

#[test]
fn ollama_posts_model_and_input() {
    let server = OneShotServer::respond(200, r#"{"embeddings":[[0.1,0.2,0.3]]}"#);
    let provider = OllamaProvider::new("nomic-embed-text", server.url(), Duration::from_secs(5));

    let v = provider.embed("hello").unwrap();
    assert_eq!(v, vec![0.1, 0.2, 0.3]);

    let request = server.request();
    assert!(request.starts_with("POST /api/embed"));
    assert!(request.contains(r#""model":"nomic-embed-text""#));
    assert!(request.contains(r#""input":["hello"]"#));
}

#[test]
fn ollama_error_status_is_inference_failure() {
    let server = OneShotServer::respond(500, r#"{"error":"model not loaded"}"#);
    let provider = OllamaProvider::new("nomic-embed-text", server.url(), Duration::from_secs(5));

    let err = provider.embed("hello").unwrap_err();
    match err {
        EmbeddingError::InferenceFailed { provider, reason } => {
            assert_eq!(provider, "nomic-embed-text");
            assert!(reason.contains("500"));
        }
        other => panic!("expected InferenceFailed, got {other:?}"),
    }
    server.request();
}

#[test]
fn ollama_empty_vector_is_empty_response() {
    let server = OneShotServer::respond(200, r#"{"embeddings":[[]]}"#);
    let provider = OllamaProvider::new("m", server.url(), Duration::from_secs(5));
    assert!(matches!(
        provider.embed("x"),
        Err(EmbeddingError::EmptyResponse { .. })
    ));
    server.request();
}

#[test]
fn stalled_server_times_out() {
    let server = OneShotServer::stall(Duration::from_secs(3));
    let provider = OllamaProvider::new("m", server.url(), Duration::from_secs(1));
    match provider.embed("x") {
        Err(EmbeddingError::Timeout { timeout_secs, .. }) => assert_eq!(timeout_secs, 1),
        other => panic!("expected Timeout, got {other:?}"),
    }
    server.request();
}

#[test]
fn api_sends_bearer_key_and_restores_order() {
    let server = OneShotServer::respond(
        200,
        r#"{"data":[{"index":1,"embedding":[2.0]},{"index":0,"embedding":[1.0]}]}"#,
    );
    let provider = ApiProvider::new(
        "text-embedding-3-small",
        ApiKey::new("sk-test").unwrap(),
        Some(format!("{}/v1/embeddings", server.url())),
        Duration::from_secs(5),
    );

    let out = provider
        .embed_batch(&["first".to_string(), "second".to_string()])
        .unwrap();
    assert_eq!(out, vec![vec![1.0], vec![2.0]]);

    let request = server.request().to_ascii_lowercase();
    assert!(request.starts_with("post /v1/embeddings"));
    assert!(request.contains("authorization: bearer sk-test"));
}

#[test]
fn api_count_mismatch_is_rejected() {
    let server = OneShotServer::respond(200, r#"{"data":[]}"#);
    let provider = ApiProvider::new(
        "m",
        ApiKey::new("k").unwrap(),
        Some(server.url().to_string()),
        Duration::from_secs(5),
    );
    assert!(matches!(
        provider.embed("x"),
        Err(EmbeddingError::InferenceFailed { .. })
    ));
    server.request();
}
