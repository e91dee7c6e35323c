use std::sync::Arc;

use briefcheck_core::errors::EmbeddingError;
use briefcheck_core::traits::IEmbeddingProvider;
use briefcheck_embeddings::CachedEmbedder;
use test_fixtures::MapEmbedder;

/// Shares one MapEmbedder between the cache and the test so calls can be counted.
struct Shared(Arc<MapEmbedder>);

impl IEmbeddingProvider for Shared {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.0.embed(text)
    }

    fn name(&self) -> &str {
        self.0.name()
    }
}

fn cached(inner: MapEmbedder) -> (CachedEmbedder, Arc<MapEmbedder>) {
    let inner = Arc::new(inner);
    (CachedEmbedder::new(Box::new(Shared(inner.clone())), 100), inner)
}

#[test]
fn repeated_text_hits_the_inner_provider_once() {
    let (cache, inner) = cached(MapEmbedder::new().with("briefing", vec![1.0, 0.0]));
    for _ in 0..5 {
        assert_eq!(cache.embed("briefing").unwrap(), vec![1.0, 0.0]);
    }
    assert_eq!(inner.calls(), 1);
}

#[test]
fn failures_are_not_cached() {
    let (cache, inner) = cached(MapEmbedder::new().failing_on("bad"));
    assert!(cache.embed("bad").is_err());
    assert!(cache.embed("bad").is_err());
    // Both calls reached the provider: nothing was stored for "bad".
    assert_eq!(inner.calls(), 2);
}

#[test]
fn batch_only_embeds_misses_and_keeps_order() {
    let (cache, inner) = cached(
        MapEmbedder::new()
            .with("a", vec![1.0])
            .with("b", vec![2.0])
            .with("c", vec![3.0]),
    );
    cache.embed("b").unwrap();
    let out = cache
        .embed_batch(&["a".to_string(), "b".to_string(), "c".to_string()])
        .unwrap();
    assert_eq!(out, vec![vec![1.0], vec![2.0], vec![3.0]]);
    // "b" was served from cache; "a" and "c" went to the provider.
    assert_eq!(inner.calls(), 3);
}

#[test]
fn name_passes_through() {
    let (cache, _) = cached(MapEmbedder::new());
    assert_eq!(cache.name(), "map-embedder");
}
