//! Tests for the in-memory vector store

use super::support::indexed;
use sevai_domain::error::Error;
use sevai_domain::ports::providers::{VectorStoreAdmin, VectorStoreProvider};
use sevai_domain::value_objects::Language;
use sevai_providers::vector_store::InMemoryVectorStoreProvider;

async fn store_with(entries: &[sevai_domain::ports::providers::IndexedChunk]) -> InMemoryVectorStoreProvider {
    let store = InMemoryVectorStoreProvider::new();
    store.create_collection("schemes", 2).await.unwrap();
    store.upsert("schemes", entries).await.unwrap();
    store
}

#[tokio::test]
async fn test_search_orders_by_score_then_id() {
    let store = store_with(&[
        indexed("b", Language::English, vec![1.0, 0.0]),
        indexed("a", Language::English, vec![1.0, 0.0]),
        indexed("c", Language::English, vec![0.0, 1.0]),
        indexed("d", Language::English, vec![1.0, 1.0]),
    ])
    .await;

    let hits = store
        .search_similar("schemes", &[1.0, 0.0], 3, None)
        .await
        .unwrap();
    let ids: Vec<&str> = hits.iter().map(|h| h.chunk.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "d"]);
    assert!(hits[0].score >= hits[2].score);
}

#[tokio::test]
async fn test_search_filters_by_language() {
    let store = store_with(&[
        indexed("en-1", Language::English, vec![1.0, 0.0]),
        indexed("ta-1", Language::Tamil, vec![0.5, 0.5]),
    ])
    .await;

    let hits = store
        .search_similar("schemes", &[1.0, 0.0], 5, Some(Language::Tamil))
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].chunk.id, "ta-1");
}

#[tokio::test]
async fn test_upsert_replaces_by_id() {
    let store = store_with(&[indexed("x", Language::English, vec![1.0, 0.0])]).await;
    store
        .upsert("schemes", &[indexed("x", Language::English, vec![0.0, 1.0])])
        .await
        .unwrap();

    assert_eq!(store.count("schemes").await.unwrap(), 1);
    let entries = store.get_by_ids("schemes", &["x".to_string()]).await.unwrap();
    assert_eq!(entries[0].embedding.vector, vec![0.0, 1.0]);
}

#[tokio::test]
async fn test_upsert_rejects_wrong_dimensions_without_partial_write() {
    let store = store_with(&[]).await;
    let result = store
        .upsert(
            "schemes",
            &[
                indexed("ok", Language::English, vec![1.0, 0.0]),
                indexed("bad", Language::English, vec![1.0, 0.0, 0.0]),
            ],
        )
        .await;

    assert!(matches!(result, Err(Error::VectorDb { .. })));
    assert_eq!(store.count("schemes").await.unwrap(), 0);
}

#[tokio::test]
async fn test_missing_collection_degrades_gracefully() {
    let store = InMemoryVectorStoreProvider::new();
    assert!(store
        .search_similar("nothing", &[1.0], 3, None)
        .await
        .unwrap()
        .is_empty());
    assert_eq!(store.count("nothing").await.unwrap(), 0);
    assert!(store
        .get_digests("nothing", &["a".to_string()])
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_digests_and_stats() {
    let entry = indexed("x", Language::Tamil, vec![1.0, 0.0]);
    let digest = entry.digest.clone();
    let store = store_with(&[entry]).await;

    let digests = store
        .get_digests("schemes", &["x".to_string(), "y".to_string()])
        .await
        .unwrap();
    assert_eq!(digests.len(), 1);
    assert_eq!(digests["x"], digest);

    let stats = store.get_stats("schemes").await.unwrap();
    assert_eq!(stats["total_count"], 1);
    assert_eq!(stats["dimensions"], 2);
    assert_eq!(stats["languages"]["ta"], 1);
}

#[tokio::test]
async fn test_create_collection_is_idempotent_but_checks_dimensions() {
    let store = InMemoryVectorStoreProvider::new();
    store.create_collection("schemes", 2).await.unwrap();
    store.create_collection("schemes", 2).await.unwrap();
    assert!(store.create_collection("schemes", 3).await.is_err());
    assert!(store.create_collection("other", 0).await.is_err());
}

#[tokio::test]
async fn test_delete_collection() {
    let store = store_with(&[indexed("x", Language::English, vec![1.0, 0.0])]).await;
    store.delete_collection("schemes").await.unwrap();
    assert!(!store.collection_exists("schemes").await.unwrap());
}
