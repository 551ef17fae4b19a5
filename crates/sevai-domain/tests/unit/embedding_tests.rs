//! Unit tests for Embedding value object

use sevai_domain::Embedding;
use sevai_domain::value_objects::cosine_similarity;

#[test]
fn test_embedding_creation() {
    let embedding = Embedding::new(vec![0.1, 0.2, 0.3, 0.4], "hashing-384");

    assert_eq!(embedding.dimensions, 4);
    assert_eq!(embedding.model, "hashing-384");
}

#[test]
fn test_cosine_similarity_identical() {
    let embedding = Embedding::new(vec![1.0, 2.0, 3.0], "test");
    let score = embedding.cosine_similarity(&[1.0, 2.0, 3.0]);
    assert!((score - 1.0).abs() < 1e-6);
}

#[test]
fn test_cosine_similarity_orthogonal_and_opposite() {
    assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-6);
    assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < 1e-6);
}

#[test]
fn test_cosine_similarity_degenerate_inputs() {
    assert_eq!(cosine_similarity(&[], &[]), 0.0);
    assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0]), 0.0);
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
}
