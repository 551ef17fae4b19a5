//! Prompt assembly within a character budget

use sevai_application::domain_services::PromptAssembler;
use sevai_domain::entities::{Chunk, ChunkMetadata, RecordKind};
use sevai_domain::error::Error;
use sevai_domain::value_objects::{Language, Query, RetrievalResult, ScoredChunk};

fn hit(id: &str, text: &str, score: f32) -> ScoredChunk {
    let mut metadata = ChunkMetadata::new(RecordKind::Scheme, Language::English);
    metadata.scheme_name = Some("Scheme X".to_string());
    metadata.source_file = Some("rag_new_scheme.json".to_string());
    ScoredChunk::new(Chunk::new(id, text, metadata), score)
}

fn retrieval(hits: Vec<ScoredChunk>) -> RetrievalResult {
    RetrievalResult {
        hits,
        language_fallback: false,
    }
}

fn english(text: &str) -> Query {
    Query::new(text, Language::English)
}

#[test]
fn test_prompt_contains_sources_in_order_and_literal_query() {
    let query = english("Is there free bus travel for women?");
    let result = retrieval(vec![
        hit("a", "Scheme X provides free bus travel for women", 0.9),
        hit("b", "Scheme Y provides laptops for students", 0.4),
    ]);

    let prompt = PromptAssembler::new(12_000)
        .assemble(&query, &result)
        .expect("fits");

    assert_eq!(prompt.query, "Is there free bus travel for women?");
    assert_eq!(prompt.included_chunk_ids, vec!["a", "b"]);
    assert!(prompt.context.starts_with("Use this context to answer:"));
    let first = prompt.context.find("[Source 1]").expect("source 1");
    let second = prompt.context.find("[Source 2]").expect("source 2");
    assert!(first < second);
    assert!(prompt.context.contains("scheme: Scheme X"));
    assert!(prompt.instruction.contains("You MUST respond in: English"));
    assert!(prompt.render().ends_with("Is there free bus travel for women?"));
}

#[test]
fn test_tamil_query_targets_tamil() {
    let query = Query::new("இலவச பேருந்து பயணம் உள்ளதா?", Language::Tamil);
    let prompt = PromptAssembler::new(12_000)
        .assemble(&query, &retrieval(vec![hit("a", "free bus travel", 0.8)]))
        .expect("fits");
    assert_eq!(prompt.language, Language::Tamil);
    assert!(prompt.instruction.contains("You MUST respond in: Tamil"));
}

#[test]
fn test_no_context_discloses_missing_source() {
    let prompt = PromptAssembler::new(12_000)
        .assemble(&english("What is the capital of Mars?"), &RetrievalResult::empty())
        .expect("fits");

    assert!(prompt.context.is_empty());
    assert!(prompt.included_chunk_ids.is_empty());
    assert!(prompt.instruction.contains("No specific source document was found"));
    assert!(!prompt.system_message().contains("[Source"));
}

#[test]
fn test_lowest_scoring_chunks_are_dropped_to_fit_budget() {
    let query = english("free bus travel");
    let long = "x".repeat(400);
    let result = retrieval(vec![
        hit("high", &long, 0.9),
        hit("mid", &long, 0.6),
        hit("low", &long, 0.3),
    ]);

    let unbounded = PromptAssembler::new(100_000)
        .assemble(&query, &result)
        .expect("fits");
    let one_chunk = PromptAssembler::new(100_000)
        .assemble(&query, &retrieval(result.hits[..1].to_vec()))
        .expect("fits");
    let budget = one_chunk.len_chars() + 100;
    assert!(unbounded.len_chars() > budget);

    let prompt = PromptAssembler::new(budget)
        .assemble(&query, &result)
        .expect("fits");
    assert_eq!(prompt.included_chunk_ids, vec!["high"]);
    assert!(prompt.len_chars() <= budget);
    assert_eq!(prompt.query, "free bus travel");
}

#[test]
fn test_dropped_sources_are_not_reported_as_missing() {
    let query = english("free bus travel");
    let budget = query.text.len() + PromptAssembler::bare_overhead_chars();

    let prompt = PromptAssembler::new(budget)
        .assemble(&query, &retrieval(vec![hit("a", &"y".repeat(500), 0.9)]))
        .expect("bare prompt fits");
    assert!(prompt.included_chunk_ids.is_empty());
    assert!(prompt.len_chars() <= budget);
    assert!(prompt.instruction.contains("could not be included"));
    assert!(!prompt.instruction.contains("No specific source document was found"));
}

#[test]
fn test_query_bound_accounts_for_instruction() {
    let assembler = PromptAssembler::new(2_100);
    let max = assembler.max_query_chars(Language::English);
    assert_eq!(max, 2_100 - PromptAssembler::bare_overhead_chars());

    assert!(assembler.check_fits(&english(&"a".repeat(max))).is_ok());
    match assembler.check_fits(&english(&"a".repeat(max + 1))) {
        Err(Error::QueryTooLong { length, max: reported }) => {
            assert_eq!(length, max + 1);
            assert_eq!(reported, max);
        }
        other => panic!("unexpected result: {other:?}"),
    }

    let prompt = assembler
        .assemble(&english(&"a".repeat(max)), &RetrievalResult::empty())
        .expect("fits");
    assert!(prompt.len_chars() <= 2_100);
}

#[test]
fn test_query_larger_than_budget_is_rejected_not_truncated() {
    let query = english(&"why ".repeat(500));
    let err = PromptAssembler::new(1_000)
        .assemble(&query, &RetrievalResult::empty())
        .expect_err("too long");
    match err {
        Error::QueryTooLong { length, max } => {
            assert_eq!(length, 2_000);
            assert!(max < 1_000);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_fallback_note_only_with_context() {
    let query = Query::new("இலவச பேருந்து", Language::Tamil);
    let mut result = retrieval(vec![hit("a", "free bus travel", 0.5)]);
    result.language_fallback = true;
    let prompt = PromptAssembler::new(12_000)
        .assemble(&query, &result)
        .expect("fits");
    assert!(prompt.instruction.contains("another language"));
}
