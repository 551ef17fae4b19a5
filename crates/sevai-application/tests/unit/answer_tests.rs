//! One-turn answering

use sevai_application::{
    AnswerServiceImpl, AnswerServiceInterface, AnswerSettings, PromptAssembler,
    RetrievalServiceImpl, apology,
};
use sevai_domain::error::{Error, Result};
use sevai_domain::value_objects::Language;
use sevai_providers::vector_store::InMemoryVectorStoreProvider;
use std::sync::Arc;

use super::support::{
    COLLECTION, CountingEmbeddingProvider, ScriptedCompletionProvider, fast_retry, indexed_store,
};

struct Pipeline {
    service: AnswerServiceImpl,
    embedder: Arc<CountingEmbeddingProvider>,
    completion: Arc<ScriptedCompletionProvider>,
}

async fn pipeline(replies: Vec<Result<String>>, settings: AnswerSettings) -> Pipeline {
    let store = indexed_store(Arc::new(CountingEmbeddingProvider::new())).await;
    pipeline_over(store, replies, settings, PromptAssembler::new(12_000))
}

fn pipeline_over(
    store: Arc<InMemoryVectorStoreProvider>,
    replies: Vec<Result<String>>,
    settings: AnswerSettings,
    assembler: PromptAssembler,
) -> Pipeline {
    let embedder = Arc::new(CountingEmbeddingProvider::new());
    let completion = Arc::new(ScriptedCompletionProvider::new(replies));
    let retrieval = Arc::new(RetrievalServiceImpl::new(
        embedder.clone(),
        store,
        COLLECTION,
        fast_retry(),
    ));
    let service = AnswerServiceImpl::new(
        retrieval,
        completion.clone(),
        assembler,
        settings,
        fast_retry(),
    );
    Pipeline {
        service,
        embedder,
        completion,
    }
}

#[tokio::test]
async fn test_english_question_is_answered_from_context() {
    let p = pipeline(
        vec![Ok("  Yes, Scheme X offers free bus travel for women.  ".to_string())],
        AnswerSettings::default(),
    )
    .await;

    let answer = p
        .service
        .answer("  Is there free bus travel for women?  ")
        .await
        .expect("answers");

    assert_eq!(answer.text, "Yes, Scheme X offers free bus travel for women.");
    assert_eq!(answer.language, Language::English);
    assert!(answer.used_context);
    assert!(!answer.sources.is_empty());

    let prompts = p.completion.prompts();
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].query, "Is there free bus travel for women?");
    assert!(prompts[0].context.contains("Scheme X"));
    assert_eq!(prompts[0].included_chunk_ids, answer.sources);
}

#[tokio::test]
async fn test_tamil_question_targets_tamil() {
    let p = pipeline(vec![], AnswerSettings::default()).await;

    let prompt = p
        .service
        .prepare("மகளிர் உரிமைத் தொகை எவ்வளவு?")
        .await
        .expect("prepares");

    assert_eq!(prompt.language, Language::Tamil);
    assert!(prompt.instruction.contains("You MUST respond in: Tamil"));
    assert!(p.completion.prompts().is_empty());
}

#[tokio::test]
async fn test_empty_question_is_rejected_before_any_call() {
    let p = pipeline(vec![], AnswerSettings::default()).await;

    let err = p.service.answer("   \n\t").await.expect_err("empty");

    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert_eq!(p.embedder.calls(), 0);
    assert!(p.completion.prompts().is_empty());
}

#[tokio::test]
async fn test_overlong_question_is_rejected_before_any_call() {
    let settings = AnswerSettings {
        max_query_chars: 20,
        ..AnswerSettings::default()
    };
    let p = pipeline(vec![], settings).await;

    let err = p
        .service
        .answer("Please explain every welfare scheme in Tamil Nadu in detail")
        .await
        .expect_err("too long");

    assert!(matches!(err, Error::QueryTooLong { max: 20, .. }));
    assert_eq!(p.embedder.calls(), 0);
    assert!(p.completion.prompts().is_empty());
}

#[tokio::test]
async fn test_question_that_cannot_fit_the_prompt_is_rejected_before_any_call() {
    let store = indexed_store(Arc::new(CountingEmbeddingProvider::new())).await;
    let p = pipeline_over(
        store,
        vec![],
        AnswerSettings::default(),
        PromptAssembler::new(2_100),
    );
    let question = "bus ".repeat(375);

    let err = p.service.answer(&question).await.expect_err("too long");

    match err {
        Error::QueryTooLong { length, max } => {
            assert_eq!(length, question.trim().chars().count());
            assert_eq!(max, 2_100 - PromptAssembler::bare_overhead_chars());
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(p.embedder.calls(), 0);
    assert!(p.completion.prompts().is_empty());
}

#[tokio::test]
async fn test_empty_completion_is_an_error() {
    let p = pipeline(vec![Ok("   ".to_string())], AnswerSettings::default()).await;

    let err = p
        .service
        .answer("Is there free bus travel for women?")
        .await
        .expect_err("blank completion");

    assert!(matches!(err, Error::CompletionServiceUnavailable { .. }));
}

#[tokio::test]
async fn test_transient_completion_failure_is_retried() {
    let p = pipeline(
        vec![
            Err(Error::completion_unavailable("429")),
            Ok("Yes.".to_string()),
        ],
        AnswerSettings::default(),
    )
    .await;

    let answer = p
        .service
        .answer("Is there free bus travel for women?")
        .await
        .expect("second attempt answers");

    assert_eq!(answer.text, "Yes.");
    assert_eq!(p.completion.prompts().len(), 2);
}

#[tokio::test]
async fn test_policy_rejection_is_not_retried() {
    let p = pipeline(
        vec![Err(Error::completion_rejected("content_filter"))],
        AnswerSettings::default(),
    )
    .await;

    let err = p
        .service
        .answer("Is there free bus travel for women?")
        .await
        .expect_err("rejected");

    assert!(matches!(err, Error::CompletionRejected { .. }));
    assert_eq!(p.completion.prompts().len(), 1);
}

#[tokio::test]
async fn test_empty_index_answers_without_context() {
    let p = pipeline_over(
        Arc::new(InMemoryVectorStoreProvider::new()),
        vec![Ok("General answer.".to_string())],
        AnswerSettings::default(),
        PromptAssembler::new(12_000),
    );

    let answer = p
        .service
        .answer("Is there free bus travel for women?")
        .await
        .expect("answers");

    assert!(!answer.used_context);
    assert!(answer.sources.is_empty());
    let prompt = &p.completion.prompts()[0];
    assert!(
        prompt
            .instruction
            .contains("No specific source document was found")
    );
}

#[tokio::test]
async fn test_respond_turns_failures_into_apology_in_user_language() {
    let p = pipeline(
        vec![
            Err(Error::authentication("bad key")),
            Err(Error::authentication("bad key")),
        ],
        AnswerSettings::default(),
    )
    .await;

    let english = p.service.respond("Is there free bus travel for women?").await;
    assert_eq!(
        english,
        apology(Language::English, &Error::authentication("bad key"))
    );

    let tamil = p.service.respond("இலவச பேருந்து பயணம் உள்ளதா?").await;
    assert!(tamil.starts_with("மன்னிக்கவும்"));
}

#[tokio::test]
async fn test_respond_returns_answer_text() {
    let p = pipeline(vec![Ok("Yes.".to_string())], AnswerSettings::default()).await;
    assert_eq!(p.service.respond("Is there a bus scheme?").await, "Yes.");
}

#[test]
fn test_apology_matches_error() {
    let too_long = Error::QueryTooLong {
        length: 5_000,
        max: 2_000,
    };
    assert!(apology(Language::English, &too_long).contains("too long"));
    assert_ne!(
        apology(Language::Tamil, &too_long),
        apology(Language::Tamil, &Error::internal("boom"))
    );
    assert_eq!(
        apology(Language::English, &Error::invalid_argument("query is empty")),
        "Please type a question."
    );
}
