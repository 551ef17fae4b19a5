//! Prompt Assembly Domain Service
//!
//! Builds the completion prompt from the bilingual instruction, the retrieved
//! chunks and the literal query, within a character budget.

use sevai_domain::entities::Chunk;
use sevai_domain::error::{Error, Result};
use sevai_domain::value_objects::{Language, Prompt, Query, RetrievalResult, ScoredChunk};
use std::fmt::Write;
use tracing::{debug, info};

const ROLE: &str = "You are a bilingual government services assistant that specializes in \
Tamil Nadu government schemes and services.";

const RULES: &str = "IMPORTANT RULES:
1. If the user asks in Tamil, you MUST respond ONLY in Tamil
2. If the user asks in English, you MUST respond ONLY in English
3. Never mix languages in your response
4. Give accurate and complete information based on the context
5. If the exact information is not in the context, clearly state that but provide the most relevant available information
6. For Tamil responses, use clear and simple Tamil that is easily understood";

const NO_SOURCE_RULES: &str = "IMPORTANT RULES:
1. If the user asks in Tamil, you MUST respond ONLY in Tamil
2. If the user asks in English, you MUST respond ONLY in English
3. Never mix languages in your response
4. No specific source document was found for this question. Answer from general knowledge, \
clearly tell the user that the answer is not based on an official source document, and do not cite sources
5. For Tamil responses, use clear and simple Tamil that is easily understood";

const DROPPED_SOURCE_RULES: &str = "IMPORTANT RULES:
1. If the user asks in Tamil, you MUST respond ONLY in Tamil
2. If the user asks in English, you MUST respond ONLY in English
3. Never mix languages in your response
4. Relevant source documents were found but could not be included in this request. Answer from \
general knowledge, tell the user that official details are available but not shown here, and do not cite sources
5. For Tamil responses, use clear and simple Tamil that is easily understood";

const FALLBACK_NOTE: &str =
    "No source document was found in the user's language; the sources below are in another language.";

/// What the context block holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContextState {
    /// At least one retrieved chunk is rendered
    Included,
    /// Retrieval found nothing
    Missing,
    /// Retrieval found chunks but none fit the budget
    Dropped,
}

/// Build the system instruction for a target language
fn instruction(language: Language, state: ContextState, language_fallback: bool) -> String {
    let mut out = String::new();
    out.push_str(ROLE);
    out.push_str("\n\n");
    out.push_str(match state {
        ContextState::Included => RULES,
        ContextState::Missing => NO_SOURCE_RULES,
        ContextState::Dropped => DROPPED_SOURCE_RULES,
    });
    out.push_str("\n\n");
    let _ = writeln!(out, "Current language: {}", language.name());
    let _ = write!(out, "You MUST respond in: {}", language.name());
    if state == ContextState::Included && language_fallback {
        out.push('\n');
        out.push_str(FALLBACK_NOTE);
    }
    out
}

/// Characters a context-free prompt adds around the query for `language`
///
/// `Prompt::render` joins the instruction and the query with a blank line.
fn bare_overhead(language: Language) -> usize {
    [ContextState::Missing, ContextState::Dropped]
        .into_iter()
        .map(|state| instruction(language, state, false).chars().count() + 2)
        .max()
        .unwrap_or_default()
}

/// Render one chunk with its `[Source n]` header
fn render_source(index: usize, chunk: &Chunk) -> String {
    let meta = &chunk.metadata;
    let mut header = format!("[Source {index}] kind: {}", meta.kind);
    if let Some(scheme) = &meta.scheme_name {
        let _ = write!(header, " | scheme: {scheme}");
    }
    if let Some(department) = &meta.department {
        let _ = write!(header, " | department: {department}");
    }
    let _ = write!(header, " | language: {}", meta.language.tag());
    if let Some(file) = &meta.source_file {
        let _ = write!(header, " | file: {file}");
    }
    format!("{header}\n{}", chunk.text.trim())
}

/// Render the context block for hits, in order
fn render_context(hits: &[ScoredChunk]) -> String {
    if hits.is_empty() {
        return String::new();
    }
    let sources: Vec<String> = hits
        .iter()
        .enumerate()
        .map(|(i, hit)| render_source(i + 1, &hit.chunk))
        .collect();
    format!("Use this context to answer:\n\n{}", sources.join("\n\n"))
}

/// Prompt assembler with a character budget
#[derive(Debug, Clone, Copy)]
pub struct PromptAssembler {
    budget_chars: usize,
}

impl PromptAssembler {
    /// Create an assembler whose prompts never exceed `budget_chars` characters
    pub fn new(budget_chars: usize) -> Self {
        Self { budget_chars }
    }

    /// Configured budget in characters
    pub fn budget_chars(&self) -> usize {
        self.budget_chars
    }

    /// Characters the longest context-free prompt adds around a query
    pub fn bare_overhead_chars() -> usize {
        bare_overhead(Language::English).max(bare_overhead(Language::Tamil))
    }

    /// Longest query in `language` that fits the budget without context
    pub fn max_query_chars(&self, language: Language) -> usize {
        self.budget_chars.saturating_sub(bare_overhead(language))
    }

    /// Reject a query whose context-free prompt cannot fit the budget
    ///
    /// Needs no retrieval, so callers run it before any network call.
    pub fn check_fits(&self, query: &Query) -> Result<()> {
        let length = query.text.chars().count();
        let max = self.max_query_chars(query.language);
        if length > max {
            return Err(Error::QueryTooLong { length, max });
        }
        Ok(())
    }

    fn build(query: &Query, hits: &[ScoredChunk], state: ContextState, fallback: bool) -> Prompt {
        Prompt {
            instruction: instruction(query.language, state, fallback),
            context: render_context(hits),
            query: query.text.clone(),
            language: query.language,
            included_chunk_ids: hits.iter().map(|h| h.chunk.id.clone()).collect(),
        }
    }

    /// Assemble the prompt for a query and its retrieval result
    ///
    /// Chunks are dropped from the lowest-scoring end until the prompt fits
    /// the budget. The query is never truncated: if the prompt does not fit
    /// even without context, `QueryTooLong` is returned.
    pub fn assemble(&self, query: &Query, retrieval: &RetrievalResult) -> Result<Prompt> {
        self.check_fits(query)?;

        let hits = &retrieval.hits;
        for keep in (1..=hits.len()).rev() {
            let prompt = Self::build(
                query,
                &hits[..keep],
                ContextState::Included,
                retrieval.language_fallback,
            );
            if prompt.len_chars() <= self.budget_chars {
                if keep < hits.len() {
                    debug!(
                        dropped = hits.len() - keep,
                        budget = self.budget_chars,
                        "Dropped lowest-scoring chunks to fit prompt budget"
                    );
                }
                return Ok(prompt);
            }
        }

        if hits.is_empty() {
            return Ok(Self::build(query, &[], ContextState::Missing, false));
        }
        info!(
            retrieved = hits.len(),
            budget = self.budget_chars,
            "No retrieved chunk fits the prompt budget"
        );
        Ok(Self::build(query, &[], ContextState::Dropped, false))
    }
}
