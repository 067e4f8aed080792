//! End-to-end question answering.
//!
//! Orchestrates retrieval, query-expansion fallback, topic-verse
//! injection, answer generation, and citation linking. Every generator
//! call except the final answer degrades gracefully on failure; the final
//! answer call is the only one whose error reaches the caller.

use crate::embeddings;
use crate::engine::{detect_source_type, is_relevant, Corpus, RetrievalEngine};
use crate::types::{QueryResponse, SearchResult, SourceKind, SourceSelector};
use hidayah_cite::{add_links_to_references, ensure_reference_format_consistency};
use hidayah_core::{AppConfig, AppError, AppResult};
use hidayah_llm::{create_client, LlmClient, LlmRequest};
use hidayah_prompt::{requests_tafsir, AnswerVars, PromptLibrary, NO_RELEVANT_VERSES};
use std::sync::Arc;
use std::time::Instant;

/// Distance assigned to generator-suggested verses: a fixed
/// medium-relevance placeholder, not a computed similarity.
const TOPIC_INJECTION_DISTANCE: f32 = 0.5;

/// The linked answer is expected to carry at least this many links when it
/// cites anything; below that the reformat retry kicks in.
const MIN_EXPECTED_LINKS: usize = 3;

/// Tuning for the ask pipeline, taken from [`AppConfig`].
#[derive(Debug, Clone)]
pub struct AskSettings {
    /// Generator model identifier
    pub model: String,

    /// Default number of passages to retrieve
    pub top_k: usize,

    /// Distance gate for accepting initial retrieval results
    pub relevance_threshold: f32,

    /// Stricter gate for skipping topic-verse injection
    pub injection_threshold: f32,
}

impl AskSettings {
    /// Extract the ask tuning from the application config.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            model: config.generator.model.clone(),
            top_k: config.retrieval.top_k,
            relevance_threshold: config.retrieval.relevance_threshold,
            injection_threshold: config.retrieval.injection_threshold,
        }
    }
}

/// The assembled QA pipeline: retrieval engine, generator, prompts.
///
/// Built once at startup; each request runs synchronously and
/// sequentially through it.
pub struct QaPipeline {
    engine: RetrievalEngine,
    generator: Arc<dyn LlmClient>,
    prompts: PromptLibrary,
    settings: AskSettings,
}

impl QaPipeline {
    /// Assemble a pipeline from its parts.
    pub fn new(
        engine: RetrievalEngine,
        generator: Arc<dyn LlmClient>,
        prompts: PromptLibrary,
        settings: AskSettings,
    ) -> Self {
        Self {
            engine,
            generator,
            prompts,
            settings,
        }
    }

    /// Access the retrieval engine.
    pub fn engine(&self) -> &RetrievalEngine {
        &self.engine
    }

    /// Answer a query end to end.
    ///
    /// `requested` narrows the search to one corpus; `None` auto-detects
    /// from the query. `top_k` falls back to the configured default.
    pub async fn answer(
        &self,
        query: &str,
        requested: Option<SourceSelector>,
        top_k: Option<usize>,
    ) -> AppResult<QueryResponse> {
        let start = Instant::now();

        let selector = requested.unwrap_or_else(|| detect_source_type(query));
        let top_k = top_k.unwrap_or(self.settings.top_k);

        tracing::info!("Query detected as {} query", selector.as_str());

        let mut results = self.engine.retrieve(query, selector, top_k).await?;

        // Weak initial retrieval: widen the search with generated
        // alternative phrasings
        let mut used_alternatives = Vec::new();
        if !is_relevant(&results, self.settings.relevance_threshold) {
            tracing::info!("Searching for alternative terms...");
            let alternatives = self.generate_alternatives(query).await;

            let mut best = results.clone();
            for alternative in alternatives {
                let alt_results = self.engine.retrieve(&alternative, selector, top_k).await?;

                // An alternative wins only by strictly improving on the
                // current best; relevant-but-not-better alternatives are
                // evaluated yet never recorded
                let improves = is_relevant(&alt_results, self.settings.relevance_threshold)
                    && (best.is_empty() || alt_results[0].distance < best[0].distance);
                if improves {
                    best = alt_results;
                    used_alternatives.push(alternative);
                }
            }

            if !used_alternatives.is_empty() {
                results = best;
            }
        }

        if selector.includes(SourceKind::Quran) {
            results = self.inject_topic_passages(query, results).await;
        }

        let context = build_context(&results);

        let alternative_note = if used_alternatives.is_empty() {
            None
        } else {
            Some(format!(
                "Note: The exact term in the query wasn't found.\nI searched for related concepts like: {}.",
                used_alternatives.join(", ")
            ))
        };

        let prompt = self.prompts.answer_prompt(&AnswerVars {
            query: query.to_string(),
            context,
            alternative_note,
            tafsir: requests_tafsir(query),
        })?;

        // The one generator call with no fallback: its failure fails the
        // request
        let mut answer = self.generate(&prompt).await?.trim().to_string();

        if !used_alternatives.is_empty() {
            answer = format!(
                "Note: I didn't find the exact terms you mentioned, so I searched for related Islamic concepts like: {}.\n\n{}",
                used_alternatives.join(", "),
                answer
            );
        }

        let formatted = ensure_reference_format_consistency(&answer);
        let mut linked = add_links_to_references(&formatted);

        if count_links(&linked) < MIN_EXPECTED_LINKS
            && (linked.contains("Surah") || linked.contains("Hadith"))
        {
            tracing::info!("Fewer links than expected. Trying additional reference formatting...");
            if let Some(reformatted) = self.reformat_answer(&answer).await {
                if count_links(&reformatted) > count_links(&linked) {
                    linked = reformatted;
                }
            }
        }

        let references_count = count_links(&linked);

        Ok(QueryResponse {
            query: query.to_string(),
            answer: linked,
            source_type: selector.as_str().to_string(),
            processing_time: start.elapsed().as_secs_f64(),
            references_count,
            alternatives_used: if used_alternatives.is_empty() {
                None
            } else {
                Some(used_alternatives)
            },
        })
    }

    /// Ask the generator for alternative phrasings of the query.
    ///
    /// Any failure yields an empty list, silently skipping the fallback.
    async fn generate_alternatives(&self, query: &str) -> Vec<String> {
        let prompt = match self.prompts.alternatives_prompt(query) {
            Ok(prompt) => prompt,
            Err(e) => {
                tracing::warn!("Error building alternatives prompt: {}", e);
                return Vec::new();
            }
        };

        match self.generate(&prompt).await {
            Ok(response) => response
                .split(',')
                .map(|alternative| alternative.trim().to_string())
                .filter(|alternative| !alternative.is_empty())
                .collect(),
            Err(e) => {
                tracing::warn!("Error generating alternatives: {}", e);
                Vec::new()
            }
        }
    }

    /// Augment weak Quran retrieval with generator-suggested verses.
    ///
    /// No-op when the existing Quran results already clear the stricter
    /// injection threshold, or when the query itself is hadith-oriented.
    /// Suggested lines are appended as synthetic results at a fixed
    /// medium-relevance distance and the set is re-sorted. Generator
    /// failure returns the input unchanged.
    async fn inject_topic_passages(
        &self,
        query: &str,
        mut results: Vec<SearchResult>,
    ) -> Vec<SearchResult> {
        let quran_already_relevant = results.iter().any(|result| {
            result.source == SourceKind::Quran
                && result.distance < self.settings.injection_threshold
        });
        if quran_already_relevant {
            return results;
        }

        if detect_source_type(query) == SourceSelector::Hadith {
            return results;
        }

        let prompt = match self.prompts.topic_verses_prompt(query) {
            Ok(prompt) => prompt,
            Err(e) => {
                tracing::warn!("Error building topic verses prompt: {}", e);
                return results;
            }
        };

        let response = match self.generate(&prompt).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Error generating topic verses: {}", e);
                return results;
            }
        };

        let response = response.trim();
        if response == NO_RELEVANT_VERSES {
            return results;
        }

        for line in response.lines() {
            if line.contains("Surah") && line.contains("Ayah") {
                results.push(SearchResult {
                    source: SourceKind::Quran,
                    text: line.to_string(),
                    distance: TOPIC_INJECTION_DISTANCE,
                });
            }
        }

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }

    /// Retry pass: ask the generator to standardize reference formatting,
    /// then re-link. Returns the linked reformatted answer, or `None` on
    /// any failure.
    async fn reformat_answer(&self, answer: &str) -> Option<String> {
        let prompt = match self.prompts.reformat_prompt(answer) {
            Ok(prompt) => prompt,
            Err(e) => {
                tracing::warn!("Error building reformat prompt: {}", e);
                return None;
            }
        };

        match self.generate(&prompt).await {
            Ok(reformatted) => {
                let formatted = ensure_reference_format_consistency(reformatted.trim());
                Some(add_links_to_references(&formatted))
            }
            Err(e) => {
                tracing::warn!("Error in reformatting: {}", e);
                None
            }
        }
    }

    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let request = LlmRequest::new(prompt, &self.settings.model);
        let response = self.generator.complete(&request).await?;
        Ok(response.content)
    }
}

/// Build the generator context from retrieved passages: a Quran block,
/// then a hadith block, each chunk separated by a blank line.
fn build_context(results: &[SearchResult]) -> String {
    let quran_texts: Vec<&str> = results
        .iter()
        .filter(|result| result.source == SourceKind::Quran)
        .map(|result| result.text.as_str())
        .collect();
    let hadith_texts: Vec<&str> = results
        .iter()
        .filter(|result| result.source == SourceKind::Hadith)
        .map(|result| result.text.as_str())
        .collect();

    let mut context = String::new();
    if !quran_texts.is_empty() {
        context.push_str("QURAN REFERENCES:\n");
        context.push_str(&quran_texts.join("\n\n"));
        context.push_str("\n\n");
    }
    if !hadith_texts.is_empty() {
        context.push_str("HADITH REFERENCES:\n");
        context.push_str(&hadith_texts.join("\n\n"));
    }
    context
}

fn count_links(text: &str) -> usize {
    text.matches("http").count()
}

/// Wire a full pipeline from the application config: embedding provider,
/// both corpora, generator client, and prompt registry.
pub fn build_pipeline(config: &AppConfig) -> AppResult<QaPipeline> {
    let embedder = embeddings::create_provider(&config.embedding)?;
    let quran = Corpus::load(&config.quran, SourceKind::Quran)?;
    let hadith = Corpus::load(&config.hadith, SourceKind::Hadith)?;
    let engine = RetrievalEngine::new(embedder, quran, hadith);

    let api_key = config.generator.resolve_api_key();
    let generator = create_client(
        &config.generator.provider,
        config.generator.endpoint.as_deref(),
        api_key.as_deref(),
    )
    .map_err(AppError::Config)?;

    let prompts = PromptLibrary::new()?;
    let settings = AskSettings::from_config(config);

    Ok(QaPipeline::new(engine, generator, prompts, settings))
}
