//! Prompt registry and rendering.

use crate::templates;
use handlebars::Handlebars;
use hidayah_core::{AppError, AppResult};
use serde::Serialize;

/// Variables for the answer synthesis prompt.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerVars {
    /// The user's question
    pub query: String,

    /// Retrieved context (Quran and/or Hadith blocks)
    pub context: String,

    /// Note listing alternative search terms, when query expansion kicked in
    pub alternative_note: Option<String>,

    /// Whether to request a tafsir/translation addendum
    pub tafsir: bool,
}

#[derive(Serialize)]
struct QueryVars<'a> {
    query: &'a str,
}

#[derive(Serialize)]
struct ReformatVars<'a> {
    answer: &'a str,
}

/// Registry of the four domain prompt templates, built once at startup.
pub struct PromptLibrary {
    registry: Handlebars<'static>,
}

impl PromptLibrary {
    /// Build the registry and register all templates.
    pub fn new() -> AppResult<Self> {
        let mut registry = Handlebars::new();

        // Prompts are plain text, not HTML
        registry.register_escape_fn(handlebars::no_escape);

        let entries = [
            ("answer", templates::ANSWER_TEMPLATE),
            ("alternatives", templates::ALTERNATIVES_TEMPLATE),
            ("topic_verses", templates::TOPIC_VERSES_TEMPLATE),
            ("reformat", templates::REFORMAT_TEMPLATE),
        ];

        for (name, template) in entries {
            registry
                .register_template_string(name, template)
                .map_err(|e| {
                    AppError::Prompt(format!("Failed to register template '{}': {}", name, e))
                })?;
        }

        Ok(Self { registry })
    }

    /// Render the answer synthesis prompt.
    pub fn answer_prompt(&self, vars: &AnswerVars) -> AppResult<String> {
        self.render("answer", vars)
    }

    /// Render the query-alternative generation prompt.
    pub fn alternatives_prompt(&self, query: &str) -> AppResult<String> {
        self.render("alternatives", &QueryVars { query })
    }

    /// Render the topic-verse suggestion prompt.
    pub fn topic_verses_prompt(&self, query: &str) -> AppResult<String> {
        self.render("topic_verses", &QueryVars { query })
    }

    /// Render the reference reformatting prompt.
    pub fn reformat_prompt(&self, answer: &str) -> AppResult<String> {
        self.render("reformat", &ReformatVars { answer })
    }

    fn render<T: Serialize>(&self, name: &str, vars: &T) -> AppResult<String> {
        self.registry
            .render(name, vars)
            .map_err(|e| AppError::Prompt(format!("Failed to render template '{}': {}", name, e)))
    }
}
