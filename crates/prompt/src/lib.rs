//! Prompt templates for the Hidayah QA pipeline.
//!
//! The pipeline talks to the generator at four points, each with a fixed
//! domain prompt: answer synthesis, query-alternative generation,
//! topic-verse suggestion, and reference reformatting. The templates are
//! rendered with Handlebars and kept in one registry built at startup.

pub mod library;
pub mod templates;

pub use library::{AnswerVars, PromptLibrary};
pub use templates::NO_RELEVANT_VERSES;

/// Keywords that make the answer prompt request a tafsir/translation
/// addendum. English, transliterated, and Urdu forms.
const TAFSIR_KEYWORDS: &[&str] = &[
    "tafseer",
    "tafsir",
    "translate",
    "tarjuma",
    "translation",
    "تشریح",
    "تفسیر",
];

/// Whether the query asks for a tafsir or translation of the cited verses.
pub fn requests_tafsir(query: &str) -> bool {
    let query_lower = query.to_lowercase();
    TAFSIR_KEYWORDS
        .iter()
        .any(|keyword| query_lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_tafsir() {
        assert!(requests_tafsir("Give me the tafseer of Surah Al-Fatihah"));
        assert!(requests_tafsir("Tarjuma of Ayat al-Kursi please"));
        assert!(requests_tafsir("اس آیت کی تفسیر بتائیں"));
        assert!(!requests_tafsir("What does the Quran say about patience?"));
    }
}
