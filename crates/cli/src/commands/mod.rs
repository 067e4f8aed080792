//! Command handlers for the Hidayah CLI.

pub mod ask;
pub mod chat;
pub mod index;
pub mod info;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use chat::ChatCommand;
pub use index::IndexCommand;
pub use info::InfoCommand;

use clap::ValueEnum;
use hidayah_retrieval::SourceSelector;

/// CLI-facing source selection, including auto-detection.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SourceArg {
    /// Detect from query keywords
    Auto,
    /// Search the Quran corpus only
    Quran,
    /// Search the Hadith corpus only
    Hadith,
    /// Search both corpora
    Both,
}

impl SourceArg {
    /// Map to a retrieval selector; `Auto` defers to query detection.
    pub fn to_selector(self) -> Option<SourceSelector> {
        match self {
            Self::Auto => None,
            Self::Quran => Some(SourceSelector::Quran),
            Self::Hadith => Some(SourceSelector::Hadith),
            Self::Both => Some(SourceSelector::Both),
        }
    }
}
