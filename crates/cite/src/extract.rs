//! Reference extraction from generated text.
//!
//! Each source has a small ordered table of patterns, one per phrasing the
//! generator has been observed to use. All matches from all patterns are
//! collected, then deduplicated by exact tuple equality with first-seen
//! order preserved.

use regex::Regex;
use std::sync::LazyLock;

/// A parsed citation extracted from free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    /// Quran citation: surah (name or number) and ayah number
    Quran { surah: String, ayah: String },
    /// Hadith citation: book name and hadith number
    Hadith { book: String, number: String },
}

/// Quran citation patterns, in priority order:
/// 1. "Surah Al-Baqarah, Ayah 255" (canonical, comma-separated)
/// 2. "Surah Al-Baqarah 255" (no comma)
/// 3. "Quran 2:255" (numeric shorthand)
/// 4. "(2:255)" (bare parenthetical)
static QURAN_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)Surah\s+([^,]+),\s+Ayah\s+(\d+)").unwrap(),
        Regex::new(r"(?i)Surah\s+([^\d]+)\s+(\d+)").unwrap(),
        Regex::new(r"(?i)Quran\s+(\d+):(\d+)").unwrap(),
        Regex::new(r"\((\d+):(\d+)\)").unwrap(),
    ]
});

/// Hadith citation patterns, in priority order:
/// 1. "Sahih Bukhari, Hadith 1" (full canonical book names only)
/// 2. "Bukhari 123" (abbreviated names)
/// 3. "narrated by Bukhari ... 123"
static HADITH_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(
            r"(?i)(Sahih Bukhari|Sahih Muslim|Sunan Abu Dawood|Jami at-Tirmidhi|Sunan an-Nasai|Sunan Ibn Majah)[,\s]+Hadith\s+(\d+)",
        )
        .unwrap(),
        Regex::new(r"(?i)(Bukhari|Muslim|Abu Dawood|Tirmidhi|Nasai|Ibn Majah)\s+(\d+)").unwrap(),
        Regex::new(r"(?i)narrated by\s+(Bukhari|Muslim|Abu Dawood|Tirmidhi|Nasai|Ibn Majah)[^0-9]*(\d+)")
            .unwrap(),
    ]
});

/// Extract Quran references, deduplicated, first-seen order preserved.
pub fn extract_quran_references(text: &str) -> Vec<Reference> {
    let mut references = Vec::new();

    for (i, pattern) in QURAN_PATTERNS.iter().enumerate() {
        for caps in pattern.captures_iter(text) {
            // The no-comma pattern over-captures trailing words; its surah
            // capture is trimmed like any free-text fragment
            let surah = if i == 1 {
                caps[1].trim().to_string()
            } else {
                caps[1].to_string()
            };
            push_unique(
                &mut references,
                Reference::Quran {
                    surah,
                    ayah: caps[2].to_string(),
                },
            );
        }
    }

    references
}

/// Extract hadith references, deduplicated, first-seen order preserved.
pub fn extract_hadith_references(text: &str) -> Vec<Reference> {
    let mut references = Vec::new();

    for pattern in HADITH_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            push_unique(
                &mut references,
                Reference::Hadith {
                    book: caps[1].to_string(),
                    number: caps[2].to_string(),
                },
            );
        }
    }

    references
}

/// Extract all references from text, Quran first.
pub fn extract_all_references(text: &str) -> Vec<Reference> {
    let mut references = extract_quran_references(text);
    references.extend(extract_hadith_references(text));
    references
}

fn push_unique(references: &mut Vec<Reference>, reference: Reference) {
    if !references.contains(&reference) {
        references.push(reference);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quran(surah: &str, ayah: &str) -> Reference {
        Reference::Quran {
            surah: surah.to_string(),
            ayah: ayah.to_string(),
        }
    }

    fn hadith(book: &str, number: &str) -> Reference {
        Reference::Hadith {
            book: book.to_string(),
            number: number.to_string(),
        }
    }

    #[test]
    fn test_canonical_quran_form() {
        let refs = extract_quran_references("Patience is praised in Surah Al-Baqarah, Ayah 153.");
        assert!(refs.contains(&quran("Al-Baqarah", "153")));
    }

    #[test]
    fn test_numeric_shorthand_forms() {
        let refs = extract_quran_references("See Quran 2:255 and also (24:31).");
        assert!(refs.contains(&quran("2", "255")));
        assert!(refs.contains(&quran("24", "31")));
    }

    #[test]
    fn test_case_insensitive_matching() {
        let refs = extract_quran_references("surah al-ikhlas, ayah 1");
        assert!(refs.contains(&quran("al-ikhlas", "1")));
    }

    #[test]
    fn test_dedup_preserves_first_seen_order() {
        let text = "Surah Yunus, Ayah 5. Again: Surah Yunus, Ayah 5. Then Quran 10:6.";
        let refs = extract_quran_references(text);
        let yunus_count = refs
            .iter()
            .filter(|r| matches!(r, Reference::Quran { surah, .. } if surah == "Yunus"))
            .count();
        assert_eq!(yunus_count, 1);
        assert_eq!(refs[0], quran("Yunus", "5"));
    }

    #[test]
    fn test_extraction_skips_inside_existing_links() {
        // An already-linked citation must not yield a second, different
        // reference from the URL text itself
        let text = "Surah Al-Baqarah, Ayah 153 (https://quran.com/2/153)";
        let refs = extract_quran_references(text);
        assert!(refs.contains(&quran("Al-Baqarah", "153")));
        // The "(2/153)" URL path never matches the parenthetical pattern,
        // which requires a colon separator
        assert!(!refs.contains(&quran("2", "153")));
    }

    #[test]
    fn test_full_book_name_hadith() {
        let refs = extract_hadith_references("This is reported in Sahih Bukhari, Hadith 6114.");
        assert!(refs.contains(&hadith("Sahih Bukhari", "6114")));
    }

    #[test]
    fn test_short_name_hadith() {
        let refs = extract_hadith_references("Compare Tirmidhi 2516.");
        assert!(refs.contains(&hadith("Tirmidhi", "2516")));
    }

    #[test]
    fn test_narrated_by_hadith() {
        let refs = extract_hadith_references("as narrated by Muslim in his collection, no. 2564");
        assert!(refs.contains(&hadith("Muslim", "2564")));
    }

    #[test]
    fn test_mixed_sources_quran_first() {
        let text = "Sahih Muslim, Hadith 45 complements Surah Al-Hujurat, Ayah 10.";
        let refs = extract_all_references(text);
        assert_eq!(refs[0], quran("Al-Hujurat", "10"));
        assert!(refs.contains(&hadith("Sahih Muslim", "45")));
    }

    #[test]
    fn test_no_references() {
        assert!(extract_all_references("No citations here at all.").is_empty());
    }
}
