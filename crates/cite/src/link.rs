//! Link resolution and injection.
//!
//! Quran citations resolve through the surah tables and may fail (an
//! unresolvable name simply gets no link). Hadith citations always resolve:
//! sunnah.com accepts any collection slug, so the resolver degrades to the
//! space-stripped book name rather than failing.

use crate::extract::{extract_all_references, Reference};
use crate::maps::{COLLECTION_KEYWORDS, SUNNAH_COLLECTIONS, SURAH_NUMBERS, SURAH_VARIANTS};
use regex::Regex;
use std::sync::LazyLock;

/// Canonical-form patterns for the second, broader link sweep.
static QURAN_CANONICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Surah\s+([^,]+),\s+Ayah\s+(\d+)").unwrap());

static HADITH_CANONICAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(Sahih Bukhari|Sahih Muslim|Sunan Abu Dawood|Jami at-Tirmidhi|Sunan an-Nasai|Sunan Ibn Majah)[,\s]+Hadith\s+(\d+)",
    )
    .unwrap()
});

/// Comma-normalization patterns for [`ensure_reference_format_consistency`].
static SURAH_COMMA_FIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(Surah\s+[^\d,]+)\s+Ayah").unwrap());

static HADITH_COMMA_FIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(Sahih Bukhari|Sahih Muslim|Sunan Abu Dawood|Jami at-Tirmidhi|Sunan an-Nasai|Sunan Ibn Majah)\s+Hadith",
    )
    .unwrap()
});

/// Build a quran.com link for a surah identifier and ayah number.
///
/// Numeric identifiers are emitted directly. Names are trimmed, apostrophe
/// variants normalized, then resolved exactly against the canonical table
/// and finally against the lowercase variant table. Returns `None` when the
/// name cannot be resolved; callers must not inject a broken URL.
pub fn build_quran_link(surah: &str, ayah: &str) -> Option<String> {
    if !surah.is_empty() && surah.chars().all(|c| c.is_ascii_digit()) {
        return Some(format!("https://quran.com/{}/{}", surah, ayah));
    }

    let name = surah.trim().replace('\u{2019}', "'");
    if let Some(number) = SURAH_NUMBERS.get(name.as_str()) {
        return Some(format!("https://quran.com/{}/{}", number, ayah));
    }

    let name_lower = name.to_lowercase();
    SURAH_VARIANTS
        .get(name_lower.as_str())
        .map(|number| format!("https://quran.com/{}/{}", number, ayah))
}

/// Resolve a hadith book name to its sunnah.com collection id.
///
/// Tries the alias table (substring containment in either direction), then
/// per-collection keywords, and as a last resort returns the input with
/// spaces stripped. Never fails.
pub fn resolve_hadith_collection(book_name: &str) -> String {
    let book = book_name.trim().to_lowercase();

    for (id, aliases) in SUNNAH_COLLECTIONS {
        if aliases
            .iter()
            .any(|alias| book.contains(alias) || alias.contains(book.as_str()))
        {
            return id.to_string();
        }
    }

    for (id, keywords) in COLLECTION_KEYWORDS {
        if keywords.iter().any(|keyword| book.contains(keyword)) {
            return id.to_string();
        }
    }

    book.replace(' ', "")
}

/// Build a sunnah.com link. Always succeeds.
pub fn build_hadith_link(book: &str, number: &str) -> String {
    format!(
        "https://sunnah.com/{}:{}",
        resolve_hadith_collection(book),
        number
    )
}

/// Normalize reference punctuation ahead of extraction.
///
/// Inserts the canonical comma into "Surah X Ayah Y" and
/// "<FullBookName> Hadith Y" so the canonical-form patterns match more of
/// the generator's output. Pure rewrite, idempotent.
pub fn ensure_reference_format_consistency(text: &str) -> String {
    let text = SURAH_COMMA_FIX.replace_all(text, "${1}, Ayah");
    HADITH_COMMA_FIX
        .replace_all(&text, "${1}, Hadith")
        .into_owned()
}

/// Append resolvable links after every recognized citation in `text`.
///
/// Two passes. The targeted pass walks the extracted references and, for
/// each one with a buildable link, annotates the first of its known
/// surface-form variants found in the text; a reference is skipped when its
/// link already appears anywhere in the text (a coarse idempotence guard,
/// checked against the whole text rather than the specific occurrence).
/// The broader sweep then catches canonical-form citations the targeted
/// pass missed, skipping any already followed by a link.
///
/// The output contains the input verbatim plus inserted " (url)" suffixes;
/// nothing is removed or reordered.
pub fn add_links_to_references(text: &str) -> String {
    let mut result = text.to_string();

    let references = extract_all_references(text);
    tracing::debug!("Found {} references to link", references.len());

    for reference in &references {
        match reference {
            Reference::Quran { surah, ayah } => {
                let Some(link) = build_quran_link(surah, ayah) else {
                    continue;
                };
                let forms = [
                    format!("Surah {}, Ayah {}", surah, ayah),
                    format!("Surah {} Ayah {}", surah, ayah),
                    format!("Surah {}, Verse {}", surah, ayah),
                    format!("Quran {}:{}", surah, ayah),
                ];
                annotate_first_form(&mut result, &forms, &link);
            }
            Reference::Hadith { book, number } => {
                let link = build_hadith_link(book, number);
                let forms = [
                    format!("{}, Hadith {}", book, number),
                    format!("{} Hadith {}", book, number),
                    format!("{} {}", book, number),
                ];
                annotate_first_form(&mut result, &forms, &link);
            }
        }
    }

    sweep_canonical_quran(&mut result);
    sweep_canonical_hadith(&mut result);

    result
}

/// Replace the first surface form present in `result` with its linked
/// version, unless the link already appears somewhere in the text.
fn annotate_first_form(result: &mut String, forms: &[String], link: &str) {
    let marker = format!("({})", link);
    for form in forms {
        if result.contains(form.as_str()) && !result.contains(marker.as_str()) {
            *result = result.replace(form.as_str(), &format!("{} ({})", form, link));
            tracing::debug!("Added link: {} -> {}", form, link);
            break;
        }
    }
}

/// Sweep for canonical Quran citations not already followed by a link.
fn sweep_canonical_quran(result: &mut String) {
    let snapshot = result.clone();
    let mut handled: Vec<&str> = Vec::new();

    for caps in QURAN_CANONICAL.captures_iter(&snapshot) {
        let whole = caps.get(0).unwrap();
        if followed_by_link(&snapshot, whole.end()) || handled.contains(&whole.as_str()) {
            continue;
        }
        if let Some(link) = build_quran_link(&caps[1], &caps[2]) {
            *result = result.replace(whole.as_str(), &format!("{} ({})", whole.as_str(), link));
            tracing::debug!("Added missing Quran link: {} -> {}", whole.as_str(), link);
            handled.push(whole.as_str());
        }
    }
}

/// Sweep for canonical hadith citations not already followed by a link.
fn sweep_canonical_hadith(result: &mut String) {
    let snapshot = result.clone();
    let mut handled: Vec<&str> = Vec::new();

    for caps in HADITH_CANONICAL.captures_iter(&snapshot) {
        let whole = caps.get(0).unwrap();
        if followed_by_link(&snapshot, whole.end()) || handled.contains(&whole.as_str()) {
            continue;
        }
        let link = build_hadith_link(&caps[1], &caps[2]);
        *result = result.replace(whole.as_str(), &format!("{} ({})", whole.as_str(), link));
        tracing::debug!("Added missing Hadith link: {} -> {}", whole.as_str(), link);
        handled.push(whole.as_str());
    }
}

/// Whether the text after byte offset `end` starts with a link, ignoring
/// leading whitespace.
fn followed_by_link(text: &str, end: usize) -> bool {
    text[end..].trim_start().starts_with("(http")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_surah_link() {
        assert_eq!(
            build_quran_link("2", "255").as_deref(),
            Some("https://quran.com/2/255")
        );
    }

    #[test]
    fn test_named_surah_link() {
        let link = build_quran_link("Al-Baqarah", "255").unwrap();
        assert!(link.contains("/2/255"));
    }

    #[test]
    fn test_variant_surah_link() {
        let link = build_quran_link("baqarah", "153").unwrap();
        assert_eq!(link, "https://quran.com/2/153");
    }

    #[test]
    fn test_curly_apostrophe_normalization() {
        let link = build_quran_link("Al-Ma\u{2019}idah", "3").unwrap();
        assert!(link.contains("/5/3"));
    }

    #[test]
    fn test_unresolvable_surah_gets_no_link() {
        assert!(build_quran_link("NotARealSurah", "1").is_none());
    }

    #[test]
    fn test_resolve_collection_aliases() {
        assert_eq!(resolve_hadith_collection("Sahih Bukhari"), "bukhari");
        assert_eq!(resolve_hadith_collection("abu dawud"), "abudawud");
        assert_eq!(resolve_hadith_collection("Tirmizi"), "tirmidhi");
        assert_eq!(resolve_hadith_collection("Sunan an-Nasai"), "nasai");
        assert_eq!(resolve_hadith_collection("ibn majah"), "ibnmajah");
    }

    #[test]
    fn test_resolve_collection_last_resort() {
        assert_eq!(
            resolve_hadith_collection("Musnad Ahmad ibn Hanbal"),
            "musnadahmadibnhanbal"
        );
    }

    #[test]
    fn test_hadith_link_always_succeeds() {
        assert_eq!(
            build_hadith_link("Sahih Muslim", "45"),
            "https://sunnah.com/muslim:45"
        );
    }

    #[test]
    fn test_format_consistency_inserts_commas() {
        let fixed = ensure_reference_format_consistency(
            "See Surah Al-Baqarah Ayah 153 and Sahih Bukhari Hadith 50.",
        );
        assert!(fixed.contains("Surah Al-Baqarah, Ayah 153"));
        assert!(fixed.contains("Sahih Bukhari, Hadith 50"));
    }

    #[test]
    fn test_format_consistency_idempotent() {
        let input = "Surah An-Nur Ayah 31, then Jami at-Tirmidhi Hadith 7.";
        let once = ensure_reference_format_consistency(input);
        let twice = ensure_reference_format_consistency(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_add_links_canonical_quran() {
        let linked = add_links_to_references("Allah commands patience in Surah Al-Baqarah, Ayah 153.");
        assert!(linked.contains("Surah Al-Baqarah, Ayah 153 (https://quran.com/2/153)"));
    }

    #[test]
    fn test_add_links_canonical_hadith() {
        let linked = add_links_to_references("It is reported in Sahih Muslim, Hadith 2564.");
        assert!(linked.contains("Sahih Muslim, Hadith 2564 (https://sunnah.com/muslim:2564)"));
    }

    #[test]
    fn test_add_links_is_insert_only() {
        let input = "Reflect on Surah Al-Baqarah, Ayah 153 and be steadfast.";
        let linked = add_links_to_references(input);
        // Removing the inserted links restores the input exactly
        let stripped = linked.replace(" (https://quran.com/2/153)", "");
        assert_eq!(stripped, input);
    }

    #[test]
    fn test_add_links_twice_does_not_double_link() {
        let input = "Surah Al-Baqarah, Ayah 153 and Sahih Bukhari, Hadith 50.";
        let once = add_links_to_references(input);
        let twice = add_links_to_references(&once);
        assert_eq!(once, twice);
        assert!(!twice.contains(") (https://"));
    }

    #[test]
    fn test_unresolvable_reference_left_unlinked() {
        let input = "Mentioned in Surah Xyz, Ayah 4.";
        let linked = add_links_to_references(input);
        assert_eq!(linked, input);
    }

    #[test]
    fn test_sweep_catches_reference_inside_longer_sentence() {
        // The targeted pass uses the extracted surface forms; the sweep
        // still links canonical citations when extraction produced a
        // differently-spelled variant first
        let input = "Quran 2:255 is the Throne Verse; see also Surah Yunus, Ayah 57.";
        let linked = add_links_to_references(input);
        assert!(linked.contains("Quran 2:255 (https://quran.com/2/255)"));
        assert!(linked.contains("Surah Yunus, Ayah 57 (https://quran.com/10/57)"));
    }
}
