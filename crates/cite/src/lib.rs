//! Citation extraction and link injection for generated answers.
//!
//! The generator is instructed to cite sources in canonical forms
//! ("Surah [Name], Ayah [Number]", "[Full Book Name], Hadith [Number]"),
//! but its output is inconsistent in practice. This crate parses whatever
//! citation phrasing actually shows up, resolves each citation against the
//! static collection tables, and rewrites the text with quran.com /
//! sunnah.com links appended after the citation.
//!
//! The rewrite only ever inserts " (url)" after existing text; it never
//! deletes or reorders content, and running it twice does not double-link.

pub mod extract;
pub mod link;
pub mod maps;

pub use extract::{
    extract_all_references, extract_hadith_references, extract_quran_references, Reference,
};
pub use link::{
    add_links_to_references, build_hadith_link, build_quran_link,
    ensure_reference_format_consistency, resolve_hadith_collection,
};
