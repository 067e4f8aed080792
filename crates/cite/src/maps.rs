//! Static lookup tables for Quran surahs and Hadith collections.
//!
//! Loaded once per process and read-only thereafter.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Canonical surah names in mushaf order.
const SURAH_TABLE: [(&str, u32); 114] = [
    ("Al-Fatihah", 1),
    ("Al-Baqarah", 2),
    ("Ali 'Imran", 3),
    ("An-Nisa", 4),
    ("Al-Ma'idah", 5),
    ("Al-An'am", 6),
    ("Al-A'raf", 7),
    ("Al-Anfal", 8),
    ("At-Tawbah", 9),
    ("Yunus", 10),
    ("Hud", 11),
    ("Yusuf", 12),
    ("Ar-Ra'd", 13),
    ("Ibrahim", 14),
    ("Al-Hijr", 15),
    ("An-Nahl", 16),
    ("Al-Isra", 17),
    ("Al-Kahf", 18),
    ("Maryam", 19),
    ("Ta-Ha", 20),
    ("Al-Anbiya", 21),
    ("Al-Hajj", 22),
    ("Al-Mu'minun", 23),
    ("An-Nur", 24),
    ("Al-Furqan", 25),
    ("Ash-Shu'ara", 26),
    ("An-Naml", 27),
    ("Al-Qasas", 28),
    ("Al-Ankabut", 29),
    ("Ar-Rum", 30),
    ("Luqman", 31),
    ("As-Sajdah", 32),
    ("Al-Ahzab", 33),
    ("Saba", 34),
    ("Fatir", 35),
    ("Ya-Sin", 36),
    ("As-Saffat", 37),
    ("Sad", 38),
    ("Az-Zumar", 39),
    ("Ghafir", 40),
    ("Fussilat", 41),
    ("Ash-Shura", 42),
    ("Az-Zukhruf", 43),
    ("Ad-Dukhan", 44),
    ("Al-Jathiyah", 45),
    ("Al-Ahqaf", 46),
    ("Muhammad", 47),
    ("Al-Fath", 48),
    ("Al-Hujurat", 49),
    ("Qaf", 50),
    ("Adh-Dhariyat", 51),
    ("At-Tur", 52),
    ("An-Najm", 53),
    ("Al-Qamar", 54),
    ("Ar-Rahman", 55),
    ("Al-Waqi'ah", 56),
    ("Al-Hadid", 57),
    ("Al-Mujadilah", 58),
    ("Al-Hashr", 59),
    ("Al-Mumtahinah", 60),
    ("As-Saff", 61),
    ("Al-Jumu'ah", 62),
    ("Al-Munafiqun", 63),
    ("At-Taghabun", 64),
    ("At-Talaq", 65),
    ("At-Tahrim", 66),
    ("Al-Mulk", 67),
    ("Al-Qalam", 68),
    ("Al-Haqqah", 69),
    ("Al-Ma'arij", 70),
    ("Nuh", 71),
    ("Al-Jinn", 72),
    ("Al-Muzzammil", 73),
    ("Al-Muddathir", 74),
    ("Al-Qiyamah", 75),
    ("Al-Insan", 76),
    ("Al-Mursalat", 77),
    ("An-Naba", 78),
    ("An-Nazi'at", 79),
    ("Abasa", 80),
    ("At-Takwir", 81),
    ("Al-Infitar", 82),
    ("Al-Mutaffifin", 83),
    ("Al-Inshiqaq", 84),
    ("Al-Buruj", 85),
    ("At-Tariq", 86),
    ("Al-A'la", 87),
    ("Al-Ghashiyah", 88),
    ("Al-Fajr", 89),
    ("Al-Balad", 90),
    ("Ash-Shams", 91),
    ("Al-Lail", 92),
    ("Ad-Duha", 93),
    ("Ash-Sharh", 94),
    ("At-Tin", 95),
    ("Al-Alaq", 96),
    ("Al-Qadr", 97),
    ("Al-Bayyinah", 98),
    ("Az-Zalzalah", 99),
    ("Al-Adiyat", 100),
    ("Al-Qari'ah", 101),
    ("At-Takathur", 102),
    ("Al-Asr", 103),
    ("Al-Humazah", 104),
    ("Al-Fil", 105),
    ("Quraish", 106),
    ("Al-Ma'un", 107),
    ("Al-Kawthar", 108),
    ("Al-Kafirun", 109),
    ("An-Nasr", 110),
    ("Al-Masad", 111),
    ("Al-Ikhlas", 112),
    ("Al-Falaq", 113),
    ("An-Nas", 114),
];

/// Canonical surah name → surah number (1-114). Exact-match lookup.
pub static SURAH_NUMBERS: LazyLock<HashMap<&'static str, u32>> =
    LazyLock::new(|| SURAH_TABLE.iter().copied().collect());

/// Lowercase spelling variants for frequently cited surahs.
///
/// Generated text drifts between transliteration schemes; this table covers
/// the common drift for the first nine surahs, which dominate citations.
pub static SURAH_VARIANTS: LazyLock<HashMap<&'static str, u32>> = LazyLock::new(|| {
    [
        ("al-fatiha", 1),
        ("fatiha", 1),
        ("al-fatihah", 1),
        ("fatihah", 1),
        ("al-baqara", 2),
        ("baqara", 2),
        ("al-baqarah", 2),
        ("baqarah", 2),
        ("al-imran", 3),
        ("imran", 3),
        ("al-i'mran", 3),
        ("ali imran", 3),
        ("al-e-imran", 3),
        ("an-nisa", 4),
        ("nisa", 4),
        ("an-nisa'", 4),
        ("al-nisa", 4),
        ("al-ma'idah", 5),
        ("maidah", 5),
        ("al-maidah", 5),
        ("ma'idah", 5),
        ("al-an'am", 6),
        ("an'am", 6),
        ("al-anam", 6),
        ("anam", 6),
        ("al-a'raf", 7),
        ("a'raf", 7),
        ("al-araf", 7),
        ("araf", 7),
        ("al-anfal", 8),
        ("anfal", 8),
        ("at-tawbah", 9),
        ("tawbah", 9),
        ("al-tawbah", 9),
        ("tauba", 9),
        ("tawba", 9),
    ]
    .into_iter()
    .collect()
});

/// sunnah.com collection ids with their known book-name variants.
///
/// Matching is substring containment in either direction over lowercased
/// input.
pub const SUNNAH_COLLECTIONS: [(&str, &[&str]); 6] = [
    (
        "bukhari",
        &[
            "sahih bukhari",
            "bukhari",
            "sahih al-bukhari",
            "sahih al bukhari",
        ],
    ),
    ("muslim", &["sahih muslim", "muslim"]),
    (
        "abudawud",
        &[
            "sunan abu dawood",
            "abu dawood",
            "abu dawud",
            "sunan abi dawud",
            "dawud",
            "dawood",
        ],
    ),
    (
        "tirmidhi",
        &[
            "jami at-tirmidhi",
            "tirmidhi",
            "jami al-tirmidhi",
            "tirmizi",
            "al-tirmidhi",
        ],
    ),
    (
        "nasai",
        &[
            "sunan an-nasai",
            "nasai",
            "an-nasai",
            "sunan al-nasai",
            "al-nasai",
            "nasa'i",
        ],
    ),
    ("ibnmajah", &["sunan ibn majah", "ibn majah", "ibn-majah"]),
];

/// Keyword fallback per collection, tried when no alias matched.
pub const COLLECTION_KEYWORDS: [(&str, &[&str]); 6] = [
    ("bukhari", &["bukhari"]),
    ("muslim", &["muslim"]),
    ("abudawud", &["dawood", "dawud"]),
    ("tirmidhi", &["tirmidhi", "tirmizi"]),
    ("nasai", &["nasai", "nasa'i"]),
    ("ibnmajah", &["majah"]),
];
