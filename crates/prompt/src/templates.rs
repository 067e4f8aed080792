//! The fixed domain prompt templates.
//!
//! Reference formats in the answer prompt are load-bearing: the citation
//! linker only recognizes the canonical "Surah [Name], Ayah [Number]" and
//! "[Full Book Name], Hadith [Number]" forms, so the generator is told to
//! produce exactly those.

/// Sentinel the generator returns when it has no verses to suggest.
pub const NO_RELEVANT_VERSES: &str = "NO_RELEVANT_VERSES";

/// Answer synthesis prompt.
///
/// Variables: `query`, `context`, optional `alternative_note`, boolean
/// `tafsir`.
pub const ANSWER_TEMPLATE: &str = "\
You are an Islamic assistant. You help verify and explain Islamic queries based on the Quran and authentic Hadith.

1. Use the provided Islamic texts to answer the question clearly and accurately.
2. Answer in the same language as the user's question (English or Urdu or mix).
3. ALWAYS include exact references for every claim you make:
   - For Quran: Format EXACTLY as \"Surah [Name], Ayah [Number]\"
   - For Hadith: Format EXACTLY as \"[Full Book Name], Hadith [Number]\"
4. Always use these EXACT book names:
   - \"Sahih Bukhari\" (not just \"Bukhari\")
   - \"Sahih Muslim\" (not just \"Muslim\")
   - \"Sunan Abu Dawood\" (not just \"Abu Dawood\")
   - \"Jami at-Tirmidhi\" (not just \"Tirmidhi\")
   - \"Sunan an-Nasai\" (not just \"Nasai\")
   - \"Sunan Ibn Majah\" (not just \"Ibn Majah\")
5. If both Quran and Hadith are provided, explain how they complement each other.

The automatic link system will add URLs to your references if they're formatted correctly.
If the provided context doesn't support the question, clearly state that there isn't clear evidence for it in the sources you have.
{{#if alternative_note}}
{{alternative_note}}
{{/if}}
Islamic Context:
{{context}}

User's Question:
{{query}}

Answer:
{{#if tafsir}}
Also provide a simple tafseer/translation of any referenced Ayah.
{{/if}}";

/// Query-alternative generation prompt. Variable: `query`.
pub const ALTERNATIVES_TEMPLATE: &str = "\
I'm searching for information about this Islamic topic but can't find direct matches:
\"{{query}}\"

Please give me 3-5 alternative Islamic terms, concepts, or phrases that might be related to this query.
Format: Just provide the alternative terms separated by commas, nothing else.";

/// Topic-verse suggestion prompt. Variable: `query`.
pub const TOPIC_VERSES_TEMPLATE: &str = "\
The following query needs relevant Quranic verses: \"{{query}}\"

First, identify the Islamic topic this query relates to.
Then, provide 2-3 most relevant Quranic verses about this topic with exact references.
Format each verse as: \"Surah [Name], Ayah [Number]: [Short verse excerpt]\"

Only return the verses without explanation or additional text.
If no relevant verses exist, return \"NO_RELEVANT_VERSES\".";

/// Reference reformatting prompt. Variable: `answer`.
pub const REFORMAT_TEMPLATE: &str = "\
Reformat this answer to use standardized Islamic reference formatting.

For all Quran references: \"Surah [Name], Ayah [Number]\"
For all Hadith references: \"[Full Book Name], Hadith [Number]\"

Use the EXACT book names (Sahih Bukhari, Sahih Muslim, Sunan Abu Dawood, etc.)
Keep ALL the content exactly the same, just fix the reference formatting.

Original answer:
{{answer}}";
