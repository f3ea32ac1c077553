use crate::hash::sha256_hex;
use crate::models::Language;

/// A phrase parsed from a remote document, ready for insertion.
///
/// Author and phrase text are trimmed on construction and the phrase hash is
/// computed over the trimmed text, so the same quote with different
/// surrounding whitespace dedupes to one row.
#[derive(Debug, Clone)]
pub struct NewPhrase {
    pub author: String,
    pub phrase: String,
    pub phrase_hash: String,
    pub language: Language,
}

impl NewPhrase {
    pub fn new(author: &str, phrase: &str, language: Language) -> Self {
        let author = author.trim().to_string();
        let phrase = phrase.trim().to_string();
        let phrase_hash = sha256_hex(phrase.as_bytes());
        Self {
            author,
            phrase,
            phrase_hash,
            language,
        }
    }

    /// True when either field ended up empty after trimming. Such rows are
    /// skipped during parsing.
    pub fn is_blank(&self) -> bool {
        self.author.is_empty() || self.phrase.is_empty()
    }
}
