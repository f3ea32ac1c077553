use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::{Language, NewPhrase};

/// Wire formats a quote feed can be published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseFormat {
    Csv,
    Json,
}

impl PhraseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhraseFormat::Csv => "csv",
            PhraseFormat::Json => "json",
        }
    }
}

impl fmt::Display for PhraseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhraseFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "csv" => Ok(PhraseFormat::Csv),
            "json" => Ok(PhraseFormat::Json),
            _ => Err(AppError::UnsupportedFormat),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawQuote {
    #[serde(default)]
    author: String,
    #[serde(default)]
    phrase: String,
}

/// Parse a downloaded document into phrases. Rows with a missing author or
/// phrase are skipped; a structurally broken document is an error.
pub fn parse(format: PhraseFormat, body: &[u8], language: Language) -> Result<Vec<NewPhrase>> {
    match format {
        PhraseFormat::Csv => parse_csv(body, language),
        PhraseFormat::Json => parse_json(body, language),
    }
}

fn parse_csv(body: &[u8], language: Language) -> Result<Vec<NewPhrase>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(body);

    let mut phrases = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() != 2 {
            tracing::debug!("Skipping row with {} fields", record.len());
            continue;
        }

        let phrase = NewPhrase::new(&record[0], &record[1], language);
        if phrase.is_blank() {
            tracing::debug!(
                "Author or phrase is empty: author={:?} phrase={:?}",
                phrase.author,
                phrase.phrase
            );
            continue;
        }
        phrases.push(phrase);
    }

    Ok(phrases)
}

fn parse_json(body: &[u8], language: Language) -> Result<Vec<NewPhrase>> {
    let quotes: Vec<RawQuote> = serde_json::from_slice(body)?;

    let mut phrases = Vec::new();
    for quote in quotes {
        let phrase = NewPhrase::new(&quote.author, &quote.phrase, language);
        if phrase.is_blank() {
            tracing::debug!(
                "Author or phrase is empty: author={:?} phrase={:?}",
                phrase.author,
                phrase.phrase
            );
            continue;
        }
        phrases.push(phrase);
    }

    Ok(phrases)
}
