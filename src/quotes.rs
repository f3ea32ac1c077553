//! Quote selection: embedded fallback sets plus the database-vs-builtin
//! picking policy.

use std::sync::OnceLock;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::db::Repository;
use crate::error::Result;
use crate::models::{Language, Quote};

const PHRASES_BR: &str = include_str!("../data/phrases_br.json");
const PHRASES_US: &str = include_str!("../data/phrases_us.json");

static BUILTIN_BR: OnceLock<Vec<Quote>> = OnceLock::new();
static BUILTIN_US: OnceLock<Vec<Quote>> = OnceLock::new();

/// Quotes compiled into the binary, so the tool works before any feed has
/// been ingested.
pub fn builtin(language: Language) -> &'static [Quote] {
    let (cell, raw) = match language {
        Language::Br => (&BUILTIN_BR, PHRASES_BR),
        Language::Us => (&BUILTIN_US, PHRASES_US),
    };
    cell.get_or_init(|| {
        serde_json::from_str(raw).expect("embedded quote data is valid JSON")
    })
}

/// Where the next quote should come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteSource {
    Database,
    Builtin,
}

/// Decide between the database and the embedded set. `db_preference` is the
/// probability of trying the database first; 0.0 never touches it and 1.0
/// always tries it.
pub fn pick_source<R: Rng + ?Sized>(db_preference: f64, rng: &mut R) -> QuoteSource {
    if rng.random_bool(db_preference) {
        QuoteSource::Database
    } else {
        QuoteSource::Builtin
    }
}

/// Pick one quote for `language`. A database miss (no stored phrases) falls
/// back to the embedded set rather than failing.
pub async fn random_quote(
    repo: &Repository,
    language: Language,
    db_preference: f64,
) -> Result<Quote> {
    if pick_source(db_preference, &mut rand::rng()) == QuoteSource::Database {
        if let Some(quote) = repo.random_phrase(language).await? {
            return Ok(quote);
        }
        tracing::debug!("No stored phrases for {}, using built-in set", language);
    }

    let quote = builtin(language)
        .choose(&mut rand::rng())
        .ok_or_else(|| anyhow::anyhow!("no built-in quotes for language {}", language))?;
    Ok(quote.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_sets_are_non_empty() {
        for language in Language::ALL {
            assert!(!builtin(language).is_empty());
        }
    }

    #[test]
    fn test_zero_preference_never_picks_database() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(pick_source(0.0, &mut rng), QuoteSource::Builtin);
        }
    }

    #[test]
    fn test_full_preference_always_picks_database() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(pick_source(1.0, &mut rng), QuoteSource::Database);
        }
    }

    #[test]
    fn test_mid_preference_picks_both_sources() {
        let mut rng = StdRng::seed_from_u64(7);
        let picks: Vec<_> = (0..200).map(|_| pick_source(0.5, &mut rng)).collect();

        assert!(picks.contains(&QuoteSource::Database));
        assert!(picks.contains(&QuoteSource::Builtin));
    }

    #[tokio::test]
    async fn test_random_quote_falls_back_on_empty_db() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("test.db");
        let repo = Repository::new(db_path.to_str().unwrap()).await.unwrap();

        let quote = random_quote(&repo, Language::Us, 1.0).await.unwrap();
        assert!(!quote.phrase.is_empty());
    }
}
