use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use tokio_rusqlite::Connection;

use crate::error::Result;
use crate::models::{Language, NewDocument, NewPhrase, Quote};

use super::generate_id;
use super::schema::SCHEMA;

/// Outcome of a batch insert: how many phrases landed and how many were
/// already present under the same phrase hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertStats {
    pub inserted: usize,
    pub skipped: usize,
}

pub struct Repository {
    conn: Connection,
}

impl Repository {
    pub async fn new(db_path: &str) -> Result<Self> {
        let conn = Connection::open(db_path).await?;

        conn.call(|conn| {
            conn.execute_batch(SCHEMA)?;
            Ok(())
        })
        .await?;

        Ok(Self { conn })
    }

    /// Check whether a document with this content hash was already ingested.
    pub async fn content_exists(&self, content_hash: &str) -> Result<bool> {
        let content_hash = content_hash.to_string();
        let exists = self
            .conn
            .call(move |conn| {
                let found = conn
                    .query_row(
                        "SELECT 1 FROM documents WHERE content_hash = ?1 LIMIT 1",
                        params![content_hash],
                        |_| Ok(()),
                    )
                    .optional()?;
                Ok(found.is_some())
            })
            .await?;
        Ok(exists)
    }

    /// Record a document and its phrases in one transaction. Phrases whose
    /// hash is already present are skipped rather than duplicated.
    pub async fn insert_phrases(
        &self,
        document: NewDocument,
        phrases: Vec<NewPhrase>,
    ) -> Result<InsertStats> {
        let stats = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction()?;
                let now = Utc::now().to_rfc3339();
                let total = phrases.len();

                let document_id = generate_id();
                tx.execute(
                    "INSERT INTO documents (id, source_url, content_hash, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?4)",
                    params![document_id, document.source_url, document.content_hash, now],
                )?;

                let mut inserted = 0usize;
                {
                    let mut stmt = tx.prepare(
                        "INSERT INTO phrases (id, author, phrase, phrase_hash, language, document_id, created_at, updated_at)
                         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)
                         ON CONFLICT(phrase_hash) DO NOTHING",
                    )?;
                    for phrase in &phrases {
                        inserted += stmt.execute(params![
                            generate_id(),
                            phrase.author,
                            phrase.phrase,
                            phrase.phrase_hash,
                            phrase.language.as_str(),
                            document_id,
                            now,
                        ])?;
                    }
                }
                tx.commit()?;

                Ok(InsertStats {
                    inserted,
                    skipped: total - inserted,
                })
            })
            .await?;
        Ok(stats)
    }

    /// Pull one random phrase for the given language, if any is stored.
    pub async fn random_phrase(&self, language: Language) -> Result<Option<Quote>> {
        let quote = self
            .conn
            .call(move |conn| {
                let quote = conn
                    .query_row(
                        "SELECT author, phrase FROM phrases WHERE language = ?1 ORDER BY RANDOM() LIMIT 1",
                        params![language.as_str()],
                        |row| {
                            Ok(Quote {
                                author: row.get(0)?,
                                phrase: row.get(1)?,
                            })
                        },
                    )
                    .optional()?;
                Ok(quote)
            })
            .await?;
        Ok(quote)
    }
}
