//! Ingest a remote quote feed into the local database.

use tracing::{debug, info};
use url::Url;

use crate::db::{InsertStats, Repository};
use crate::error::Result;
use crate::feed::{parse, Fetcher, PhraseFormat};
use crate::models::{Language, NewDocument};

/// What happened to the fetched document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    Inserted(InsertStats),
    /// The exact same bytes were ingested before; nothing was written.
    DuplicateContent,
}

pub async fn cmd_add_phrases(
    repo: &Repository,
    fetcher: &Fetcher,
    format: PhraseFormat,
    url: &Url,
    language: Language,
) -> Result<IngestOutcome> {
    info!("Fetching {}", url);
    let document = fetcher.fetch(url).await?;
    debug!("Hash of content: {}", document.content_hash);

    info!("Validating {} content", format);
    let phrases = parse(format, &document.body, language)?;

    if repo.content_exists(&document.content_hash).await? {
        return Ok(IngestOutcome::DuplicateContent);
    }

    info!("Inserting {} phrases", phrases.len());
    let stats = repo
        .insert_phrases(
            NewDocument {
                source_url: url.to_string(),
                content_hash: document.content_hash,
            },
            phrases,
        )
        .await?;

    Ok(IngestOutcome::Inserted(stats))
}
