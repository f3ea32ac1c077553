//! Print one random quote.

use crate::db::Repository;
use crate::error::Result;
use crate::models::Language;
use crate::quotes::random_quote;

pub async fn cmd_show(repo: &Repository, language: Language, db_preference: f64) -> Result<()> {
    let quote = random_quote(repo, language, db_preference).await?;
    println!("{} {}", quote.phrase, quote.author);
    Ok(())
}
