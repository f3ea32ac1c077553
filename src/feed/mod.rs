mod fetcher;
mod parser;

pub use fetcher::{FetchedDocument, Fetcher};
pub use parser::{parse, PhraseFormat};
