mod document;
mod language;
mod phrase;
mod quote;

pub use document::NewDocument;
pub use language::Language;
pub use phrase::NewPhrase;
pub use quote::Quote;
