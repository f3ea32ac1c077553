/// A remote document about to be recorded, keyed by its content hash.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub source_url: String,
    pub content_hash: String,
}
