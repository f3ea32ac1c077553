use serde::{Deserialize, Serialize};

/// A single motivational quote, either embedded in the binary or read back
/// from the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub author: String,
    pub phrase: String,
}
