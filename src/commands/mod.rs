//! CLI command implementations.

mod add_phrases;
mod show;

pub use add_phrases::{cmd_add_phrases, IngestOutcome};
pub use show::cmd_show;
