mod repository;
mod schema;

pub use repository::{InsertStats, Repository};

use chrono::Utc;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Generate a positive 63-bit row id from the current time and fresh random
/// bytes, hashed together so ids carry no recognizable structure.
pub(crate) fn generate_id() -> i64 {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();

    let mut entropy = [0u8; 8];
    rand::rng().fill_bytes(&mut entropy);

    let mut hasher = Sha256::new();
    hasher.update(nanos.to_be_bytes());
    hasher.update(entropy);
    let digest = hasher.finalize();

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    (u64::from_be_bytes(prefix) & i64::MAX as u64) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_is_non_negative() {
        for _ in 0..1000 {
            assert!(generate_id() >= 0);
        }
    }

    #[test]
    fn test_generate_id_varies() {
        assert_ne!(generate_id(), generate_id());
    }
}
