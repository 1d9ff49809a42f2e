//! Deterministic fingerprints for exact-match memoization.
//!
//! A fingerprint is a SHA-256 digest over the canonical JSON serialization
//! of (task_type, task_id, input, condition). The input and condition must
//! be the *already-truncated* text: distinct raw inputs that truncate
//! identically are the same task, so truncation precedes hashing.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// An exact-match cache key for one judgment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

/// The tuple that gets canonicalized and hashed. Field order is fixed by
/// the struct definition, which makes the serialization canonical.
#[derive(Serialize)]
struct FingerprintInput<'a> {
    task_type: &'a str,
    task_id: &'a str,
    input: &'a str,
    condition: &'a str,
}

impl Fingerprint {
    /// Compute the fingerprint for a (task, truncated input, truncated
    /// condition) tuple.
    pub fn compute(task_type: &str, task_id: &str, input: &str, condition: &str) -> Self {
        let canonical = serde_json::to_string(&FingerprintInput {
            task_type,
            task_id,
            input,
            condition,
        })
        .expect("fingerprint input serialization cannot fail");

        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    /// Wrap an existing hex digest (e.g., read back from a store).
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// The lowercase hex digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
