//! Error types for the veridic domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each collaborator has its own error variant; collaborator failures are
//! passed through unwrapped so the caller can diagnose them at the source.

use thiserror::Error;

/// The top-level error type for all veridic operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Provider errors ---
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    // --- Store errors ---
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    // --- Tokenizer errors ---
    #[error("Tokenizer error: {0}")]
    Tokenizer(#[from] TokenizerError),

    /// The model response contained neither verdict marker.
    /// Surfaced to the caller, never retried and never guessed.
    #[error("Malformed verdict: response contains no verdict marker")]
    MalformedVerdict {
        /// The raw response text, kept for diagnosis.
        response: String,
    },

    /// The cancellation signal was observed at a checkpoint.
    #[error("Evaluation cancelled")]
    Cancelled,

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Collaborator errors ---

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[derive(Debug, Error)]
pub enum TokenizerError {
    #[error("Tokenization failed: {0}")]
    Failed(String),

    #[error("Tokenizer not available: {0}")]
    NotAvailable(String),
}
