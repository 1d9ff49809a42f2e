//! Tokenizer trait — counting and truncating text in model tokens.
//!
//! Budgets are expressed in tokens of the active model's tokenization
//! scheme, so the pipeline needs a way to measure and cut text in those
//! units. Both operations must be deterministic: identical inputs always
//! produce identical outputs, since truncated text feeds the fingerprint.

use crate::error::TokenizerError;

/// Counting and prefix-preserving truncation in model tokens.
///
/// Implementations: a character heuristic (default), HuggingFace
/// `tokenizers` (exact, feature-gated).
pub trait Tokenizer: Send + Sync {
    /// A human-readable name for this tokenizer (e.g., "heuristic").
    fn name(&self) -> &str;

    /// Count the tokens in `text`.
    fn count(&self, text: &str) -> std::result::Result<usize, TokenizerError>;

    /// Truncate `text` to at most `max_tokens` tokens, keeping the prefix.
    ///
    /// Returns the text unchanged when it already fits.
    fn truncate(
        &self,
        text: &str,
        max_tokens: usize,
    ) -> std::result::Result<String, TokenizerError>;
}
