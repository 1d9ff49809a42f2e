//! Character-based token estimation.
//!
//! Uses a ~4 characters per token heuristic, accurate within ~10% for BPE
//! tokenizers (GPT-3.5, GPT-4, Claude) on English text. Good enough for
//! budgeting, and deterministic, which is what the fingerprint needs.

use veridic_core::error::TokenizerError;
use veridic_core::tokenizer::Tokenizer;

/// Characters per token assumed by the heuristic.
const CHARS_PER_TOKEN: usize = 4;

/// The default tokenizer adapter: 1 token ≈ 4 characters, rounds up.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTokenizer;

impl HeuristicTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for HeuristicTokenizer {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn count(&self, text: &str) -> Result<usize, TokenizerError> {
        if text.is_empty() {
            return Ok(0);
        }
        Ok((text.len() + CHARS_PER_TOKEN - 1) / CHARS_PER_TOKEN)
    }

    fn truncate(&self, text: &str, max_tokens: usize) -> Result<String, TokenizerError> {
        let max_bytes = max_tokens.saturating_mul(CHARS_PER_TOKEN);
        if text.len() <= max_bytes {
            return Ok(text.to_string());
        }

        // Cut at the last char boundary at or before the byte limit.
        let mut end = max_bytes;
        while end > 0 && !text.is_char_boundary(end) {
            end -= 1;
        }
        Ok(text[..end].to_string())
    }
}
