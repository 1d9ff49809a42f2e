//! Exact tokenization via HuggingFace `tokenizers`.
//!
//! Loads a serialized `tokenizer.json` for the target model and measures
//! text in that model's actual vocabulary. Heavyweight, so it lives behind
//! the `hf` feature; the heuristic adapter is the default.

use veridic_core::error::TokenizerError;
use veridic_core::tokenizer::Tokenizer;

/// Tokenizer adapter backed by a HuggingFace tokenizer file.
pub struct HfTokenizer {
    name: String,
    inner: tokenizers::Tokenizer,
}

impl HfTokenizer {
    /// Load a tokenizer from a serialized `tokenizer.json`.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, TokenizerError> {
        let path = path.as_ref();
        let inner = tokenizers::Tokenizer::from_file(path)
            .map_err(|e| TokenizerError::NotAvailable(format!("{}: {e}", path.display())))?;
        Ok(Self {
            name: format!("hf:{}", path.display()),
            inner,
        })
    }

    fn encode(&self, text: &str) -> Result<tokenizers::Encoding, TokenizerError> {
        self.inner
            .encode(text, false)
            .map_err(|e| TokenizerError::Failed(e.to_string()))
    }
}

impl Tokenizer for HfTokenizer {
    fn name(&self) -> &str {
        &self.name
    }

    fn count(&self, text: &str) -> Result<usize, TokenizerError> {
        if text.is_empty() {
            return Ok(0);
        }
        Ok(self.encode(text)?.get_ids().len())
    }

    fn truncate(&self, text: &str, max_tokens: usize) -> Result<String, TokenizerError> {
        let encoding = self.encode(text)?;
        let ids = encoding.get_ids();
        if ids.len() <= max_tokens {
            return Ok(text.to_string());
        }
        self.inner
            .decode(&ids[..max_tokens], true)
            .map_err(|e| TokenizerError::Failed(e.to_string()))
    }
}
