//! Tokenizer adapters for veridic.
//!
//! The default adapter is a character-based heuristic; an exact adapter
//! backed by HuggingFace `tokenizers` is available behind the `hf` feature.

pub mod heuristic;

#[cfg(feature = "hf")]
pub mod hf;

pub use heuristic::HeuristicTokenizer;

#[cfg(feature = "hf")]
pub use hf::HfTokenizer;
