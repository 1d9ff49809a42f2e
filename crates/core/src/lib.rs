//! # Veridic Core
//!
//! Domain types, traits, and error definitions for the veridic
//! boolean-judgment pipeline. This crate has **zero framework
//! dependencies** — it defines the domain model that all other crates
//! implement against.
//!
//! ## Design Philosophy
//!
//! Every collaborator is defined as a trait here: the text-generation
//! provider, the tokenizer, and the example store. Implementations live in
//! their respective crates. This enables:
//! - Swapping implementations via configuration
//! - Easy testing with mock/stub implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod cancel;
pub mod error;
pub mod example;
pub mod fingerprint;
pub mod message;
pub mod provider;
pub mod store;
pub mod tokenizer;

// Re-export key types at crate root for ergonomics
pub use cancel::CancelToken;
pub use error::{Error, Result};
pub use example::{Example, RecordMetadata, StoredRecord};
pub use fingerprint::Fingerprint;
pub use message::{Message, Role};
pub use provider::{GenerateRequest, GenerateResponse, Provider, Usage};
pub use store::ExampleStore;
pub use tokenizer::Tokenizer;
