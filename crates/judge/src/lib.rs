//! # Veridic Judge
//!
//! The boolean-judgment pipeline: evaluate a natural-language condition
//! against an arbitrary input by delegating the judgment to a
//! text-generation model, while controlling prompt size, reusing prior
//! judgments, and producing a deterministic, explainable verdict.
//!
//! Pipeline stages, in order:
//!
//! 1. **Fingerprint cache** — exact-match memoization over the truncated
//!    (input, condition) pair, keyed by task identity
//! 2. **Budget allocation** — partition the usable token window between
//!    input, condition, and few-shot examples
//! 3. **Example packing** — greedy first-fit selection from store records,
//!    caller examples, or the built-in fallback table
//! 4. **Prompt assembly** — sentinel-delimited message sequence
//! 5. **Invocation & parsing** — stop on the END sentinel, extract a
//!    verdict and its justification from free text
//! 6. **Publishing** — best-effort persistence of the fresh verdict
//!
//! The collaborators (provider, tokenizer, store) are traits from
//! `veridic-core`; adapters live in `veridic-tokenize` and
//! `veridic-store`.

pub mod budget;
pub mod evaluator;
pub mod pack;
pub mod parse;
pub mod pricing;
pub mod prompt;

#[cfg(test)]
mod test_helpers;

pub use budget::{BudgetAllocator, TokenBudget};
pub use evaluator::{
    EvalHandle, EvaluateOptions, Evaluator, EvaluatorConfig, Judgment, TASK_TYPE_BOOLEAN,
};
pub use pack::{PackedExamples, pack};
pub use parse::{ParsedVerdict, parse_verdict};
pub use prompt::{END_MARKER, FALSE_MARKER, TRUE_MARKER, builtin_examples};
