//! Few-shot example packing.
//!
//! Candidate pool, in priority order: records retrieved from the store,
//! then caller-supplied examples. An empty pool falls back to the built-in
//! default table (guidance only, never cached). Selection is greedy
//! first-fit in pool order: the first example that would overflow the
//! budget stops the scan entirely. Later, individually cheaper examples are
//! not considered — O(n) and deterministic given pool order, a deliberate
//! simplicity/latency trade-off over optimal bin-packing.

use veridic_core::error::TokenizerError;
use veridic_core::example::{Example, StoredRecord};
use veridic_core::tokenizer::Tokenizer;

/// The outcome of packing: the selected prefix of the pool and whether the
/// pool was the built-in default set.
#[derive(Debug, Clone)]
pub struct PackedExamples {
    /// Selected examples, in pool order.
    pub examples: Vec<Example>,
    /// True when no retrieved or caller examples existed and the built-in
    /// fallback pool was used instead.
    pub used_default: bool,
    /// Tokens consumed by the selected examples.
    pub tokens: usize,
}

impl PackedExamples {
    /// An empty packing (no pool, or nothing fit).
    pub fn empty(used_default: bool) -> Self {
        Self {
            examples: Vec::new(),
            used_default,
            tokens: 0,
        }
    }
}

/// Token cost of one example: serialized input plus explanation.
fn example_cost(example: &Example, tokenizer: &dyn Tokenizer) -> Result<usize, TokenizerError> {
    let input_tokens = tokenizer.count(&example.input_text())?;
    let explanation_tokens = match &example.explanation {
        Some(text) => tokenizer.count(text)?,
        None => 0,
    };
    Ok(input_tokens + explanation_tokens)
}

/// Pack examples into `budget` tokens.
pub fn pack(
    retrieved: &[StoredRecord],
    caller: &[Example],
    defaults: &[Example],
    tokenizer: &dyn Tokenizer,
    budget: usize,
) -> Result<PackedExamples, TokenizerError> {
    let mut pool: Vec<Example> = retrieved.iter().map(StoredRecord::to_example).collect();
    pool.extend(caller.iter().cloned());

    let used_default = pool.is_empty();
    if used_default {
        pool = defaults.to_vec();
    }

    let mut selected = Vec::new();
    let mut used = 0usize;
    for example in pool {
        let cost = example_cost(&example, tokenizer)?;
        if used + cost > budget {
            // First-fit-in-order: the first overflow ends the scan.
            break;
        }
        used += cost;
        selected.push(example);
    }

    Ok(PackedExamples {
        examples: selected,
        used_default,
        tokens: used,
    })
}
