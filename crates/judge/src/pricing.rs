//! Built-in pricing for common models, used to stamp cost metadata onto
//! stored records. Prices are USD per 1 million tokens; unknown models
//! simply get no cost estimate.

use serde::{Deserialize, Serialize};

/// Per-million-token pricing for a model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModelPricing {
    /// Price per 1M input tokens in USD.
    pub input_per_m: f64,
    /// Price per 1M output tokens in USD.
    pub output_per_m: f64,
}

impl ModelPricing {
    /// Compute cost for the given token counts.
    pub fn cost(&self, input_tokens: u32, output_tokens: u32) -> f64 {
        (input_tokens as f64 * self.input_per_m + output_tokens as f64 * self.output_per_m)
            / 1_000_000.0
    }
}

/// Look up built-in pricing for a model id.
pub fn lookup(model: &str) -> Option<ModelPricing> {
    let (input_per_m, output_per_m) = match model {
        "anthropic/claude-sonnet-4" => (3.0, 15.0),
        "anthropic/claude-opus-4" => (15.0, 75.0),
        "anthropic/claude-3.5-sonnet" => (3.0, 15.0),
        "anthropic/claude-3.5-haiku" => (0.8, 4.0),
        "openai/gpt-4o" => (2.5, 10.0),
        "openai/gpt-4o-mini" => (0.15, 0.6),
        "google/gemini-2.0-flash" => (0.1, 0.4),
        "deepseek/deepseek-v3" => (0.27, 1.1),
        _ => return None,
    };
    Some(ModelPricing {
        input_per_m,
        output_per_m,
    })
}
