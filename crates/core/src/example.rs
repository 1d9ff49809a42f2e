//! Example and stored-record domain types.
//!
//! An `Example` is one illustrative (input, verdict, justification) triple
//! shown to the model as few-shot guidance. A `StoredRecord` is the
//! persisted form of a judged example plus its fingerprint and invocation
//! metadata, created on every cache miss that produced a verdict.

use crate::fingerprint::Fingerprint;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One few-shot example. Immutable once formed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Example {
    /// Arbitrary serializable input value
    pub input: serde_json::Value,

    /// The verdict for this input
    pub outcome: bool,

    /// Justification shown to the model alongside the verdict
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,

    /// Per-example condition, overriding the call's condition when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl Example {
    /// Create an example with an explanation.
    pub fn new(
        input: impl Into<serde_json::Value>,
        outcome: bool,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            input: input.into(),
            outcome,
            explanation: Some(explanation.into()),
            condition: None,
        }
    }

    /// Attach a per-example condition.
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// The input rendered for prompts and token counting: strings are used
    /// verbatim, everything else is serialized as JSON.
    pub fn input_text(&self) -> String {
        render_input(&self.input)
    }
}

/// Render an input value as prompt text.
pub fn render_input(input: &serde_json::Value) -> String {
    match input {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Invocation metadata captured alongside a fresh verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordMetadata {
    /// Which model produced the verdict
    pub model: String,

    /// Prompt tokens consumed
    pub input_tokens: u32,

    /// Completion tokens produced
    pub output_tokens: u32,

    /// Estimated cost in USD, when the model's pricing is known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_usd: Option<f64>,

    /// Wall-clock latency of the model call in milliseconds
    pub latency_ms: u64,
}

/// The persisted form of a judged example. Never mutated after creation;
/// its lifetime is owned by the example store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRecord {
    /// Unique record id
    pub id: String,

    /// Exact-match cache key for this judgment
    pub fingerprint: Fingerprint,

    /// Task kind constant (e.g., "boolean")
    pub task_type: String,

    /// Caller-scoped task identifier
    pub task_id: String,

    /// The truncated input text that was judged
    pub input: String,

    /// The truncated condition that was judged
    pub condition: String,

    /// The verdict
    pub outcome: bool,

    /// The model's justification
    pub explanation: String,

    /// Invocation metadata (token counts, cost, latency, model id)
    pub metadata: RecordMetadata,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

impl StoredRecord {
    /// Build a record with a fresh id and timestamp.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        fingerprint: Fingerprint,
        task_type: impl Into<String>,
        task_id: impl Into<String>,
        input: impl Into<String>,
        condition: impl Into<String>,
        outcome: bool,
        explanation: impl Into<String>,
        metadata: RecordMetadata,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            fingerprint,
            task_type: task_type.into(),
            task_id: task_id.into(),
            input: input.into(),
            condition: condition.into(),
            outcome,
            explanation: explanation.into(),
            metadata,
            created_at: Utc::now(),
        }
    }

    /// View this record as a few-shot example (store records outrank
    /// caller-supplied examples in packing priority).
    pub fn to_example(&self) -> Example {
        Example {
            input: serde_json::Value::String(self.input.clone()),
            outcome: self.outcome,
            explanation: Some(self.explanation.clone()),
            condition: Some(self.condition.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_metadata() -> RecordMetadata {
        RecordMetadata {
            model: "mock-model".into(),
            input_tokens: 120,
            output_tokens: 30,
            cost_usd: None,
            latency_ms: 250,
        }
    }

    #[test]
    fn string_input_renders_verbatim() {
        let ex = Example::new("50 Cent", true, "widely known rapper");
        assert_eq!(ex.input_text(), "50 Cent");
    }

    #[test]
    fn structured_input_renders_as_json() {
        let ex = Example::new(serde_json::json!({"name": "Ada"}), true, "ok");
        assert_eq!(ex.input_text(), r#"{"name":"Ada"}"#);
    }

    #[test]
    fn record_converts_to_example() {
        let rec = StoredRecord::new(
            Fingerprint::from_hex("abc123"),
            "boolean",
            "task-1",
            "some input",
            "Is it a thing?",
            true,
            "yes it is",
            test_metadata(),
        );
        let ex = rec.to_example();
        assert_eq!(ex.input_text(), "some input");
        assert!(ex.outcome);
        assert_eq!(ex.condition.as_deref(), Some("Is it a thing?"));
    }

    #[test]
    fn record_serialization_roundtrip() {
        let rec = StoredRecord::new(
            Fingerprint::from_hex("deadbeef"),
            "boolean",
            "task-2",
            "input",
            "condition",
            false,
            "nope",
            test_metadata(),
        );
        let json = serde_json::to_string(&rec).unwrap();
        let back: StoredRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.fingerprint, rec.fingerprint);
        assert!(!back.outcome);
        assert_eq!(back.metadata.latency_ms, 250);
    }
}
