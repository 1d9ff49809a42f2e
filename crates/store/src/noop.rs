//! Noop store — caching and persistence disabled.

use async_trait::async_trait;
use tracing::trace;
use veridic_core::error::StoreError;
use veridic_core::example::StoredRecord;
use veridic_core::store::ExampleStore;

/// A store that remembers nothing. Every lookup misses and every write is
/// silently accepted, so the pipeline always runs end to end.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStore;

impl NoopStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ExampleStore for NoopStore {
    fn name(&self) -> &str {
        "noop"
    }

    async fn get_examples(
        &self,
        _task_type: &str,
        _task_id: &str,
        _truncated_input: &str,
    ) -> Result<Vec<StoredRecord>, StoreError> {
        Ok(Vec::new())
    }

    async fn save_example(&self, record: StoredRecord) -> Result<(), StoreError> {
        trace!(fingerprint = %record.fingerprint, "noop store discarding record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veridic_core::example::RecordMetadata;
    use veridic_core::fingerprint::Fingerprint;

    #[tokio::test]
    async fn always_empty() {
        let store = NoopStore::new();
        let record = StoredRecord::new(
            Fingerprint::from_hex("ff"),
            "boolean",
            "t1",
            "input",
            "cond",
            true,
            "why",
            RecordMetadata {
                model: "mock-model".into(),
                input_tokens: 1,
                output_tokens: 1,
                cost_usd: None,
                latency_ms: 0,
            },
        );
        store.save_example(record).await.unwrap();
        let records = store.get_examples("boolean", "t1", "input").await.unwrap();
        assert!(records.is_empty());
    }
}
