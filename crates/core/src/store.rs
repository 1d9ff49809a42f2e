//! Example store trait — persistence of prior judgments.
//!
//! The store keeps (input, condition, verdict, explanation, metadata)
//! records keyed by task identity. Retrieval order matters: it defines the
//! priority in which records are packed into the prompt.

use crate::error::StoreError;
use crate::example::StoredRecord;
use async_trait::async_trait;

/// The example store capability.
///
/// Implementations: in-memory (testing/ephemeral), noop (caching off).
/// Persistent engines live outside this workspace behind the same trait.
#[async_trait]
pub trait ExampleStore: Send + Sync {
    /// The store name (e.g., "in_memory", "noop").
    fn name(&self) -> &str;

    /// Fetch prior records for a task, most relevant first. The order
    /// returned here is the packing priority.
    async fn get_examples(
        &self,
        task_type: &str,
        task_id: &str,
        truncated_input: &str,
    ) -> std::result::Result<Vec<StoredRecord>, StoreError>;

    /// Persist a record. Fire-and-forget semantics are acceptable; callers
    /// treat failures as best-effort.
    async fn save_example(&self, record: StoredRecord) -> std::result::Result<(), StoreError>;
}
