//! In-memory store — useful for testing and ephemeral sessions.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use veridic_core::error::StoreError;
use veridic_core::example::StoredRecord;
use veridic_core::store::ExampleStore;

/// An in-memory store that keeps records per task in insertion order.
/// Insertion order is the packing priority returned to the pipeline.
pub struct InMemoryStore {
    records: Arc<RwLock<HashMap<(String, String), Vec<StoredRecord>>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Total records across all tasks.
    pub async fn len(&self) -> usize {
        self.records.read().await.values().map(Vec::len).sum()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExampleStore for InMemoryStore {
    fn name(&self) -> &str {
        "in_memory"
    }

    async fn get_examples(
        &self,
        task_type: &str,
        task_id: &str,
        _truncated_input: &str,
    ) -> Result<Vec<StoredRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .get(&(task_type.to_string(), task_id.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn save_example(&self, record: StoredRecord) -> Result<(), StoreError> {
        let key = (record.task_type.clone(), record.task_id.clone());
        self.records.write().await.entry(key).or_default().push(record);
        Ok(())
    }
}
