use tokio::sync::RwLock;
use voca_types::VocabEntry;

use crate::{StoreError, TableConnector};

/// In-memory table used when no remote store is configured, and by tests
#[derive(Default)]
pub struct MemoryConnector {
    rows: RwLock<Vec<VocabEntry>>,
}

impl MemoryConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<VocabEntry>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }
}

#[async_trait::async_trait]
impl TableConnector for MemoryConnector {
    async fn read_all(&self) -> Result<Vec<VocabEntry>, StoreError> {
        Ok(self.rows.read().await.clone())
    }

    async fn write_all(&self, rows: &[VocabEntry]) -> Result<(), StoreError> {
        *self.rows.write().await = rows.to_vec();
        Ok(())
    }
}
