use std::sync::Arc;

use voca_types::VocabEntry;

mod memory;
mod merge;

pub use memory::MemoryConnector;
pub use merge::VocabStore;

/// Whole-table access to the backing row store.
///
/// No partial-row API is assumed: connectors read every row and replace
/// every row, and the merge layer builds its read-modify-write cycle on
/// top of exactly that.
#[async_trait::async_trait]
pub trait TableConnector: Send + Sync {
    /// Read every stored row in order
    async fn read_all(&self) -> Result<Vec<VocabEntry>, StoreError>;

    /// Replace the entire table
    async fn write_all(&self, rows: &[VocabEntry]) -> Result<(), StoreError>;
}

#[async_trait::async_trait]
impl<C: TableConnector + ?Sized> TableConnector for Arc<C> {
    async fn read_all(&self) -> Result<Vec<VocabEntry>, StoreError> {
        (**self).read_all().await
    }

    async fn write_all(&self, rows: &[VocabEntry]) -> Result<(), StoreError> {
        (**self).write_all(rows).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Store API error: {0}")]
    Api(String),

    #[error("Malformed store response: {0}")]
    MalformedResponse(String),

    #[error("Row index {index} out of range (table has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },
}
