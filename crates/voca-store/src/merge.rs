use voca_types::VocabEntry;

use crate::{StoreError, TableConnector};

/// Read-modify-write layer over the backing table.
///
/// Every mutation re-reads the current table immediately before writing
/// instead of reusing an earlier session snapshot, which narrows (but
/// does not close) the window for lost updates from concurrent sessions.
/// Rows are addressed by render-time positional index; there is no
/// stable row key and no version check.
pub struct VocabStore<C: TableConnector> {
    connector: C,
}

impl<C: TableConnector> VocabStore<C> {
    pub fn new(connector: C) -> Self {
        Self { connector }
    }

    pub async fn read(&self) -> Result<Vec<VocabEntry>, StoreError> {
        self.connector.read_all().await
    }

    /// Headword column of the current table
    pub async fn headwords(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .read()
            .await?
            .into_iter()
            .map(|entry| entry.headword)
            .collect())
    }

    /// Append one row; returns the table as written.
    ///
    /// Duplicate checking is the caller's responsibility: appending the
    /// same headword twice produces two rows.
    pub async fn append(&self, entry: VocabEntry) -> Result<Vec<VocabEntry>, StoreError> {
        let mut rows = self.connector.read_all().await?;
        rows.push(entry);
        self.connector.write_all(&rows).await?;
        Ok(rows)
    }

    /// Replace the row at a positional index
    pub async fn replace_row(
        &self,
        index: usize,
        entry: VocabEntry,
    ) -> Result<Vec<VocabEntry>, StoreError> {
        let mut rows = self.connector.read_all().await?;
        let len = rows.len();
        let slot = rows
            .get_mut(index)
            .ok_or(StoreError::RowOutOfRange { index, len })?;
        *slot = entry;
        self.connector.write_all(&rows).await?;
        Ok(rows)
    }

    /// Remove the row at a positional index
    pub async fn delete_row(&self, index: usize) -> Result<Vec<VocabEntry>, StoreError> {
        let mut rows = self.connector.read_all().await?;
        if index >= rows.len() {
            return Err(StoreError::RowOutOfRange {
                index,
                len: rows.len(),
            });
        }
        rows.remove(index);
        self.connector.write_all(&rows).await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::MemoryConnector;

    fn entry(headword: &str) -> VocabEntry {
        VocabEntry::new(headword, "뜻", "예문")
    }

    /// Accepts reads, rejects every write
    struct ReadOnlyConnector {
        inner: MemoryConnector,
    }

    #[async_trait::async_trait]
    impl TableConnector for ReadOnlyConnector {
        async fn read_all(&self) -> Result<Vec<VocabEntry>, StoreError> {
            self.inner.read_all().await
        }

        async fn write_all(&self, _rows: &[VocabEntry]) -> Result<(), StoreError> {
            Err(StoreError::Api("write rejected".to_string()))
        }
    }

    #[tokio::test]
    async fn append_preserves_order() {
        let store = VocabStore::new(MemoryConnector::new());
        store.append(entry("hold")).await.unwrap();
        let rows = store.append(entry("run")).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].headword, "hold");
        assert_eq!(rows[1].headword, "run");
    }

    #[tokio::test]
    async fn append_does_not_enforce_uniqueness() {
        let store = VocabStore::new(MemoryConnector::new());
        store.append(entry("hold")).await.unwrap();
        let rows = store.append(entry("hold")).await.unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn append_picks_up_concurrent_writes() {
        let connector = Arc::new(MemoryConnector::new());
        let store = VocabStore::new(connector.clone());

        // Another session writes between our render and our save
        connector.write_all(&[entry("run")]).await.unwrap();

        let rows = store.append(entry("hold")).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].headword, "run");
        assert_eq!(rows[1].headword, "hold");
    }

    #[tokio::test]
    async fn replace_row_is_positional() {
        let connector = Arc::new(MemoryConnector::with_rows(vec![
            entry("hold"),
            entry("run"),
        ]));
        let store = VocabStore::new(connector.clone());

        let rows = store.replace_row(1, entry("walk")).await.unwrap();
        assert_eq!(rows[1].headword, "walk");
        assert_eq!(connector.read_all().await.unwrap()[1].headword, "walk");
    }

    #[tokio::test]
    async fn out_of_range_mutations_leave_the_table_unchanged() {
        let connector = Arc::new(MemoryConnector::with_rows(vec![entry("hold")]));
        let store = VocabStore::new(connector.clone());

        let err = store.replace_row(5, entry("walk")).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::RowOutOfRange { index: 5, len: 1 }
        ));

        let err = store.delete_row(1).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::RowOutOfRange { index: 1, len: 1 }
        ));

        assert_eq!(connector.read_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_row_removes_exactly_one_row() {
        let connector = Arc::new(MemoryConnector::with_rows(vec![
            entry("hold"),
            entry("run"),
            entry("walk"),
        ]));
        let store = VocabStore::new(connector.clone());

        let rows = store.delete_row(1).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].headword, "hold");
        assert_eq!(rows[1].headword, "walk");
    }

    #[tokio::test]
    async fn failed_write_surfaces_and_mutates_nothing() {
        let connector = ReadOnlyConnector {
            inner: MemoryConnector::with_rows(vec![entry("hold")]),
        };
        let store = VocabStore::new(connector);

        assert!(store.append(entry("run")).await.is_err());
        assert_eq!(store.read().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn round_trip_preserves_rows_and_columns() {
        let table = vec![
            VocabEntry::new("hold", "1. 잡다\n2. 견디다", "1. Hold my hand.\n2. Hold on."),
            VocabEntry::new("run", "달리다", "He runs fast."),
        ];
        let store = VocabStore::new(MemoryConnector::new());
        for row in &table {
            store.append(row.clone()).await.unwrap();
        }
        assert_eq!(store.read().await.unwrap(), table);
    }
}
