// In memory implementation of the TableStore port.
//
// Purpose
// - Support service and handler tests and local development without a
//   storage backend.
//
// Responsibilities
// - Keep rows in a BTreeMap so iteration order is the store's native key
//   order; the descending-timestamp row keys rely on that.
// - Enforce insert-never-overwrites.

use crate::shared::infrastructure::table_store::{TableRow, TableStore, TableStoreError};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTableStore {
    rows: RwLock<BTreeMap<(String, String), serde_json::Value>>,
    offline: bool,
}

impl InMemoryTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the store into a failing state so tests can exercise the
    /// backend-fault paths.
    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn ensure_online(&self) -> Result<(), TableStoreError> {
        if self.offline {
            return Err(TableStoreError::Backend("table store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TableStore for InMemoryTableStore {
    async fn get(
        &self,
        partition_key: &str,
        row_key: &str,
    ) -> Result<Option<TableRow>, TableStoreError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        Ok(guard
            .get(&(partition_key.to_string(), row_key.to_string()))
            .map(|fields| TableRow {
                partition_key: partition_key.to_string(),
                row_key: row_key.to_string(),
                fields: fields.clone(),
            }))
    }

    async fn insert(&self, row: TableRow) -> Result<(), TableStoreError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let key = (row.partition_key.clone(), row.row_key.clone());
        if guard.contains_key(&key) {
            return Err(TableStoreError::RowAlreadyExists {
                partition_key: row.partition_key,
                row_key: row.row_key,
            });
        }
        guard.insert(key, row.fields);
        Ok(())
    }

    async fn update(&self, row: TableRow) -> Result<(), TableStoreError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let key = (row.partition_key.clone(), row.row_key.clone());
        match guard.get_mut(&key) {
            Some(fields) => {
                *fields = row.fields;
                Ok(())
            }
            None => Err(TableStoreError::RowNotFound {
                partition_key: row.partition_key,
                row_key: row.row_key,
            }),
        }
    }

    async fn delete(&self, partition_key: &str, row_key: &str) -> Result<bool, TableStoreError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        Ok(guard
            .remove(&(partition_key.to_string(), row_key.to_string()))
            .is_some())
    }

    async fn scan_partition(
        &self,
        partition_key: &str,
        limit: usize,
    ) -> Result<Vec<TableRow>, TableStoreError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        Ok(guard
            .range((partition_key.to_string(), String::new())..)
            .take_while(|((partition, _), _)| partition == partition_key)
            .take(limit)
            .map(|((partition, row), fields)| TableRow {
                partition_key: partition.clone(),
                row_key: row.clone(),
                fields: fields.clone(),
            })
            .collect())
    }

    async fn scan_row_key(&self, row_key: &str) -> Result<Vec<TableRow>, TableStoreError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        Ok(guard
            .iter()
            .filter(|((_, row), _)| row == row_key)
            .map(|((partition, row), fields)| TableRow {
                partition_key: partition.clone(),
                row_key: row.clone(),
                fields: fields.clone(),
            })
            .collect())
    }
}
