// Keyed-entity table store port.
//
// Purpose
// - Describe the storage capability the modules code against: rows addressed
//   by a (partition key, row key) pair, scanned in ascending row-key order.
//
// Boundaries
// - No concrete storage here. Adapters implement this trait; the in_memory
//   module provides the one used for tests and local development.

use async_trait::async_trait;
use thiserror::Error;

pub mod in_memory;

#[derive(Debug, Error)]
pub enum TableStoreError {
    #[error("row already exists: {partition_key}/{row_key}")]
    RowAlreadyExists {
        partition_key: String,
        row_key: String,
    },

    #[error("row not found: {partition_key}/{row_key}")]
    RowNotFound {
        partition_key: String,
        row_key: String,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

/// One stored entity. `fields` holds the serialized payload; the two keys
/// carry all ordering and grouping semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub partition_key: String,
    pub row_key: String,
    pub fields: serde_json::Value,
}

#[async_trait]
pub trait TableStore: Send + Sync {
    async fn get(
        &self,
        partition_key: &str,
        row_key: &str,
    ) -> Result<Option<TableRow>, TableStoreError>;

    /// Inserts a new row. Never overwrites: an occupied key pair fails with
    /// `RowAlreadyExists`.
    async fn insert(&self, row: TableRow) -> Result<(), TableStoreError>;

    /// Replaces the fields of an existing row, `RowNotFound` if absent.
    async fn update(&self, row: TableRow) -> Result<(), TableStoreError>;

    /// Returns `false` when there was nothing to delete.
    async fn delete(&self, partition_key: &str, row_key: &str) -> Result<bool, TableStoreError>;

    /// Rows of one partition in ascending row-key order, at most `limit`.
    async fn scan_partition(
        &self,
        partition_key: &str,
        limit: usize,
    ) -> Result<Vec<TableRow>, TableStoreError>;

    /// Rows whose row key equals `row_key`, across all partitions, in
    /// ascending partition-key order.
    async fn scan_row_key(&self, row_key: &str) -> Result<Vec<TableRow>, TableStoreError>;
}
