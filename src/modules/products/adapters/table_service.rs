// Table-backed product catalog.
//
// Row layout
// - One row per product in a table of its own: partition key = product name,
//   fixed row key "METADATA". "All products" is a scan over that row key.

use crate::modules::products::core::product::Product;
use crate::modules::products::ports::{AddProductError, ProductService};
use crate::modules::reviews::ports::ProductExists;
use crate::shared::infrastructure::table_store::{TableRow, TableStore, TableStoreError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const METADATA_ROW_KEY: &str = "METADATA";

#[derive(Serialize, Deserialize)]
struct ProductFields {
    description: String,
    created_at_utc: DateTime<Utc>,
}

pub struct TableProductService<S: TableStore> {
    store: Arc<S>,
}

impl<S: TableStore> TableProductService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn to_row(product: &Product) -> Result<TableRow, TableStoreError> {
        let fields = serde_json::to_value(ProductFields {
            description: product.description.clone(),
            created_at_utc: product.created_at_utc,
        })
        .map_err(|err| TableStoreError::Backend(err.to_string()))?;
        Ok(TableRow {
            partition_key: product.name.clone(),
            row_key: METADATA_ROW_KEY.to_string(),
            fields,
        })
    }

    fn from_row(row: TableRow) -> Result<Product, TableStoreError> {
        let fields: ProductFields = serde_json::from_value(row.fields)
            .map_err(|err| TableStoreError::Backend(err.to_string()))?;
        Ok(Product {
            name: row.partition_key,
            description: fields.description,
            created_at_utc: fields.created_at_utc,
        })
    }
}

#[async_trait]
impl<S: TableStore> ProductService for TableProductService<S> {
    async fn products(&self) -> Result<Vec<Product>, TableStoreError> {
        self.store
            .scan_row_key(METADATA_ROW_KEY)
            .await?
            .into_iter()
            .map(Self::from_row)
            .collect()
    }

    async fn product(&self, name: &str) -> Result<Option<Product>, TableStoreError> {
        match self.store.get(name, METADATA_ROW_KEY).await? {
            Some(row) => Ok(Some(Self::from_row(row)?)),
            None => Ok(None),
        }
    }

    async fn add_product(&self, product: Product) -> Result<(), AddProductError> {
        let row = Self::to_row(&product)?;
        match self.store.insert(row).await {
            Ok(()) => Ok(()),
            Err(TableStoreError::RowAlreadyExists { .. }) => Err(AddProductError::AlreadyExists {
                product_name: product.name,
            }),
            Err(err) => Err(err.into()),
        }
    }

    async fn update_description(
        &self,
        name: &str,
        description: &str,
    ) -> Result<bool, TableStoreError> {
        let Some(existing) = self.product(name).await? else {
            return Ok(false);
        };
        let row = Self::to_row(&Product {
            description: description.to_string(),
            ..existing
        })?;
        match self.store.update(row).await {
            Ok(()) => Ok(true),
            Err(TableStoreError::RowNotFound { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    async fn delete_product(&self, name: &str) -> Result<bool, TableStoreError> {
        self.store.delete(name, METADATA_ROW_KEY).await
    }
}

#[async_trait]
impl<S: TableStore> ProductExists for TableProductService<S> {
    async fn exists(&self, product_name: &str) -> Result<bool, TableStoreError> {
        Ok(self
            .store
            .get(product_name, METADATA_ROW_KEY)
            .await?
            .is_some())
    }
}
