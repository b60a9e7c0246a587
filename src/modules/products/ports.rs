// Ports for the product catalog.

use crate::modules::products::core::product::Product;
use crate::shared::infrastructure::table_store::TableStoreError;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AddProductError {
    #[error("product '{product_name}' already exists")]
    AlreadyExists { product_name: String },

    #[error(transparent)]
    Store(#[from] TableStoreError),
}

#[async_trait]
pub trait ProductService: Send + Sync {
    async fn products(&self) -> Result<Vec<Product>, TableStoreError>;

    async fn product(&self, name: &str) -> Result<Option<Product>, TableStoreError>;

    async fn add_product(&self, product: Product) -> Result<(), AddProductError>;

    /// Returns `false` when the product does not exist.
    async fn update_description(
        &self,
        name: &str,
        description: &str,
    ) -> Result<bool, TableStoreError>;

    /// Returns `false` when there was nothing to delete.
    async fn delete_product(&self, name: &str) -> Result<bool, TableStoreError>;
}
