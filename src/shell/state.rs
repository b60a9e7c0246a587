use crate::modules::products::adapters::table_service::TableProductService;
use crate::modules::products::ports::ProductService;
use crate::modules::reviews::adapters::table_service::TableReviewService;
use crate::modules::reviews::ports::ReviewService;
use crate::shared::infrastructure::table_store::in_memory::InMemoryTableStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductService>,
    pub reviews: Arc<dyn ReviewService>,
}

impl AppState {
    pub fn new(products: Arc<dyn ProductService>, reviews: Arc<dyn ReviewService>) -> Self {
        Self { products, reviews }
    }

    /// Fully wired state over in-memory tables, one table per concern the
    /// way the storage layout expects (products and reviews never share a
    /// partition).
    pub fn in_memory() -> Self {
        let products_table = Arc::new(InMemoryTableStore::new());
        let reviews_table = Arc::new(InMemoryTableStore::new());
        let products = Arc::new(TableProductService::new(products_table));
        let reviews = Arc::new(TableReviewService::new(reviews_table, products.clone()));
        Self::new(products, reviews)
    }
}
