// Ports define what the reviews module needs from the outside world, without
// implementing it.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the
//   adapters layer; the products module supplies the ProductExists side.

use crate::modules::reviews::core::review::Review;
use crate::shared::infrastructure::table_store::TableStoreError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitReviewError {
    #[error("review content must be between 1 and 500 characters")]
    InvalidContent,

    #[error("product '{product_name}' does not exist")]
    ProductNotFound { product_name: String },

    #[error("new reviews have been added since you last fetched. Refresh and retry.")]
    OutdatedReview,

    #[error(transparent)]
    Store(#[from] TableStoreError),
}

/// The existence predicate the submit path consults before writing.
/// Product lifecycle itself belongs to the products module.
#[async_trait]
pub trait ProductExists: Send + Sync {
    async fn exists(&self, product_name: &str) -> Result<bool, TableStoreError>;
}

#[async_trait]
pub trait ReviewService: Send + Sync {
    /// The most recent reviews of a product, newest first, at most `limit`.
    /// A product without reviews yields an empty list, not an error.
    async fn latest_reviews(
        &self,
        product_name: &str,
        limit: usize,
    ) -> Result<Vec<Review>, TableStoreError>;

    /// Writes a review, provided `latest_fetched` is not older than the
    /// newest review currently stored. A stale value means the client acted
    /// on an out-of-date review list and gets `OutdatedReview` back.
    async fn submit_review(
        &self,
        product_name: &str,
        content: &str,
        latest_fetched: DateTime<Utc>,
    ) -> Result<(), SubmitReviewError>;
}
