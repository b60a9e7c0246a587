// Table-backed review store.
//
// Row layout
// - One row per review in the reviews table: partition key = product name,
//   row key = descending-time order key (see core::order_key). A forward
//   partition scan therefore yields reviews newest first.
//
// Concurrency
// - Submission is read-then-compare-then-write, not a compare-and-swap: two
//   writers that both pass the freshness check can both land. The check only
//   protects a client that fetched-then-wrote against staleness it could
//   have known about. The backing store's conditional write is keyed on a
//   single row, so "does a newer sibling exist" cannot be expressed there.

use crate::modules::reviews::core::order_key;
use crate::modules::reviews::core::review::{self, Review};
use crate::modules::reviews::ports::{ProductExists, ReviewService, SubmitReviewError};
use crate::shared::infrastructure::table_store::{TableRow, TableStore, TableStoreError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize)]
struct ReviewFields {
    content: String,
    created_at_utc: DateTime<Utc>,
}

pub struct TableReviewService<S: TableStore> {
    store: Arc<S>,
    products: Arc<dyn ProductExists>,
    clock: fn() -> DateTime<Utc>,
}

impl<S: TableStore> TableReviewService<S> {
    pub fn new(store: Arc<S>, products: Arc<dyn ProductExists>) -> Self {
        Self {
            store,
            products,
            clock: Utc::now,
        }
    }

    #[cfg(test)]
    fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    fn from_row(row: TableRow) -> Result<Review, TableStoreError> {
        let fields: ReviewFields = serde_json::from_value(row.fields)
            .map_err(|err| TableStoreError::Backend(err.to_string()))?;
        Ok(Review {
            product_name: row.partition_key,
            content: fields.content,
            created_at_utc: fields.created_at_utc,
        })
    }
}

#[async_trait]
impl<S: TableStore> ReviewService for TableReviewService<S> {
    async fn latest_reviews(
        &self,
        product_name: &str,
        limit: usize,
    ) -> Result<Vec<Review>, TableStoreError> {
        self.store
            .scan_partition(product_name, limit)
            .await?
            .into_iter()
            .map(Self::from_row)
            .collect()
    }

    async fn submit_review(
        &self,
        product_name: &str,
        content: &str,
        latest_fetched: DateTime<Utc>,
    ) -> Result<(), SubmitReviewError> {
        if !review::content_is_valid(content) {
            return Err(SubmitReviewError::InvalidContent);
        }

        if !self.products.exists(product_name).await? {
            return Err(SubmitReviewError::ProductNotFound {
                product_name: product_name.to_string(),
            });
        }

        let current_latest = self
            .latest_reviews(product_name, 1)
            .await?
            .first()
            .map(|r| r.created_at_utc)
            .unwrap_or_else(order_key::min_timestamp);

        if current_latest > latest_fetched {
            return Err(SubmitReviewError::OutdatedReview);
        }

        let now = (self.clock)();
        let fields = serde_json::to_value(ReviewFields {
            content: content.to_string(),
            created_at_utc: now,
        })
        .map_err(|err| TableStoreError::Backend(err.to_string()))?;

        let row = TableRow {
            partition_key: product_name.to_string(),
            row_key: order_key::encode(now),
            fields,
        };
        match self.store.insert(row).await {
            Ok(()) => Ok(()),
            // Another review landed on the same microsecond. Never overwrite;
            // the client refetches and retries, same as any stale view.
            Err(TableStoreError::RowAlreadyExists { .. }) => {
                Err(SubmitReviewError::OutdatedReview)
            }
            Err(err) => Err(err.into()),
        }
    }
}
