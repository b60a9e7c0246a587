// Development data seeder.
//
// Responsibilities
// - Create a small catalog and a few reviews through the real services so
//   local environments have something to look at.
// - Reviews go through the regular submit path: fetch the latest timestamp,
//   submit against it, oldest first per product.

use crate::modules::products::core::product::Product;
use crate::modules::products::ports::{AddProductError, ProductService};
use crate::modules::reviews::core::order_key;
use crate::modules::reviews::ports::ReviewService;
use std::sync::Arc;

const SAMPLE_PRODUCTS: &[(&str, &str)] = &[
    ("Smartphone", "Latest model smartphone"),
    ("Laptop", "High-performance laptop"),
    ("Headphones", "Noise-cancelling headphones"),
    ("Smartwatch", "Stylish and smart wearable device"),
    ("Gaming Console", "Next-gen gaming experience"),
    ("Bluetooth Speaker", "Portable and powerful sound"),
    ("4K Monitor", "Crisp and detailed display"),
    ("Keyboard", "Mechanical backlit keyboard"),
    ("Mouse", "Ergonomic wireless mouse"),
    ("Router", "High-speed Wi-Fi 6 router"),
];

// Oldest first per product; submission order is what fixes the timeline.
const SAMPLE_REVIEWS: &[(&str, &str)] = &[
    ("Smartphone", "Good but battery could be better"),
    ("Smartphone", "Battery lasts for two days!"),
    ("Smartphone", "Excellent screen resolution."),
    ("Laptop", "Gets hot under heavy load"),
    ("Laptop", "Boots up in seconds. Love it!"),
    ("Laptop", "Keyboard feels premium."),
    ("Headphones", "Perfect noise cancellation."),
    ("Smartwatch", "Tracks my workouts accurately."),
    ("Gaming Console", "Smooth frame rates on all games."),
    ("Bluetooth Speaker", "Great bass and clarity."),
    ("4K Monitor", "Perfect for photo editing."),
    ("Keyboard", "Clicky and responsive keys."),
    ("Mouse", "Feels great in the hand."),
    ("Router", "Wi-Fi coverage is excellent."),
];

pub struct DataSeeder {
    products: Arc<dyn ProductService>,
    reviews: Arc<dyn ReviewService>,
}

impl DataSeeder {
    pub fn new(products: Arc<dyn ProductService>, reviews: Arc<dyn ReviewService>) -> Self {
        Self { products, reviews }
    }

    pub async fn seed_development_data(&self) -> anyhow::Result<()> {
        self.seed_sample_products().await?;
        self.seed_sample_reviews().await?;
        Ok(())
    }

    async fn seed_sample_products(&self) -> anyhow::Result<()> {
        for (name, description) in SAMPLE_PRODUCTS {
            match self.products.add_product(Product::new(*name, *description)).await {
                Ok(()) | Err(AddProductError::AlreadyExists { .. }) => {}
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }

    async fn seed_sample_reviews(&self) -> anyhow::Result<()> {
        for (product, content) in SAMPLE_REVIEWS {
            let latest = self
                .reviews
                .latest_reviews(product, 1)
                .await?
                .first()
                .map(|r| r.created_at_utc)
                .unwrap_or_else(order_key::min_timestamp);
            self.reviews.submit_review(product, content, latest).await?;
        }
        Ok(())
    }
}
