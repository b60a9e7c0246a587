use axum::{Router, routing::get};

use crate::modules::products::inbound::http as products_http;
use crate::modules::reviews::inbound::http as reviews_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/products",
            get(products_http::list).post(products_http::create),
        )
        .route(
            "/api/products/{product_name}",
            get(products_http::get_one)
                .put(products_http::update)
                .delete(products_http::remove),
        )
        .route(
            "/api/reviews/{product_name}",
            get(reviews_http::list).post(reviews_http::submit),
        )
        .with_state(state)
}
