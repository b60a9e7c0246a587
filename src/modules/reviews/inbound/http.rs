use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::reviews::ports::SubmitReviewError;
use crate::shell::state::AppState;

const MAX_LIST_LIMIT: usize = 100;
const DEFAULT_LIST_LIMIT: usize = 10;

#[derive(Deserialize)]
pub struct ListReviewsParams {
    pub limit: Option<usize>,
}

pub async fn list(
    State(state): State<AppState>,
    Path(product_name): Path<String>,
    Query(params): Query<ListReviewsParams>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    if !(1..=MAX_LIST_LIMIT).contains(&limit) {
        return (
            StatusCode::BAD_REQUEST,
            format!("limit must be between 1 and {MAX_LIST_LIMIT}"),
        )
            .into_response();
    }

    match state.reviews.latest_reviews(&product_name, limit).await {
        Ok(reviews) => Json(reviews).into_response(),
        Err(err) => {
            tracing::error!(error = %err, %product_name, "failed to list reviews");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred while processing your request",
            )
                .into_response()
        }
    }
}

#[derive(Deserialize)]
pub struct SubmitReviewBody {
    pub content: String,
    pub latest_fetched_review_timestamp_utc: DateTime<Utc>,
}

pub async fn submit(
    State(state): State<AppState>,
    Path(product_name): Path<String>,
    body: Result<Json<SubmitReviewBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .reviews
        .submit_review(
            &product_name,
            &body.content,
            body.latest_fetched_review_timestamp_utc,
        )
        .await
    {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err @ SubmitReviewError::InvalidContent) => {
            (StatusCode::BAD_REQUEST, err.to_string()).into_response()
        }
        Err(err @ SubmitReviewError::ProductNotFound { .. }) => {
            (StatusCode::NOT_FOUND, err.to_string()).into_response()
        }
        Err(err @ SubmitReviewError::OutdatedReview) => {
            (StatusCode::CONFLICT, err.to_string()).into_response()
        }
        Err(SubmitReviewError::Store(err)) => {
            tracing::error!(error = %err, %product_name, "failed to submit review");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred while processing your request",
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod reviews_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::products::adapters::table_service::TableProductService;
    use crate::modules::products::core::product::Product;
    use crate::modules::products::ports::ProductService;
    use crate::shell::state::AppState;
    use crate::shared::infrastructure::table_store::in_memory::InMemoryTableStore;

    use super::{list, submit};

    fn make_test_state() -> AppState {
        AppState::in_memory()
    }

    fn make_offline_store_state() -> AppState {
        let mut reviews_table = InMemoryTableStore::new();
        reviews_table.toggle_offline();
        let products = Arc::new(TableProductService::new(Arc::new(
            InMemoryTableStore::new(),
        )));
        AppState::new(
            products.clone(),
            Arc::new(crate::modules::reviews::adapters::table_service::TableReviewService::new(
                Arc::new(reviews_table),
                products,
            )),
        )
    }

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/api/reviews/{product_name}", get(list).post(submit))
            .with_state(state)
    }

    async fn add_product(state: &AppState, name: &str) {
        state
            .products
            .add_product(Product::new(name, "test product"))
            .await
            .expect("expected add_product to succeed");
    }

    fn submit_body(content: &str) -> String {
        format!(
            r#"{{"content":"{content}","latest_fetched_review_timestamp_utc":"1970-01-01T00:00:00Z"}}"#
        )
    }

    #[tokio::test]
    async fn it_should_return_200_with_empty_list_when_no_reviews_exist() {
        let response = app(make_test_state())
            .oneshot(
                Request::get("/api/reviews/router?limit=5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn it_should_return_400_when_the_limit_is_out_of_range() {
        for query in ["limit=0", "limit=101"] {
            let response = app(make_test_state())
                .oneshot(
                    Request::get(format!("/api/reviews/router?{query}"))
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn it_should_return_ordered_reviews_capped_at_the_limit() {
        let state = make_test_state();
        add_product(&state, "laptop").await;

        let router = app(state.clone());
        for content in ["Review 1", "Review 2", "Review 3"] {
            let latest = state
                .reviews
                .latest_reviews("laptop", 1)
                .await
                .unwrap()
                .first()
                .map(|r| r.created_at_utc.to_rfc3339())
                .unwrap_or_else(|| "1970-01-01T00:00:00Z".to_string());
            let body = format!(
                r#"{{"content":"{content}","latest_fetched_review_timestamp_utc":"{latest}"}}"#
            );
            let response = router
                .clone()
                .oneshot(
                    Request::post("/api/reviews/laptop")
                        .header("content-type", "application/json")
                        .body(Body::from(body))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = router
            .oneshot(
                Request::get("/api/reviews/laptop?limit=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 2);
        assert_eq!(json[0]["content"], "Review 3");
        assert_eq!(json[1]["content"], "Review 2");
    }

    #[tokio::test]
    async fn it_should_return_200_on_a_valid_submit() {
        let state = make_test_state();
        add_product(&state, "router").await;

        let response = app(state.clone())
            .oneshot(
                Request::post("/api/reviews/router")
                    .header("content-type", "application/json")
                    .body(Body::from(submit_body("Great product!")))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let stored = state.reviews.latest_reviews("router", 10).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].content, "Great product!");
    }

    #[tokio::test]
    async fn it_should_return_404_for_a_missing_product() {
        let response = app(make_test_state())
            .oneshot(
                Request::post("/api/reviews/ghost")
                    .header("content-type", "application/json")
                    .body(Body::from(submit_body("Invalid review")))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains("does not exist"));
    }

    #[tokio::test]
    async fn it_should_return_409_with_a_refresh_hint_on_a_stale_submit() {
        let state = make_test_state();
        add_product(&state, "phone").await;
        let router = app(state.clone());

        let first = router
            .clone()
            .oneshot(
                Request::post("/api/reviews/phone")
                    .header("content-type", "application/json")
                    .body(Body::from(submit_body("Existing review")))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        // Same stale timestamp again: a newer review now exists.
        let response = router
            .oneshot(
                Request::post("/api/reviews/phone")
                    .header("content-type", "application/json")
                    .body(Body::from(submit_body("New review")))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.to_lowercase().contains("refresh"));
    }

    #[tokio::test]
    async fn it_should_return_400_on_invalid_content() {
        let state = make_test_state();
        add_product(&state, "keyboard").await;

        let response = app(state.clone())
            .oneshot(
                Request::post("/api/reviews/keyboard")
                    .header("content-type", "application/json")
                    .body(Body::from(submit_body("")))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.reviews.latest_reviews("keyboard", 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn it_should_return_422_on_malformed_json() {
        let response = app(make_test_state())
            .oneshot(
                Request::post("/api/reviews/router")
                    .header("content-type", "application/json")
                    .body(Body::from("not-json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_store_is_offline() {
        let state = make_offline_store_state();
        add_product(&state, "monitor").await;

        let response = app(state)
            .oneshot(
                Request::post("/api/reviews/monitor")
                    .header("content-type", "application/json")
                    .body(Body::from(submit_body("Perfect for photo editing.")))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
