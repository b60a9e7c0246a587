use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::products::core::product::Product;
use crate::modules::products::ports::AddProductError;
use crate::shell::state::AppState;

const INTERNAL_ERROR_BODY: &str = "An error occurred while processing your request";

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    match state.products.products().await {
        Ok(products) => Json(products).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to list products");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
        }
    }
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(product_name): Path<String>,
) -> impl IntoResponse {
    match state.products.product(&product_name).await {
        Ok(Some(product)) => Json(product).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => {
            tracing::error!(error = %err, %product_name, "failed to fetch product");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
        }
    }
}

#[derive(Deserialize)]
pub struct CreateProductBody {
    pub name: String,
    pub description: String,
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateProductBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    if body.name.is_empty() {
        return (StatusCode::BAD_REQUEST, "product name must not be empty").into_response();
    }

    match state
        .products
        .add_product(Product::new(body.name, body.description))
        .await
    {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err @ AddProductError::AlreadyExists { .. }) => {
            (StatusCode::CONFLICT, err.to_string()).into_response()
        }
        Err(AddProductError::Store(err)) => {
            tracing::error!(error = %err, "failed to create product");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
        }
    }
}

#[derive(Deserialize)]
pub struct UpdateProductBody {
    pub description: String,
}

pub async fn update(
    State(state): State<AppState>,
    Path(product_name): Path<String>,
    body: Result<Json<UpdateProductBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .products
        .update_description(&product_name, &body.description)
        .await
    {
        Ok(true) => StatusCode::OK.into_response(),
        Ok(false) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => {
            tracing::error!(error = %err, %product_name, "failed to update product");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
        }
    }
}

pub async fn remove(
    State(state): State<AppState>,
    Path(product_name): Path<String>,
) -> impl IntoResponse {
    match state.products.delete_product(&product_name).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => {
            tracing::error!(error = %err, %product_name, "failed to delete product");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
        }
    }
}
