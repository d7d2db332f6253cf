use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;
use uuid::Uuid;

use crate::{
    AppState,
    error::{AppError, Result},
    models::{Product, ProductRequest},
    utils::extractors::ValidJson,
};

pub async fn create_product(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<ProductRequest>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = state.store.create(&Product::new(payload)).await?;

    tracing::info!(product_id = %product.id, "Product created");

    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn get_all_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = state.store.find_all().await?;

    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let product = state.store.find_by_id(&id).await.map_err(|e| match e {
        AppError::NotFound(msg) => AppError::NotFound(msg),
        other => {
            tracing::warn!(product_id = %id, "Lookup failed: {}", other);
            AppError::NotFound(other.to_string())
        }
    })?;

    Ok(Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<ProductRequest>,
) -> Result<Json<Product>> {
    if Uuid::parse_str(&id).is_err() {
        return Err(AppError::BadRequest("Invalid UUID format".to_string()));
    }

    let mut product = state.store.find_by_id(&id).await?;

    product.apply(payload);

    let product = state.store.save(&product).await?;

    tracing::info!(product_id = %product.id, "Product updated");

    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let removed = state.store.delete_by_id(&id).await?;

    if removed == 0 {
        tracing::debug!(product_id = %id, "Delete matched no product");
    } else {
        tracing::info!(product_id = %id, "Product deleted");
    }

    Ok(StatusCode::NO_CONTENT)
}
