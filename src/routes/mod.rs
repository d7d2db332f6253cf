mod health;
mod products;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/create_product", post(products::create_product))
        .route("/get_all_products", get(products::get_all_products))
        .route("/get_product/{id}", get(products::get_product))
        .route("/update_product/{id}", put(products::update_product))
        .route("/delete_product/{id}", delete(products::delete_product))
}
