use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with every rejection (bad syntax, missing or mistyped
/// fields, wrong content type) reported as `AppError::BadRequest`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ValidJson<T>(pub T);
