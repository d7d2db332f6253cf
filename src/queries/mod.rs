mod memory_store;
mod product_queries;

use async_trait::async_trait;

use crate::{
    error::{AppError, Result},
    models::Product,
};

pub use memory_store::MemoryProductStore;
pub use product_queries::PgProductStore;

/// Storage seam behind the product handlers. Errors from the backing store
/// are returned as-is.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn create(&self, product: &Product) -> Result<Product>;

    /// Fails with `AppError::NotFound` when no row has this id.
    async fn find_by_id(&self, id: &str) -> Result<Product>;

    async fn find_all(&self) -> Result<Vec<Product>>;

    /// Inserts the row if it is missing, otherwise overwrites its mutable
    /// columns. `id` and `created_at` of an existing row are kept.
    async fn save(&self, product: &Product) -> Result<Product>;

    /// Returns the number of rows removed. A missing id removes nothing.
    async fn delete_by_id(&self, id: &str) -> Result<u64>;

    async fn ping(&self) -> Result<()>;
}

pub(crate) fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Product with id {} not found", id))
}
