use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, Result},
    models::Product,
    queries::{ProductStore, not_found},
};

/// Process-local store keeping rows in insertion order. Used by the test
/// suite and for running the API without a database.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    rows: RwLock<Vec<Product>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn create(&self, product: &Product) -> Result<Product> {
        let mut rows = self.rows.write().await;

        if rows.iter().any(|row| row.id == product.id) {
            return Err(AppError::StorageError(format!(
                "duplicate key value violates unique constraint: id {}",
                product.id
            )));
        }

        rows.push(product.clone());
        Ok(product.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Product> {
        self.rows
            .read()
            .await
            .iter()
            .find(|row| row.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        Ok(self.rows.read().await.clone())
    }

    async fn save(&self, product: &Product) -> Result<Product> {
        let mut rows = self.rows.write().await;

        match rows.iter_mut().find(|row| row.id == product.id) {
            Some(row) => {
                row.name = product.name.clone();
                row.description = product.description.clone();
                row.price = product.price;
                row.updated_at = product.updated_at;
                Ok(row.clone())
            }
            None => {
                rows.push(product.clone());
                Ok(product.clone())
            }
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<u64> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| row.id != id);

        Ok((before - rows.len()) as u64)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::ProductRequest;

    fn product(name: &str) -> Product {
        Product::new(ProductRequest {
            name: name.to_string(),
            description: "desc".to_string(),
            price: Decimal::new(999, 2),
        })
    }

    #[tokio::test]
    async fn create_then_find() {
        let store = MemoryProductStore::new();
        let created = store.create(&product("Lamp")).await.unwrap();

        let found = store.find_by_id(&created.id).await.unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn create_rejects_duplicate_id() {
        let store = MemoryProductStore::new();
        let p = product("Lamp");
        store.create(&p).await.unwrap();

        let err = store.create(&p).await.unwrap_err();
        assert!(matches!(err, AppError::StorageError(_)));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn find_missing_is_not_found() {
        let store = MemoryProductStore::new();
        let err = store.find_by_id("missing").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order() {
        let store = MemoryProductStore::new();
        let a = store.create(&product("A")).await.unwrap();
        let b = store.create(&product("B")).await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all, vec![a, b]);
    }

    #[tokio::test]
    async fn save_keeps_created_at_of_existing_row() {
        let store = MemoryProductStore::new();
        let created = store.create(&product("Old")).await.unwrap();

        let mut changed = created.clone();
        changed.created_at = created.created_at - chrono::Duration::days(1);
        changed.apply(ProductRequest {
            name: "New".to_string(),
            description: "new desc".to_string(),
            price: Decimal::new(2999, 2),
        });

        let saved = store.save(&changed).await.unwrap();
        assert_eq!(saved.name, "New");
        assert_eq!(saved.created_at, created.created_at);
        assert_eq!(saved.updated_at, changed.updated_at);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn save_inserts_missing_row() {
        let store = MemoryProductStore::new();
        let p = product("Fresh");

        store.save(&p).await.unwrap();
        assert_eq!(store.find_by_id(&p.id).await.unwrap(), p);
    }

    #[tokio::test]
    async fn delete_reports_removed_rows() {
        let store = MemoryProductStore::new();
        let created = store.create(&product("Lamp")).await.unwrap();

        assert_eq!(store.delete_by_id(&created.id).await.unwrap(), 1);
        assert_eq!(store.delete_by_id(&created.id).await.unwrap(), 0);
        assert!(store.is_empty().await);
    }
}
