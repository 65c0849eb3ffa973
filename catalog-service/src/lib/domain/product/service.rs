use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductDraft;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::ProductKey;
use crate::domain::product::ports::ProductServicePort;
use crate::domain::record::RecordStore;

/// Domain service implementation for product operations.
pub struct ProductService<S>
where
    S: RecordStore<Product>,
{
    store: Arc<S>,
}

impl<S> ProductService<S>
where
    S: RecordStore<Product>,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> ProductServicePort for ProductService<S>
where
    S: RecordStore<Product>,
{
    async fn get_all(&self) -> Result<Vec<Product>, ProductError> {
        Ok(self.store.find_all().await?)
    }

    async fn get_by(&self, key: &ProductKey) -> Result<Product, ProductError> {
        Ok(self.store.find_one(key).await?)
    }

    async fn create(&self, draft: ProductDraft) -> Result<Product, ProductError> {
        let product = self.store.insert(draft).await?;

        tracing::info!(product_id = %product.id, "Product created");

        Ok(product)
    }

    async fn update(&self, id: &ProductId, draft: ProductDraft) -> Result<Product, ProductError> {
        let mut product = self.store.find_one(&ProductKey::Id(*id)).await?;

        product.name = draft.name;
        product.description = draft.description;
        product.price = draft.price;
        product.stock = draft.stock;

        let updated = self.store.update(product).await?;

        tracing::info!(product_id = %updated.id, "Product updated");

        Ok(updated)
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ProductError> {
        let product = self.store.find_one(&ProductKey::Id(*id)).await?;

        self.store.delete(&product).await?;

        tracing::info!(product_id = %id, "Product deleted");

        Ok(())
    }
}
