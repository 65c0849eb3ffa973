use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductDraft;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::ProductKey;

/// Port for product domain service operations.
#[async_trait]
pub trait ProductServicePort: Send + Sync + 'static {
    /// Retrieve every product; an empty vector when there are none.
    ///
    /// # Errors
    /// * `Store` - Store operation failed
    async fn get_all(&self) -> Result<Vec<Product>, ProductError>;

    /// Retrieve the product matching a lookup key.
    ///
    /// # Errors
    /// * `NotFound` - No product matches
    /// * `Store` - Store operation failed
    async fn get_by(&self, key: &ProductKey) -> Result<Product, ProductError>;

    /// Store a new product and return it with its generated id.
    ///
    /// # Errors
    /// * `Store` - Store operation failed
    async fn create(&self, draft: ProductDraft) -> Result<Product, ProductError>;

    /// Replace every field of an existing product.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `Store` - Store operation failed, including the row vanishing before the write
    async fn update(&self, id: &ProductId, draft: ProductDraft) -> Result<Product, ProductError>;

    /// Remove an existing product.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `Store` - Store operation failed
    async fn delete(&self, id: &ProductId) -> Result<(), ProductError>;
}
