use thiserror::Error;

use crate::domain::record::StoreError;

/// Error for ProductId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductIdError {
    #[error("Invalid product id: {0}")]
    InvalidFormat(String),
}

/// Error for ProductName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductNameError {
    #[error("Product name is empty")]
    Empty,

    #[error("Product name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for Description validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DescriptionError {
    #[error("Description is empty")]
    Empty,

    #[error("Description too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for price and stock validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuantityError {
    #[error("{field} must not be negative, got {actual}")]
    Negative { field: &'static str, actual: i64 },
}

/// Top-level error for all product-related operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductError {
    #[error("Invalid product ID: {0}")]
    InvalidProductId(#[from] ProductIdError),

    #[error("Invalid product name: {0}")]
    InvalidName(#[from] ProductNameError),

    #[error("Invalid description: {0}")]
    InvalidDescription(#[from] DescriptionError),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(#[from] QuantityError),

    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for ProductError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { key, .. } => ProductError::NotFound(key),
            other => ProductError::Store(other),
        }
    }
}
