use std::fmt;

use crate::domain::product::errors::DescriptionError;
use crate::domain::product::errors::ProductIdError;
use crate::domain::product::errors::ProductNameError;
use crate::domain::product::errors::QuantityError;
use crate::domain::record::Record;

/// Product entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub description: Description,
    pub price: Quantity,
    pub stock: Quantity,
}

impl Record for Product {
    type Draft = ProductDraft;
    type Key = ProductKey;

    const ENTITY: &'static str = "product";

    fn record_id(&self) -> i64 {
        self.id.0
    }
}

/// Product unique identifier type, generated by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub i64);

impl ProductId {
    /// Parse a product ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not an integer
    pub fn from_string(s: &str) -> Result<Self, ProductIdError> {
        s.parse::<i64>()
            .map(ProductId)
            .map_err(|e| ProductIdError::InvalidFormat(format!("{s}: {e}")))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductName(String);

impl ProductName {
    const MAX_LENGTH: usize = 100;

    pub fn new(name: String) -> Result<Self, ProductNameError> {
        let length = name.chars().count();
        if name.trim().is_empty() {
            Err(ProductNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(ProductNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    const MAX_LENGTH: usize = 250;

    pub fn new(description: String) -> Result<Self, DescriptionError> {
        let length = description.chars().count();
        if description.trim().is_empty() {
            Err(DescriptionError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(DescriptionError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(description))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Non-negative whole amount, used for both price and stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(i64);

impl Quantity {
    /// # Arguments
    /// * `field` - Field name reported on failure ("price", "stock")
    /// * `value` - Raw amount
    ///
    /// # Errors
    /// * `Negative` - Value below zero
    pub fn new(field: &'static str, value: i64) -> Result<Self, QuantityError> {
        if value < 0 {
            Err(QuantityError::Negative {
                field,
                actual: value,
            })
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Columns a product can be looked up by
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductKey {
    Id(ProductId),
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductKey::Id(id) => write!(f, "id = {id}"),
        }
    }
}

/// Writable product fields, used both to create and to fully replace a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: ProductName,
    pub description: Description,
    pub price: Quantity,
    pub stock: Quantity,
}

impl ProductDraft {
    pub fn new(
        name: ProductName,
        description: Description,
        price: Quantity,
        stock: Quantity,
    ) -> Self {
        Self {
            name,
            description,
            price,
            stock,
        }
    }
}
