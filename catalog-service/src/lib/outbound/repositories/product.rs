use crate::domain::product::models::Description;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductDraft;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::ProductKey;
use crate::domain::product::models::ProductName;
use crate::domain::product::models::Quantity;
use crate::domain::record::StoreError;
use crate::outbound::repositories::store::FieldValue;
use crate::outbound::repositories::store::PgRecord;

/// Internal row type for `products` queries.
#[derive(Debug, sqlx::FromRow)]
pub struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: i64,
    stock: i64,
}

impl TryFrom<ProductRow> for Product {
    type Error = StoreError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let corrupt = |reason: String| StoreError::DataCorruption {
            entity: "product",
            reason: format!("row {id}: {reason}"),
        };

        Ok(Self {
            id: ProductId(id),
            name: ProductName::new(row.name).map_err(|e| corrupt(e.to_string()))?,
            description: Description::new(row.description).map_err(|e| corrupt(e.to_string()))?,
            price: Quantity::new("price", row.price).map_err(|e| corrupt(e.to_string()))?,
            stock: Quantity::new("stock", row.stock).map_err(|e| corrupt(e.to_string()))?,
        })
    }
}

impl PgRecord for Product {
    const TABLE: &'static str = "products";
    const COLUMNS: &'static [&'static str] = &["name", "description", "price", "stock"];

    type Row = ProductRow;

    fn key_binding(key: &ProductKey) -> (&'static str, FieldValue) {
        match key {
            ProductKey::Id(id) => ("id", FieldValue::Int(id.0)),
        }
    }

    fn draft_values(draft: &ProductDraft) -> Vec<FieldValue> {
        vec![
            FieldValue::Text(draft.name.as_str().to_string()),
            FieldValue::Text(draft.description.as_str().to_string()),
            FieldValue::Int(draft.price.value()),
            FieldValue::Int(draft.stock.value()),
        ]
    }

    fn record_values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Text(self.name.as_str().to_string()),
            FieldValue::Text(self.description.as_str().to_string()),
            FieldValue::Int(self.price.value()),
            FieldValue::Int(self.stock.value()),
        ]
    }
}
