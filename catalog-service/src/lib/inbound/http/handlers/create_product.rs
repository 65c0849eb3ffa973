use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::ProductData;
use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Description;
use crate::domain::product::models::ProductDraft;
use crate::domain::product::models::ProductName;
use crate::domain::product::models::Quantity;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_product(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let Json(body) = payload?;
    let draft = body.try_into_draft()?;

    tracing::debug!(caller_id = %caller.user_id, "Creating product");

    state
        .product_service
        .create(draft)
        .await
        .map_err(ApiError::from)
        .map(|ref product| {
            ApiSuccess::new(StatusCode::OK, "successfully created product", product.into())
        })
}

/// HTTP request body for creating or replacing a product (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductRequest {
    name: String,
    description: String,
    price: i64,
    stock: i64,
}

impl ProductRequest {
    pub fn try_into_draft(self) -> Result<ProductDraft, ProductError> {
        Ok(ProductDraft::new(
            ProductName::new(self.name)?,
            Description::new(self.description)?,
            Quantity::new("price", self.price)?,
            Quantity::new("stock", self.stock)?,
        ))
    }
}
