use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::create_product::ProductRequest;
use super::ApiError;
use super::ApiSuccess;
use super::ProductData;
use super::PRODUCT_NOT_FOUND;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_product(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let Json(body) = payload?;
    let draft = body.try_into_draft()?;
    let product_id =
        ProductId::from_string(&id).map_err(|_| ApiError::bad_request(PRODUCT_NOT_FOUND))?;

    tracing::debug!(caller_id = %caller.user_id, product_id = %product_id, "Updating product");

    state
        .product_service
        .update(&product_id, draft)
        .await
        .map_err(ApiError::from)
        .map(|ref product| {
            ApiSuccess::new(StatusCode::OK, "successfully updated product", product.into())
        })
}
