use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::PRODUCT_NOT_FOUND;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_product(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let product_id =
        ProductId::from_string(&id).map_err(|_| ApiError::bad_request(PRODUCT_NOT_FOUND))?;

    tracing::debug!(caller_id = %caller.user_id, product_id = %product_id, "Deleting product");

    state.product_service.delete(&product_id).await?;

    Ok(ApiSuccess::message(
        StatusCode::OK,
        "successfully deleted product",
    ))
}
