use axum::extract::State;

use super::ApiCollection;
use super::ApiError;
use super::ProductData;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<ApiCollection<ProductData>, ApiError> {
    let products = state.product_service.get_all().await?;

    Ok(ApiCollection::new(
        "successfully retrieved products",
        products.iter().map(ProductData::from).collect(),
    ))
}
