use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Product;
use crate::domain::user::models::User;
use crate::user::errors::UserError;

pub mod create_product;
pub mod delete_product;
pub mod list_products;
pub mod list_users;
pub mod login;
pub mod register;
pub mod update_product;
pub mod update_user;

pub const INVALID_REQUEST: &str = "invalid request";
pub const SERVER_ERROR: &str = "something went wrong on the server";
pub const USER_NOT_FOUND: &str = "user is not found";
pub const PRODUCT_NOT_FOUND: &str = "product is not found";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(message, Some(data))))
    }
}

impl ApiSuccess<()> {
    /// Success response carrying only a message.
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(message, None)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Collection response: `200` with the items, or `204` with no body when there are none.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCollection<T: Serialize + PartialEq> {
    Items(ApiSuccess<Vec<T>>),
    Empty,
}

impl<T: Serialize + PartialEq> ApiCollection<T> {
    pub fn new(message: impl Into<String>, items: Vec<T>) -> Self {
        if items.is_empty() {
            ApiCollection::Empty
        } else {
            ApiCollection::Items(ApiSuccess::new(StatusCode::OK, message, items))
        }
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiCollection<T> {
    fn into_response(self) -> Response {
        match self {
            ApiCollection::Items(success) => success.into_response(),
            ApiCollection::Empty => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    Conflict(String),
    /// `cause` is logged, only `message` reaches the client.
    InternalServerError { message: String, cause: String },
}

impl ApiError {
    pub fn bad_request(message: &str) -> Self {
        ApiError::BadRequest(message.to_string())
    }

    /// Server error with the generic client message.
    pub fn internal(cause: impl ToString) -> Self {
        ApiError::InternalServerError {
            message: SERVER_ERROR.to_string(),
            cause: cause.to_string(),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::internal(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        Self::bad_request(INVALID_REQUEST)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::InternalServerError { message, cause } => {
                tracing::error!(error = %cause, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ApiResponseBody::<()>::new(message, None))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::InvalidUserId(_) => {
                ApiError::bad_request(USER_NOT_FOUND)
            }
            UserError::InvalidPassword(_) => {
                ApiError::bad_request("password must be at least 8 characters")
            }
            UserError::InvalidName(_) | UserError::InvalidEmail(_) => {
                ApiError::bad_request(INVALID_REQUEST)
            }
            UserError::Store(_) => ApiError::internal(err),
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) | ProductError::InvalidProductId(_) => {
                ApiError::bad_request(PRODUCT_NOT_FOUND)
            }
            ProductError::InvalidName(_)
            | ProductError::InvalidDescription(_)
            | ProductError::InvalidQuantity(_) => ApiError::bad_request(INVALID_REQUEST),
            ProductError::Store(_) => ApiError::internal(err),
        }
    }
}

/// Response envelope: `{"message": ..., "data": ...}`, `data` omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// User as exposed over HTTP. The password hash never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductData {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub stock: i64,
}

impl From<&Product> for ProductData {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.0,
            name: product.name.as_str().to_string(),
            description: product.description.as_str().to_string(),
            price: product.price.value(),
            stock: product.stock.value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;
    use serde_json::json;
    use serde_json::Value;

    use super::*;
    use crate::domain::record::StoreError;
    use crate::user::errors::EmailError;

    async fn body_json(response: Response) -> Option<Value> {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        if bytes.is_empty() {
            None
        } else {
            Some(serde_json::from_slice(&bytes).unwrap())
        }
    }

    #[test]
    fn test_envelope_omits_absent_data() {
        let body = ApiResponseBody::<()>::new("successfully deleted product", None);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "message": "successfully deleted product" })
        );

        let body = ApiResponseBody::new("login success", Some(json!({ "token": "t" })));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "message": "login success", "data": { "token": "t" } })
        );
    }

    #[tokio::test]
    async fn test_empty_collection_is_no_content() {
        let response = ApiCollection::<ProductData>::new("successfully retrieved products", vec![])
            .into_response();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(body_json(response).await, None);
    }

    #[tokio::test]
    async fn test_internal_error_hides_cause() {
        let err = ApiError::from(UserError::Store(StoreError::Database(
            "password authentication failed for user postgres".to_string(),
        )));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            Some(json!({ "message": SERVER_ERROR }))
        );
    }

    #[test]
    fn test_domain_errors_map_to_client_errors() {
        assert_eq!(
            ApiError::from(ProductError::NotFound("id = 2".to_string())),
            ApiError::bad_request(PRODUCT_NOT_FOUND)
        );
        assert_eq!(
            ApiError::from(UserError::InvalidEmail(EmailError::InvalidFormat(
                "missing @".to_string()
            ))),
            ApiError::bad_request(INVALID_REQUEST)
        );
    }
}
