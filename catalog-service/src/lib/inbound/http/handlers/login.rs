use auth::AuthenticationError;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserKey;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

const EMAIL_NOT_REGISTERED: &str = "email is not registered";

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let Json(body) = payload?;

    // An address that cannot be stored cannot be registered either.
    let email = EmailAddress::new(body.email)
        .map_err(|_| ApiError::bad_request(EMAIL_NOT_REGISTERED))?;

    let user = state
        .user_service
        .get_by(&UserKey::Email(email))
        .await
        .map_err(|e| match e {
            UserError::NotFound(_) => ApiError::bad_request(EMAIL_NOT_REGISTERED),
            _ => ApiError::from(e),
        })?;

    let claims = state
        .authenticator
        .session_claims(user.id, user.name.as_str(), user.email.as_str());

    let result = state
        .authenticator
        .authenticate(&body.password, &user.password_hash, &claims)
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => ApiError::bad_request("password invalid"),
            AuthenticationError::PasswordError(err) => {
                ApiError::internal(format!("password verification failed: {err}"))
            }
            AuthenticationError::JwtError(err) => ApiError::InternalServerError {
                message: "failed to generate token".to_string(),
                cause: err.to_string(),
            },
        })?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        "login success",
        LoginResponseData {
            token: result.access_token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}
