use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use super::INVALID_REQUEST;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Password;
use crate::domain::user::models::UserKey;
use crate::domain::user::models::UserName;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let Json(body) = payload?;
    let (name, email, password) = body.try_into_fields()?;

    // Uniqueness is checked here, not by the store; two concurrent registrations can race.
    match state.user_service.get_by(&UserKey::Email(email.clone())).await {
        Ok(_) => return Err(ApiError::Conflict("email has been registered".to_string())),
        Err(UserError::NotFound(_)) => {}
        Err(e) => return Err(e.into()),
    }

    let password_hash = state
        .authenticator
        .hash_password(password.as_str())
        .map_err(ApiError::internal)?;

    let user = state
        .user_service
        .create(NewUser {
            name,
            email,
            password_hash,
        })
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        "successfully registered user",
        UserData::from(&user),
    ))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    name: String,
    email: String,
    password: String,
}

impl RegisterRequest {
    fn try_into_fields(self) -> Result<(UserName, EmailAddress, Password), ApiError> {
        let name = UserName::new(self.name).map_err(UserError::from)?;
        let email = EmailAddress::new(self.email).map_err(UserError::from)?;
        if self.password.is_empty() {
            return Err(ApiError::bad_request(INVALID_REQUEST));
        }
        let password = Password::new(self.password).map_err(UserError::from)?;
        Ok((name, email, password))
    }
}
