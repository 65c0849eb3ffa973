use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserDraft;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserName;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::UserData;
use crate::inbound::http::handlers::USER_NOT_FOUND;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

/// HTTP request body for updating a user (raw JSON)
///
/// Both fields are required; the password cannot be changed here.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
}

impl UpdateUserRequest {
    fn try_into_draft(self) -> Result<UserDraft, UserError> {
        Ok(UserDraft {
            name: UserName::new(self.name)?,
            email: EmailAddress::new(self.email)?,
        })
    }
}

pub async fn update_user(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let Json(body) = payload?;
    let draft = body.try_into_draft()?;
    let user_id = UserId::from_string(&id).map_err(|_| ApiError::bad_request(USER_NOT_FOUND))?;

    tracing::debug!(
        caller_id = %caller.user_id,
        caller_name = %caller.name,
        user_id = %user_id,
        "Updating user"
    );

    state
        .user_service
        .update(&user_id, draft)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, "successfully updated user", user.into()))
}
