use axum::extract::State;

use super::ApiCollection;
use super::ApiError;
use super::UserData;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<ApiCollection<UserData>, ApiError> {
    let users = state.user_service.get_all().await?;

    Ok(ApiCollection::new(
        "successfully retrieved users",
        users.iter().map(UserData::from).collect(),
    ))
}
