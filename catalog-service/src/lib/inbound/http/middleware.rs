use auth::JwtError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated caller in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub name: String,
}

/// Middleware that validates bearer tokens and adds the caller to request extensions.
///
/// Rejects with `401` before the handler runs.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&req).ok_or_else(|| {
        tracing::warn!(uri = %req.uri(), "Missing or malformed Authorization header");
        ApiError::Unauthorized("missing or malformed token".to_string())
    })?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        match e {
            JwtError::TokenExpired => ApiError::Unauthorized("token has expired".to_string()),
            _ => ApiError::Unauthorized("invalid token".to_string()),
        }
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a user id");
        ApiError::Unauthorized("invalid token".to_string())
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        name: claims.name,
    });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
