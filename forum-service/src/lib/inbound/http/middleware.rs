use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated identity through the request
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
}

/// Middleware gating protected routes on a valid bearer token.
///
/// Every failure (missing header, bad signature, expiry, deleted subject)
/// produces the same 401 with a challenge header; the actual cause only
/// reaches the server log.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    // Resolves the subject against storage: a valid signature alone is not
    // enough once the account is gone.
    let user = state
        .auth_service
        .authenticate_token(token)
        .await
        .map_err(|e| {
            tracing::warn!("Request authentication failed: {}", e);
            ApiError::Unauthorized.into_response()
        })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        username: user.username.to_string(),
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized.into_response())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized.into_response())?;

    auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized.into_response())
}
