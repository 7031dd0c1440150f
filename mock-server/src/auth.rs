//! Bearer-token authentication for protected routes.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{AppState, User};

/// Rejections produced by [`CurrentUser`].
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No `Authorization: Bearer ...` header at all.
    #[error("Not authenticated")]
    MissingCredentials,

    /// A header is present but does not use the bearer scheme.
    #[error("Invalid authentication credentials")]
    InvalidScheme,

    /// The token is not known to the store.
    #[error("Could not validate credentials: {0}")]
    InvalidToken(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let detail = json!({ "detail": self.to_string() });
        match self {
            AuthError::MissingCredentials | AuthError::InvalidScheme => {
                (StatusCode::FORBIDDEN, Json(detail)).into_response()
            }
            AuthError::InvalidToken(_) => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                Json(detail),
            )
                .into_response(),
        }
    }
}

/// The user owning the request's bearer token.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AuthError::MissingCredentials)?;

        let (scheme, token) = raw.split_once(' ').ok_or(AuthError::InvalidScheme)?;
        if !scheme.eq_ignore_ascii_case("bearer") || token.trim().is_empty() {
            return Err(AuthError::InvalidScheme);
        }

        match state.user_for_token(token.trim()).await {
            Some(user) => Ok(CurrentUser(user)),
            None => {
                tracing::debug!("rejected unknown bearer token");
                Err(AuthError::InvalidToken("invalid or expired token".to_string()))
            }
        }
    }
}
