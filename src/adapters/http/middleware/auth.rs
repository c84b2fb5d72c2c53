//! Caller identity extraction for axum.
//!
//! Session authentication happens upstream. The authenticator forwards the
//! caller's user key in the `X-User-Id` header, and every shipment route
//! reads it through [`RequireAuth`].
//!
//! # Example
//!
//! ```ignore
//! async fn my_handler(RequireAuth(user_id): RequireAuth) -> impl IntoResponse {
//!     format!("Hello, user {}!", user_id)
//! }
//! ```

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::UserId;

/// Header carrying the authenticated caller's user key.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor that requires an authenticated caller.
///
/// Rejects with 401 when the header is missing or is not a positive
/// integer key.
#[derive(Debug, Clone, Copy)]
pub struct RequireAuth(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or(AuthRejection::Unauthenticated)?;

        raw.to_str()
            .ok()
            .and_then(|value| value.parse::<UserId>().ok())
            .map(RequireAuth)
            .ok_or(AuthRejection::InvalidIdentity)
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRejection {
    /// No identity header was forwarded.
    Unauthenticated,
    /// The identity header is not a valid user key.
    InvalidIdentity,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let message = match self {
            AuthRejection::Unauthenticated => "Authentication required",
            AuthRejection::InvalidIdentity => "Invalid user identity",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "error": message,
                "code": "UNAUTHENTICATED"
            })),
        )
            .into_response()
    }
}
