//! HTTP middleware and extractors.

mod auth;

pub use auth::{AuthRejection, RequireAuth, USER_ID_HEADER};
