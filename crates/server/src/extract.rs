//! Request extractors shared by the route modules.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::convert::Infallible;

/// Identity of the caller as resolved by the auth proxy in front of us.
///
/// The gateway authenticates requests and forwards the account id in
/// `x-user-id`. Requests without the header (local development, cron
/// jobs) are attributed to `system`.
pub struct CurrentUser(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .headers
            .get("x-user-id")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("system")
            .to_string();
        Ok(CurrentUser(user))
    }
}
