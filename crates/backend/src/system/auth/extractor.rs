use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use contracts::system::auth::TokenClaims;

/// Claims of the authenticated session, read from the request extensions
/// where `require_auth` placed them. Handlers destructure it:
/// `async fn handler(SessionUser(claims): SessionUser)`.
pub struct SessionUser(pub TokenClaims);

#[async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<TokenClaims>()
            .cloned()
            .map(SessionUser)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
