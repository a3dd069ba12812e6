use axum::{body::Body, extract::Request, http::StatusCode, middleware::Next, response::Response};

/// Middleware that requires valid JWT authentication
pub async fn require_auth(mut req: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    let claims = claims_from_request(&req)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

fn claims_from_request(
    req: &Request<Body>,
) -> Result<contracts::system::auth::TokenClaims, StatusCode> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?;

    super::jwt::validate_token(token).map_err(|_| StatusCode::UNAUTHORIZED)
}
