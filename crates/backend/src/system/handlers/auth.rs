use axum::{extract::Json, http::StatusCode};
use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};

use crate::system::auth::extractor::SessionUser;
use crate::system::{auth::jwt, auth::tokens, users::service as user_service, users::store};

/// Login handler
pub async fn login(Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, StatusCode> {
    let user = user_service::verify_credentials(&request.username, &request.password)
        .await
        .map_err(|e| {
            tracing::error!("Credential check failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let access_token =
        jwt::generate_access_token(&user.id, &user.username, user.is_admin).map_err(|e| {
            tracing::error!("Token generation failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let refresh_token = tokens::issue(&user.id);

    tracing::info!(username = %user.username, "login");

    Ok(Json(LoginResponse {
        access_token,
        refresh_token,
        user: user_info(user),
    }))
}

/// Refresh token handler
pub async fn refresh(
    Json(request): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, StatusCode> {
    let user_id = tokens::validate(&request.refresh_token).ok_or(StatusCode::UNAUTHORIZED)?;

    let user = user_service::get_by_id(&user_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let access_token =
        jwt::generate_access_token(&user.id, &user.username, user.is_admin).map_err(|e| {
            tracing::error!("Token generation failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(RefreshResponse { access_token }))
}

/// Logout handler (revokes the refresh token)
pub async fn logout(Json(request): Json<RefreshRequest>) -> StatusCode {
    tokens::revoke(&request.refresh_token);
    StatusCode::OK
}

/// Get current user handler (protected by middleware)
pub async fn current_user(SessionUser(claims): SessionUser) -> Result<Json<UserInfo>, StatusCode> {
    let user = user_service::get_by_id(&claims.sub)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(user_info(user)))
}

fn user_info(user: store::UserRecord) -> UserInfo {
    UserInfo {
        id: user.id,
        username: user.username,
        display_name: user.display_name,
        department: user.department,
        is_admin: user.is_admin,
    }
}
