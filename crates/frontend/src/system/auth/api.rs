//! Session endpoints.
//!
//! All calls go through the shared request plumbing so auth traffic gets
//! the same timeout and error classification as data fetches.

use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};

use crate::shared::api_utils::{self, ApiError};

pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    api_utils::post_json("/api/system/auth/login", &request).await
}

/// Trade a refresh token for a fresh access token.
pub async fn refresh_session(refresh_token: String) -> Result<RefreshResponse, ApiError> {
    let request = RefreshRequest { refresh_token };
    api_utils::post_json("/api/system/auth/refresh", &request).await
}

/// Revoke a refresh token server-side. The reply carries no body.
pub async fn logout(refresh_token: String) -> Result<(), ApiError> {
    let request = RefreshRequest { refresh_token };
    api_utils::post_no_content("/api/system/auth/logout", &request).await
}

/// Resolve the signed-in account behind an access token.
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, ApiError> {
    api_utils::get_json_with_token("/api/system/auth/me", Some(access_token)).await
}
