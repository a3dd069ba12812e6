//! Session token persistence.
//!
//! Tokens live in `localStorage` so a reload can re-validate the session;
//! they are dropped on logout or when validation fails for good.

use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "portal_access_token";
const REFRESH_TOKEN_KEY: &str = "portal_refresh_token";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn read(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

fn write(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Persist both tokens of a fresh login.
pub fn save_tokens(access_token: &str, refresh_token: &str) {
    write(ACCESS_TOKEN_KEY, access_token);
    write(REFRESH_TOKEN_KEY, refresh_token);
}

/// Replace only the access token, after a refresh.
pub fn save_access_token(token: &str) {
    write(ACCESS_TOKEN_KEY, token);
}

pub fn get_access_token() -> Option<String> {
    read(ACCESS_TOKEN_KEY)
}

pub fn get_refresh_token() -> Option<String> {
    read(REFRESH_TOKEN_KEY)
}

/// Drop the stored session entirely.
pub fn clear_tokens() {
    remove(ACCESS_TOKEN_KEY);
    remove(REFRESH_TOKEN_KEY);
}
