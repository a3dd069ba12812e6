//! In-memory refresh token store.
//!
//! Only the SHA-256 hash of a token is kept; the raw value exists nowhere
//! but in the client. Revocation marks the entry instead of deleting it so
//! a replayed token stays invalid.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use super::jwt;

struct RefreshEntry {
    user_id: String,
    expires_at: DateTime<Utc>,
    revoked: bool,
}

static STORE: Lazy<RwLock<HashMap<String, RefreshEntry>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Issue a new refresh token for the user and register its hash.
pub fn issue(user_id: &str) -> String {
    let token = uuid::Uuid::new_v4().to_string();
    store(user_id, &token, jwt::refresh_token_expiration());
    token
}

fn store(user_id: &str, token: &str, expires_at: DateTime<Utc>) {
    let mut store = STORE.write().expect("refresh token store poisoned");
    store.insert(
        hash_token(token),
        RefreshEntry {
            user_id: user_id.to_string(),
            expires_at,
            revoked: false,
        },
    );
}

/// Resolve a refresh token to its user id, if still valid.
pub fn validate(token: &str) -> Option<String> {
    let store = STORE.read().expect("refresh token store poisoned");
    let entry = store.get(&hash_token(token))?;
    if entry.revoked || entry.expires_at <= Utc::now() {
        return None;
    }
    Some(entry.user_id.clone())
}

/// Revoke a refresh token. Unknown tokens are ignored.
pub fn revoke(token: &str) {
    let mut store = STORE.write().expect("refresh token store poisoned");
    if let Some(entry) = store.get_mut(&hash_token(token)) {
        entry.revoked = true;
    }
}

fn hash_token(token: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_validate() {
        let token = issue("user-a");
        assert_eq!(validate(&token), Some("user-a".to_string()));
    }

    #[test]
    fn test_unknown_token_invalid() {
        assert_eq!(validate("never-issued"), None);
    }

    #[test]
    fn test_revoked_token_invalid() {
        let token = issue("user-b");
        revoke(&token);
        assert_eq!(validate(&token), None);
    }

    #[test]
    fn test_expired_token_invalid() {
        let token = uuid::Uuid::new_v4().to_string();
        store("user-c", &token, Utc::now() - chrono::Duration::minutes(1));
        assert_eq!(validate(&token), None);
    }

    #[test]
    fn test_raw_token_never_stored() {
        let token = issue("user-d");
        let store = STORE.read().unwrap();
        assert!(!store.contains_key(&token));
        assert!(store.contains_key(&hash_token(&token)));
    }
}
