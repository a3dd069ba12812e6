use anyhow::Result;

use super::store::{self, UserRecord};
use crate::system::auth::password;

/// Check username/password against the registry. Returns the user on
/// success, `None` on unknown username, wrong password, or inactive account.
pub async fn verify_credentials(username: &str, pass: &str) -> Result<Option<UserRecord>> {
    let Some(user) = store::get_by_username(username) else {
        return Ok(None);
    };
    if !user.is_active {
        return Ok(None);
    }
    if !password::verify_password(pass, &user.password_hash)? {
        return Ok(None);
    }
    Ok(Some(user))
}

pub async fn get_by_id(id: &str) -> Result<Option<UserRecord>> {
    Ok(store::get_by_id(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_verify_credentials() {
        store::insert(UserRecord {
            id: "svc-test-1".to_string(),
            username: "svc_test_user".to_string(),
            password_hash: password::hash_password("letmein").unwrap(),
            display_name: None,
            department: None,
            is_admin: false,
            is_active: true,
        });

        assert!(verify_credentials("svc_test_user", "letmein")
            .await
            .unwrap()
            .is_some());
        assert!(verify_credentials("svc_test_user", "wrong")
            .await
            .unwrap()
            .is_none());
        assert!(verify_credentials("ghost", "letmein")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_inactive_account_rejected() {
        store::insert(UserRecord {
            id: "svc-test-2".to_string(),
            username: "svc_retired_user".to_string(),
            password_hash: password::hash_password("letmein").unwrap(),
            display_name: None,
            department: None,
            is_admin: false,
            is_active: false,
        });

        assert!(verify_credentials("svc_retired_user", "letmein")
            .await
            .unwrap()
            .is_none());
    }
}
