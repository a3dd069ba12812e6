//! In-memory user registry. The portal ships with a seeded admin account;
//! there is no self-registration surface.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;

#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub display_name: Option<String>,
    pub department: Option<String>,
    pub is_admin: bool,
    pub is_active: bool,
}

static USERS: Lazy<RwLock<HashMap<String, UserRecord>>> = Lazy::new(|| RwLock::new(HashMap::new()));

pub fn insert(user: UserRecord) {
    let mut users = USERS.write().expect("user store poisoned");
    users.insert(user.id.clone(), user);
}

pub fn get_by_id(id: &str) -> Option<UserRecord> {
    let users = USERS.read().expect("user store poisoned");
    users.get(id).cloned()
}

pub fn get_by_username(username: &str) -> Option<UserRecord> {
    let users = USERS.read().expect("user store poisoned");
    users.values().find(|u| u.username == username).cloned()
}

pub fn count() -> usize {
    USERS.read().expect("user store poisoned").len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, username: &str) -> UserRecord {
        UserRecord {
            id: id.to_string(),
            username: username.to_string(),
            password_hash: "x".to_string(),
            display_name: None,
            department: None,
            is_admin: false,
            is_active: true,
        }
    }

    #[test]
    fn test_insert_and_lookup() {
        insert(sample("store-test-1", "store_test_user"));
        assert!(get_by_id("store-test-1").is_some());
        assert_eq!(
            get_by_username("store_test_user").map(|u| u.id),
            Some("store-test-1".to_string())
        );
        assert!(get_by_username("nobody-here").is_none());
    }
}
