use anyhow::Result;

use crate::shared::config::AppConfig;
use crate::system::auth::password;
use crate::system::users::store::{self, UserRecord};

/// Seed the admin account from configuration when the registry is empty.
pub fn ensure_admin_user_exists(config: &AppConfig) -> Result<()> {
    if store::get_by_username(&config.auth.admin_username).is_some() {
        return Ok(());
    }

    let password_hash = password::hash_password(&config.auth.admin_password)?;
    store::insert(UserRecord {
        id: uuid::Uuid::new_v4().to_string(),
        username: config.auth.admin_username.clone(),
        password_hash,
        display_name: Some("관리자".to_string()),
        department: Some("통합관리센터".to_string()),
        is_admin: true,
        is_active: true,
    });

    tracing::info!(
        username = %config.auth.admin_username,
        "Seeded admin account ({} users total)",
        store::count()
    );
    Ok(())
}
