use serde::Deserialize;

/// Application configuration, loaded from `config.toml` next to the binary.
///
/// Every section is optional; missing values fall back to the defaults
/// below so a fresh checkout runs without any configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub admin_username: String,
    pub admin_password: String,
    /// Fixed JWT signing secret. When absent a random secret is generated
    /// at startup, which invalidates outstanding tokens on restart.
    pub jwt_secret: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_username: "admin".to_string(),
            admin_password: "admin".to_string(),
            jwt_secret: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl AppConfig {
    /// Load `config.toml` from the working directory, falling back to the
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config.toml")
    }

    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        if !std::path::Path::new(path).exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.auth.admin_username, "admin");
        assert!(config.auth.jwt_secret.is_none());
    }

    #[test]
    fn test_partial_config_parses() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            port = 8080
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.auth.admin_password, "admin");
    }

    #[test]
    fn test_full_config_parses() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            port = 9000

            [auth]
            admin_username = "manager"
            admin_password = "s3cret!pass"
            jwt_secret = "fixed-secret"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.auth.admin_username, "manager");
        assert_eq!(config.auth.jwt_secret.as_deref(), Some("fixed-secret"));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_from("does-not-exist.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }
}
