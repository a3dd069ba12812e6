use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::OnceCell;
use rand::Rng;

const ACCESS_TOKEN_LIFETIME_HOURS: i64 = 12;
const REFRESH_TOKEN_LIFETIME_DAYS: i64 = 30;

static JWT_SECRET: OnceCell<String> = OnceCell::new();

/// Install the configured signing secret. Call once at startup; without a
/// configured secret a random one is generated, invalidating outstanding
/// tokens on restart.
pub fn init_secret(configured: Option<String>) {
    let _ = JWT_SECRET.set(configured.unwrap_or_else(generate_jwt_secret));
}

fn secret() -> &'static str {
    JWT_SECRET.get_or_init(generate_jwt_secret)
}

/// Generate a JWT access token for the given user.
pub fn generate_access_token(user_id: &str, username: &str, is_admin: bool) -> Result<String> {
    encode_with_secret(secret(), user_id, username, is_admin)
}

/// Validate a JWT token and extract its claims.
pub fn validate_token(token: &str) -> Result<TokenClaims> {
    decode_with_secret(secret(), token)
}

fn encode_with_secret(
    secret: &str,
    user_id: &str,
    username: &str,
    is_admin: bool,
) -> Result<String> {
    let now = Utc::now();
    let exp = (now + chrono::Duration::hours(ACCESS_TOKEN_LIFETIME_HOURS)).timestamp() as usize;
    let iat = now.timestamp() as usize;

    let claims = TokenClaims {
        sub: user_id.to_string(),
        username: username.to_string(),
        is_admin,
        exp,
        iat,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT token")
}

fn decode_with_secret(secret: &str, token: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;

    Ok(token_data.claims)
}

/// Generate a cryptographically random signing secret (256 bits).
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

/// Expiration timestamp for a refresh token issued now.
pub fn refresh_token_expiration() -> chrono::DateTime<Utc> {
    Utc::now() + chrono::Duration::days(REFRESH_TOKEN_LIFETIME_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let secret = "test-secret";
        let token = encode_with_secret(secret, "u-1", "manager", true).unwrap();
        let claims = decode_with_secret(secret, &token).unwrap();
        assert_eq!(claims.sub, "u-1");
        assert_eq!(claims.username, "manager");
        assert!(claims.is_admin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = encode_with_secret("secret-a", "u-1", "manager", false).unwrap();
        assert!(decode_with_secret("secret-b", &token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(decode_with_secret("secret", "not.a.token").is_err());
    }
}
