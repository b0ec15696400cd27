use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use jsonwebtoken::{decode, DecodingKey, Validation};
#[cfg(feature = "server")]
use shared::user::User;

/// Name of the cookie carrying the session JWT.
pub const AUTH_COOKIE_NAME: &str = "token";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub netid: String,
    pub exp: usize,
}

#[cfg(feature = "server")]
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("no auth token found")]
    MissingToken,
    #[error("invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
}

#[cfg(feature = "server")]
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

/// Resolve the user behind an optional session token.
#[cfg(feature = "server")]
pub fn resolve_user(token: Option<&str>, secret: &str) -> Result<User, AuthError> {
    let token = token.ok_or(AuthError::MissingToken)?;
    let claims = verify_token(token, secret)?;
    Ok(User::from_netid(claims.netid))
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-secret";

    fn token_for(netid: &str, expires_in: chrono::Duration, secret: &str) -> String {
        let exp = (chrono::Utc::now() + expires_in).timestamp() as usize;
        let claims = Claims {
            netid: netid.to_string(),
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn valid_token_resolves_netid() {
        let token = token_for("abc123", chrono::Duration::hours(1), SECRET);
        let user = resolve_user(Some(&token), SECRET).unwrap();
        assert_eq!(user.netid.as_deref(), Some("abc123"));
    }

    #[test]
    fn missing_token_is_rejected() {
        assert!(matches!(
            resolve_user(None, SECRET),
            Err(AuthError::MissingToken)
        ));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = token_for("abc123", chrono::Duration::hours(1), "other-secret");
        assert!(matches!(
            verify_token(&token, SECRET),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = token_for("abc123", chrono::Duration::days(-1), SECRET);
        assert!(matches!(
            verify_token(&token, SECRET),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(resolve_user(Some("not-a-jwt"), SECRET).is_err());
    }
}
