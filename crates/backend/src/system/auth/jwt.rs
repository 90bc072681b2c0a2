use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use contracts::system::auth::{TokenClaims, ADMIN_ROLE};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;

/// Subject of every admin token: there is a single admin identity
pub const ADMIN_SUBJECT: &str = "admin";

/// Signing keys built once from the configured (or generated) secret
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    lifetime: chrono::Duration,
}

impl JwtKeys {
    pub fn new(secret: &str, lifetime_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            lifetime: chrono::Duration::hours(lifetime_hours.max(1)),
        }
    }

    /// Generate an admin access token; returns the token and its expiry
    pub fn generate_access_token(&self) -> Result<(String, DateTime<Utc>)> {
        let now = Utc::now();
        let expires_at = now + self.lifetime;

        let claims = TokenClaims {
            sub: ADMIN_SUBJECT.to_string(),
            role: ADMIN_ROLE.to_string(),
            jti: uuid::Uuid::new_v4().to_string(),
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let token = encode(&Header::default(), &claims, &self.encoding)
            .context("Failed to encode JWT token")?;

        Ok((token, expires_at))
    }

    /// Validate JWT token and extract claims
    pub fn validate_token(&self, token: &str) -> Result<TokenClaims> {
        let token_data = decode::<TokenClaims>(token, &self.decoding, &Validation::default())
            .context("Failed to decode JWT token")?;
        Ok(token_data.claims)
    }
}

/// Generate a cryptographically secure JWT secret (256 bits)
pub fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip_carries_admin_role() {
        let keys = JwtKeys::new("test-secret", 12);
        let (token, expires_at) = keys.generate_access_token().unwrap();
        let claims = keys.validate_token(&token).unwrap();
        assert!(claims.is_admin());
        assert_eq!(claims.sub, ADMIN_SUBJECT);
        assert_eq!(claims.exp, expires_at.timestamp() as usize);
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let (token, _) = JwtKeys::new("one", 12).generate_access_token().unwrap();
        assert!(JwtKeys::new("two", 12).validate_token(&token).is_err());
    }

    #[test]
    fn test_generated_secret_is_256_bits() {
        use base64::{engine::general_purpose, Engine as _};
        let secret = generate_jwt_secret();
        assert_eq!(general_purpose::STANDARD.decode(secret).unwrap().len(), 32);
        assert_ne!(generate_jwt_secret(), generate_jwt_secret());
    }
}
