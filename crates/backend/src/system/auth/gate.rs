use anyhow::Result;
use chrono::{DateTime, Utc};
use contracts::system::auth::{AdminLoginRequest, AdminLoginResponse, AdminSession, TokenClaims};

use super::{jwt, password};
use crate::shared::config::AdminConfig;
use crate::shared::error::ApiError;

/// Проверка пароля администратора и выдача токенов
pub struct AdminGate {
    password_hash: Option<String>,
    keys: jwt::JwtKeys,
}

impl AdminGate {
    pub fn from_config(config: &AdminConfig) -> Result<Self> {
        let password_hash = match (&config.password_hash, &config.password) {
            (Some(hash), _) if !hash.trim().is_empty() => Some(hash.trim().to_string()),
            (_, Some(plain)) if !plain.trim().is_empty() => {
                tracing::warn!("admin.password is set in plaintext; prefer admin.password_hash");
                Some(password::hash_password(plain)?)
            }
            _ => {
                tracing::warn!("No admin password configured, admin login is disabled");
                None
            }
        };

        let secret = match &config.jwt_secret {
            Some(secret) if !secret.trim().is_empty() => secret.clone(),
            _ => {
                tracing::info!("No jwt_secret configured, generated an ephemeral one");
                jwt::generate_jwt_secret()
            }
        };

        Ok(Self {
            password_hash,
            keys: jwt::JwtKeys::new(&secret, config.token_lifetime_hours),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.password_hash.is_some()
    }

    pub fn login(&self, request: &AdminLoginRequest) -> Result<AdminLoginResponse, ApiError> {
        if request.is_blank() {
            return Err(ApiError::BadRequest("Password is required".to_string()));
        }

        let Some(hash) = &self.password_hash else {
            return Err(ApiError::Unauthorized);
        };

        if !password::verify_password(&request.password, hash)? {
            tracing::warn!("Admin login rejected: wrong password");
            return Err(ApiError::Unauthorized);
        }

        let (access_token, expires_at) = self.keys.generate_access_token()?;
        tracing::info!("Admin login succeeded, token valid until {}", expires_at);

        Ok(AdminLoginResponse {
            access_token,
            expires_at: expires_at.to_rfc3339(),
        })
    }

    /// Claims of a valid admin token, `Unauthorized` otherwise
    pub fn validate(&self, token: &str) -> Result<TokenClaims, ApiError> {
        let claims = self
            .keys
            .validate_token(token)
            .map_err(|_| ApiError::Unauthorized)?;
        if !claims.is_admin() {
            return Err(ApiError::Unauthorized);
        }
        Ok(claims)
    }
}

pub fn session_from_claims(claims: &TokenClaims) -> AdminSession {
    let expires_at = DateTime::<Utc>::from_timestamp(claims.exp as i64, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default();
    AdminSession {
        subject: claims.sub.clone(),
        expires_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate_with_password(password: &str) -> AdminGate {
        AdminGate::from_config(&AdminConfig {
            password: Some(password.to_string()),
            jwt_secret: Some("test-secret".to_string()),
            ..AdminConfig::default()
        })
        .unwrap()
    }

    fn request(password: &str) -> AdminLoginRequest {
        AdminLoginRequest {
            password: password.to_string(),
        }
    }

    #[test]
    fn test_correct_password_issues_valid_token() {
        let gate = gate_with_password("arus123");
        let response = gate.login(&request("arus123")).unwrap();
        let claims = gate.validate(&response.access_token).unwrap();
        assert!(claims.is_admin());
    }

    #[test]
    fn test_wrong_password_is_unauthorized() {
        let gate = gate_with_password("arus123");
        assert!(matches!(
            gate.login(&request("arus124")),
            Err(ApiError::Unauthorized)
        ));
    }

    #[test]
    fn test_blank_password_is_bad_request() {
        let gate = gate_with_password("arus123");
        assert!(matches!(
            gate.login(&request("   ")),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn test_gate_without_password_rejects_everything() {
        let gate = AdminGate::from_config(&AdminConfig::default()).unwrap();
        assert!(!gate.is_enabled());
        assert!(matches!(
            gate.login(&request("anything")),
            Err(ApiError::Unauthorized)
        ));
    }

    #[test]
    fn test_preconfigured_hash_is_used() {
        let hash = password::hash_password("dari-hash").unwrap();
        let gate = AdminGate::from_config(&AdminConfig {
            password_hash: Some(hash),
            password: Some("ignored".to_string()),
            ..AdminConfig::default()
        })
        .unwrap();
        assert!(gate.login(&request("dari-hash")).is_ok());
        assert!(gate.login(&request("ignored")).is_err());
    }

    #[test]
    fn test_garbage_token_is_unauthorized() {
        let gate = gate_with_password("arus123");
        assert!(matches!(
            gate.validate("not.a.token"),
            Err(ApiError::Unauthorized)
        ));
    }

    #[test]
    fn test_session_from_claims() {
        let claims = TokenClaims {
            sub: "admin".into(),
            role: "admin".into(),
            jti: "x".into(),
            exp: 1_700_000_000,
            iat: 1_699_990_000,
        };
        let session = session_from_claims(&claims);
        assert_eq!(session.subject, "admin");
        assert!(session.expires_at.starts_with("2023-11-14"));
    }
}
