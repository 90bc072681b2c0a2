use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use contracts::system::auth::TokenClaims;

use crate::shared::error::ApiError;

/// Admin identity for handlers behind `require_admin`.
///
/// Claims are checked again here: a route mounted without the gate, or a token
/// carrying another role, is rejected with `Unauthorized` instead of reaching
/// the handler.
pub struct CurrentAdmin(pub TokenClaims);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentAdmin
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts.extensions.get::<TokenClaims>().ok_or_else(|| {
            tracing::warn!("{} {}: no admin claims on request", parts.method, parts.uri.path());
            ApiError::Unauthorized
        })?;
        if !claims.is_admin() {
            tracing::warn!("Rejected token of {} with role {:?}", claims.sub, claims.role);
            return Err(ApiError::Unauthorized);
        }
        Ok(CurrentAdmin(claims.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use contracts::system::auth::ADMIN_ROLE;

    fn claims(role: &str) -> TokenClaims {
        TokenClaims {
            sub: "admin".into(),
            role: role.into(),
            jti: "jti-1".into(),
            exp: 2_000_000_000,
            iat: 1_700_000_000,
        }
    }

    fn parts_with(claims: Option<TokenClaims>) -> Parts {
        let (mut parts, _) = Request::builder()
            .uri("/api/system/auth/me")
            .body(())
            .unwrap()
            .into_parts();
        if let Some(claims) = claims {
            parts.extensions.insert(claims);
        }
        parts
    }

    #[tokio::test]
    async fn test_admin_claims_are_accepted() {
        let mut parts = parts_with(Some(claims(ADMIN_ROLE)));
        let CurrentAdmin(claims) = CurrentAdmin::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(claims.sub, "admin");
    }

    #[tokio::test]
    async fn test_other_role_is_rejected() {
        let mut parts = parts_with(Some(claims("viewer")));
        let result = CurrentAdmin::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_missing_claims_are_rejected() {
        let mut parts = parts_with(None);
        let result = CurrentAdmin::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }
}
