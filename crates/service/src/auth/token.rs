use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use uuid::Uuid;

use super::domain::Claims;
use crate::errors::ServiceError;

struct KeyPair {
    encoding: EncodingKey,
    decoding: DecodingKey,
    age_secs: u64,
}

impl KeyPair {
    fn new(secret: &str, age_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            age_secs,
        }
    }

    fn sign(&self, user_id: &str) -> Result<String, ServiceError> {
        let iat = chrono::Utc::now().timestamp() as usize;
        let claims = Claims { id: user_id.to_string(), jti: Uuid::new_v4(), iat, exp: iat + self.age_secs as usize };
        encode(&JwtHeader::new(Algorithm::HS256), &claims, &self.encoding).map_err(|e| ServiceError::Internal(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        decode::<Claims>(token, &self.decoding, &validation).map(|data| data.claims)
    }
}

/// HS256 token issuing with separate access and refresh keys.
pub struct TokenManager {
    access: KeyPair,
    refresh: KeyPair,
}

impl TokenManager {
    pub fn new(cfg: &configs::AuthConfig) -> Self {
        Self {
            access: KeyPair::new(&cfg.access_token_key, cfg.access_token_age_secs),
            refresh: KeyPair::new(&cfg.refresh_token_key, cfg.refresh_token_age_secs),
        }
    }

    pub fn generate_access_token(&self, user_id: &str) -> Result<String, ServiceError> {
        self.access.sign(user_id)
    }

    pub fn generate_refresh_token(&self, user_id: &str) -> Result<String, ServiceError> {
        self.refresh.sign(user_id)
    }

    /// Verified caller claims, or an authentication error.
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, ServiceError> {
        self.access.verify(token).map_err(|e| ServiceError::Authentication(format!("Invalid access token: {e}")))
    }

    pub fn verify_refresh_token(&self, token: &str) -> Result<Claims, ServiceError> {
        self.refresh.verify(token).map_err(|_| ServiceError::Invariant("Invalid refresh token".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> TokenManager {
        TokenManager::new(&configs::AuthConfig {
            access_token_key: "access-secret".into(),
            refresh_token_key: "refresh-secret".into(),
            access_token_age_secs: 1800,
            refresh_token_age_secs: 3600,
        })
    }

    #[test]
    fn access_token_carries_user_id() {
        let tokens = manager();
        let token = tokens.generate_access_token("user-abc").unwrap();
        let claims = tokens.verify_access_token(&token).unwrap();
        assert_eq!(claims.id, "user-abc");
        assert_eq!(claims.exp - claims.iat, 1800);
    }

    #[test]
    fn keys_are_not_interchangeable() {
        let tokens = manager();
        let refresh = tokens.generate_refresh_token("user-abc").unwrap();
        assert!(matches!(tokens.verify_access_token(&refresh), Err(ServiceError::Authentication(_))));
        let access = tokens.generate_access_token("user-abc").unwrap();
        assert!(matches!(tokens.verify_refresh_token(&access), Err(ServiceError::Invariant(_))));
        assert_eq!(tokens.verify_refresh_token(&refresh).unwrap().id, "user-abc");
    }

    #[test]
    fn tokens_issued_together_differ() {
        let tokens = manager();
        assert_ne!(tokens.generate_access_token("u").unwrap(), tokens.generate_access_token("u").unwrap());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(manager().verify_access_token("not-a-jwt").is_err());
    }
}
