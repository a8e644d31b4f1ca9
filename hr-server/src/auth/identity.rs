//! Identity provider token verification
//!
//! The provider's redirect/callback handshake happens entirely outside this
//! server. What arrives here is the provider-signed token presented at
//! `POST /api/auth/login`; this module verifies it and extracts the identity
//! assertion consumed by provisioning.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use shared::IdentityAssertion;

use super::jwt::{JwtError, load_secret};

/// Identity provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdpConfig {
    /// Shared secret for verifying provider tokens
    pub secret: String,
    pub issuer: String,
    pub audience: String,
}

impl Default for IdpConfig {
    fn default() -> Self {
        Self {
            secret: load_secret("IDP_SECRET"),
            issuer: std::env::var("IDP_ISSUER")
                .unwrap_or_else(|_| "https://idp.example.com".to_string()),
            audience: std::env::var("IDP_AUDIENCE").unwrap_or_else(|_| "hr-server".to_string()),
        }
    }
}

/// Claims carried by a provider-issued token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderClaims {
    /// External organization identifier (id number)
    pub sub: String,
    pub given_name: String,
    pub family_name: String,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
    pub aud: String,
}

/// Verifies provider tokens and extracts identity assertions
#[derive(Debug, Clone)]
pub struct IdentityVerifier {
    pub config: IdpConfig,
    decoding_key: DecodingKey,
}

impl IdentityVerifier {
    pub fn new() -> Self {
        Self::with_config(IdpConfig::default())
    }

    pub fn with_config(config: IdpConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            decoding_key,
        }
    }

    /// Verify a provider token and return the asserted identity
    pub fn verify(&self, token: &str) -> Result<IdentityAssertion, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iss", "aud"]);

        let token_data =
            decode::<ProviderClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                    ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                    _ => JwtError::InvalidToken(format!("Provider token rejected: {}", e)),
                }
            })?;

        let claims = token_data.claims;
        Ok(IdentityAssertion {
            id_number: claims.sub,
            given_name: claims.given_name,
            last_name: claims.family_name,
            email: claims.email,
        })
    }
}

impl Default for IdentityVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn test_config() -> IdpConfig {
        IdpConfig {
            secret: "idp-unit-test-secret-0123456789abcdef".to_string(),
            issuer: "https://idp.example.com".to_string(),
            audience: "hr-server".to_string(),
        }
    }

    fn sign(config: &IdpConfig, email: &str) -> String {
        let now = Utc::now().timestamp();
        let claims = ProviderClaims {
            sub: "EMP-1".to_string(),
            given_name: "Jane".to_string(),
            family_name: "Doe".to_string(),
            email: email.to_string(),
            exp: now + 300,
            iat: now,
            iss: config.issuer.clone(),
            aud: config.audience.clone(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_verify_extracts_assertion() {
        let config = test_config();
        let verifier = IdentityVerifier::with_config(config.clone());
        let token = sign(&config, "jane@x.com");

        let assertion = verifier.verify(&token).unwrap();
        assert_eq!(assertion.id_number, "EMP-1");
        assert_eq!(assertion.given_name, "Jane");
        assert_eq!(assertion.last_name, "Doe");
        assert_eq!(assertion.email, "jane@x.com");
    }

    #[test]
    fn test_rejects_wrong_audience() {
        let mut config = test_config();
        let verifier = IdentityVerifier::with_config(config.clone());
        config.audience = "someone-else".to_string();
        let token = sign(&config, "jane@x.com");

        assert!(verifier.verify(&token).is_err());
    }
}
