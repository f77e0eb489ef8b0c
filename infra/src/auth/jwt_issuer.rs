//! HS256 JWT issuer backing the authentication service.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use ds_core::domain::entities::User;
use ds_core::errors::DomainError;
use ds_core::services::TokenIssuer;
use ds_shared::config::JwtConfig;

use crate::InfrastructureError;

/// Claims carried by an access token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    pub email: String,

    /// User name
    pub unique_name: String,

    pub role: String,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

/// Signs access tokens with a shared secret
pub struct JwtTokenIssuer {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenIssuer {
    /// Creates an issuer from configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Secret, issuer, audience and lifetime of tokens
    ///
    /// # Returns
    ///
    /// * `Ok(JwtTokenIssuer)` - Ready to sign
    /// * `Err(InfrastructureError::Config)` - The secret is empty or the lifetime is not positive
    pub fn new(config: JwtConfig) -> Result<Self, InfrastructureError> {
        if config.secret.is_empty() {
            return Err(InfrastructureError::Config(
                "JWT secret must not be empty".to_string(),
            ));
        }
        if config.expiry_seconds <= 0 {
            return Err(InfrastructureError::Config(
                "JWT expiry must be positive".to_string(),
            ));
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.validate_exp = true;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Build the claims for `user`, valid from now
    pub fn claims_for(&self, user: &User) -> Claims {
        let now = Utc::now();
        let expires = now + Duration::seconds(self.config.expiry_seconds);
        Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            unique_name: user.user_name.clone(),
            role: user.role.to_string(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            iat: now.timestamp(),
            exp: expires.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Sign a token for `user`
    pub fn issue(&self, user: &User) -> Result<String, InfrastructureError> {
        let claims = self.claims_for(user);
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        debug!("Issued token {} for user {}", claims.jti, user.id);
        Ok(token)
    }

    /// Decode a token signed by this issuer
    ///
    /// Fails when the signature, issuer, audience or expiry do not check out.
    pub fn verify(&self, token: &str) -> Result<Claims, InfrastructureError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}

#[async_trait]
impl TokenIssuer for JwtTokenIssuer {
    async fn generate(&self, user: &User) -> Result<String, DomainError> {
        Ok(self.issue(user)?)
    }
}
