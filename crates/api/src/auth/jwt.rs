//! Bearer access tokens.
//!
//! Tokens are HS256 JWTs issued by this service (`iss = "lms-api"`) and
//! carry the user id and role. There are no refresh tokens; clients log in
//! again once a token expires.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use lms_core::types::DbId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Value of the `iss` claim on every token this service signs.
pub const TOKEN_ISSUER: &str = "lms-api";

const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 60;

/// Clock skew tolerated when checking `exp`, in seconds.
const LEEWAY_SECS: u64 = 30;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User id.
    pub sub: DbId,
    /// `admin`, `instructor` or `student` at the time of login.
    pub role: String,
    pub iss: String,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

/// A freshly signed token and its lifetime.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    /// Seconds until expiry.
    pub expires_in: i64,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry_mins: i64,
}

impl JwtConfig {
    /// Read `JWT_SECRET` (required, non-empty) and `JWT_ACCESS_EXPIRY_MINS`
    /// (default 60).
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_token_expiry_mins: i64 = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64");

        Self {
            secret,
            access_token_expiry_mins,
        }
    }

    /// Sign a token for `user_id` acting as `role`.
    pub fn issue(
        &self,
        user_id: DbId,
        role: &str,
    ) -> Result<IssuedToken, jsonwebtoken::errors::Error> {
        let expires_in = self.access_token_expiry_mins * 60;
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            role: role.to_string(),
            iss: TOKEN_ISSUER.to_string(),
            exp: now + expires_in,
            iat: now,
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;
        Ok(IssuedToken { token, expires_in })
    }

    /// Check signature, expiry and issuer, returning the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::default();
        validation.leeway = LEEWAY_SECS;
        validation.set_issuer(&[TOKEN_ISSUER]);
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )?;
        Ok(data.claims)
    }
}
