use crate::domain::session::{Session, SessionError};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // User ID
    pub email: String,
    pub exp: i64, // Expiration time
    pub iat: i64, // Issued at
}

pub struct JwtManager {
    secret: String,
    expiration_hours: i64,
}

impl JwtManager {
    pub fn new(secret: String, expiration_hours: i64) -> Self {
        Self {
            secret,
            expiration_hours,
        }
    }

    pub fn expires_in_secs(&self) -> i64 {
        self.expiration_hours * 3600
    }

    /// Generate a session token for a user
    pub fn generate_token(&self, session: &Session) -> Result<String, SessionError> {
        let now = Utc::now();
        let exp = now + Duration::hours(self.expiration_hours);

        let claims = Claims {
            sub: session.user_id.to_string(),
            email: session.email.clone(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| SessionError::SignIn(format!("Failed to generate token: {}", e)))
    }

    /// Validate a session token and rebuild the session it carries
    pub fn validate_token(&self, token: &str) -> Result<Session, SessionError> {
        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| SessionError::InvalidToken(e.to_string()))?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| SessionError::InvalidToken("Invalid user ID in token".to_string()))?;

        Ok(Session {
            user_id,
            email: claims.email,
        })
    }
}
