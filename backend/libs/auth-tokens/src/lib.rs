/// JWT issuance and verification shared by Ripple services.
///
/// Access tokens are short-lived and carry the caller identity (id and
/// display name); refresh tokens are long-lived and only good for minting a
/// new access token. Both are HS256-signed with a service-wide secret.
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Invalid token")]
    Invalid,

    #[error("Token expired")]
    Expired,

    #[error("Failed to generate token")]
    Creation,
}

pub type Result<T> = std::result::Result<T, TokenError>;

/// Which half of a token pair a given JWT is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    fn as_str(self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

/// Claims embedded in every token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    /// Display name, so services can render the caller without a lookup
    pub username: String,
    /// "access" or "refresh"
    pub token_type: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

impl Claims {
    pub fn user_id(&self) -> Result<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::Invalid)
    }
}

/// Access/refresh pair returned on login and registration
#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

/// Issues and verifies token pairs for one signing secret.
#[derive(Clone)]
pub struct TokenIssuer {
    secret: String,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: impl Into<String>, access_ttl_secs: i64, refresh_ttl_secs: i64) -> Self {
        Self {
            secret: secret.into(),
            access_ttl: Duration::seconds(access_ttl_secs),
            refresh_ttl: Duration::seconds(refresh_ttl_secs),
        }
    }

    /// Issue a fresh access/refresh pair for a user.
    pub fn issue_pair(&self, user_id: Uuid, username: &str) -> Result<TokenPair> {
        let access_token = self.issue(user_id, username, TokenKind::Access)?;
        let refresh_token = self.issue(user_id, username, TokenKind::Refresh)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in: self.access_ttl.num_seconds(),
        })
    }

    /// Issue a single token of the given kind.
    pub fn issue(&self, user_id: Uuid, username: &str, kind: TokenKind) -> Result<String> {
        let now = Utc::now();
        let ttl = match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        };
        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            token_type: kind.as_str().to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|_| TokenError::Creation)
    }

    /// Verify a token and check it is the expected kind.
    pub fn verify(&self, token: &str, expected: TokenKind) -> Result<Claims> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        })?;

        if data.claims.token_type != expected.as_str() {
            return Err(TokenError::Invalid);
        }

        Ok(data.claims)
    }

    /// Exchange a valid refresh token for a new access token.
    pub fn refresh(&self, refresh_token: &str) -> Result<String> {
        let claims = self.verify(refresh_token, TokenKind::Refresh)?;
        let user_id = claims.user_id()?;
        self.issue(user_id, &claims.username, TokenKind::Access)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new("test-secret", 900, 604800)
    }

    #[test]
    fn test_issue_and_verify_pair() {
        let user_id = Uuid::new_v4();
        let pair = issuer().issue_pair(user_id, "alice").unwrap();

        let claims = issuer().verify(&pair.access_token, TokenKind::Access).unwrap();
        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.token_type, "access");
    }

    #[test]
    fn test_access_token_rejected_as_refresh() {
        let pair = issuer().issue_pair(Uuid::new_v4(), "alice").unwrap();
        assert!(matches!(
            issuer().verify(&pair.access_token, TokenKind::Refresh),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_refresh_mints_new_access_token() {
        let user_id = Uuid::new_v4();
        let pair = issuer().issue_pair(user_id, "alice").unwrap();

        let access = issuer().refresh(&pair.refresh_token).unwrap();
        let claims = issuer().verify(&access, TokenKind::Access).unwrap();
        assert_eq!(claims.user_id().unwrap(), user_id);
    }

    #[test]
    fn test_refresh_rejects_access_token() {
        let pair = issuer().issue_pair(Uuid::new_v4(), "alice").unwrap();
        assert!(issuer().refresh(&pair.access_token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // Past the default 60s validation leeway
        let expired = TokenIssuer::new("test-secret", -120, -120);
        let pair = expired.issue_pair(Uuid::new_v4(), "alice").unwrap();
        assert!(matches!(
            issuer().verify(&pair.access_token, TokenKind::Access),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let pair = issuer().issue_pair(Uuid::new_v4(), "alice").unwrap();
        let other = TokenIssuer::new("other-secret", 900, 604800);
        assert!(matches!(
            other.verify(&pair.access_token, TokenKind::Access),
            Err(TokenError::Invalid)
        ));
    }
}
