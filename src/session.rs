use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

pub const DEFAULT_GUEST_NAME: &str = "DemoUser";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Stable subject id for the signed-in identity
    pub sub: String,
    /// Display name used for post attribution
    pub name: String,
    pub exp: i64,
    pub iat: i64,
}

/// Signing material and token lifetime for the demo session scheme.
/// HS256 over a shared secret; good enough for a demonstration deployment,
/// not a real identity provider.
#[derive(Clone)]
pub struct SessionKeys {
    secret: String,
    session_hours: i64,
}

impl SessionKeys {
    pub fn new(secret: &str, session_hours: i64) -> SessionKeys {
        SessionKeys {
            secret: secret.to_string(),
            session_hours,
        }
    }

    pub fn issue(&self, name: &str) -> anyhow::Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: format!("guest-{}", uuid::Uuid::new_v4()),
            name: name.to_string(),
            exp: (now + Duration::hours(self.session_hours)).timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;
        Ok(token)
    }

    /// Any verification failure collapses to None: expired, malformed and
    /// wrongly-signed tokens are indistinguishable from no token at all.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        let key = DecodingKey::from_secret(self.secret.as_bytes());
        decode::<Claims>(token, &key, &Validation::default())
            .map(|data| data.claims)
            .ok()
    }

    /// Builds the request identity from an Authorization header value
    pub fn session_from(&self, authorization: Option<&str>) -> Session {
        let claims = authorization
            .and_then(bearer_token)
            .and_then(|token| self.verify(token));
        Session { claims }
    }
}

/// The narrow identity view handlers consume: signed-in or not, plus a
/// display name for attribution. Nothing else about the auth mechanism
/// leaks past this type.
pub struct Session {
    claims: Option<Claims>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.claims.is_some()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.claims.as_ref().map(|c| c.name.as_str())
    }
}

pub fn bearer_token(header_value: &str) -> Option<&str> {
    header_value.strip_prefix("Bearer ").map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> SessionKeys {
        SessionKeys::new("unit-test-secret", 24)
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let keys = keys();
        let token = keys.issue("DemoUser").unwrap();
        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.name, "DemoUser");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = keys().issue("DemoUser").unwrap();
        let other = SessionKeys::new("another-secret", 24);
        assert!(other.verify(&token).is_none());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(keys().verify("not-a-token").is_none());
        assert!(keys().verify("").is_none());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Issued already past its lifetime
        let keys = SessionKeys::new("unit-test-secret", -2);
        let token = keys.issue("DemoUser").unwrap();
        assert!(keys.verify(&token).is_none());
    }

    #[test]
    fn test_bearer_token_extraction() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(bearer_token("Basic dXNlcg=="), None);
        assert_eq!(bearer_token(""), None);
    }

    #[test]
    fn test_session_from_header() {
        let keys = keys();
        let token = keys.issue("Jane").unwrap();
        let header = format!("Bearer {}", token);

        let session = keys.session_from(Some(&header));
        assert!(session.is_authenticated());
        assert_eq!(session.display_name(), Some("Jane"));

        let anonymous = keys.session_from(None);
        assert!(!anonymous.is_authenticated());
        assert_eq!(anonymous.display_name(), None);
    }
}
