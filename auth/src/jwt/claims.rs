use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Session token claims.
///
/// Identifies the user the token was issued to and when it stops being valid.
/// Timestamps are Unix seconds, as in RFC 7519.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Display name of the subject
    pub name: String,

    /// Email of the subject
    pub email: String,

    /// Issued at
    pub iat: i64,

    /// Expiration time
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user, issued now and valid for `ttl`.
    pub fn for_user(
        user_id: impl ToString,
        name: impl Into<String>,
        email: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self::issued_at(user_id, name, email, Utc::now(), ttl)
    }

    /// Create claims issued at an explicit instant.
    ///
    /// The expiry is always `issued_at + ttl`.
    pub fn issued_at(
        user_id: impl ToString,
        name: impl Into<String>,
        email: impl Into<String>,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            sub: user_id.to_string(),
            name: name.into(),
            email: email.into(),
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }

    /// Check whether the token has expired at `current_timestamp`.
    ///
    /// A token is no longer valid from the second of its expiry onwards.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_user() {
        let claims = Claims::for_user(42, "Aqsa", "aqsa@gmail.com", Duration::hours(6));

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.name, "Aqsa");
        assert_eq!(claims.email, "aqsa@gmail.com");
        assert_eq!(claims.exp - claims.iat, 6 * 60 * 60);
    }

    #[test]
    fn test_issued_at() {
        let issued_at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let claims = Claims::issued_at(1, "Aqsa", "aqsa@gmail.com", issued_at, Duration::minutes(5));

        assert_eq!(claims.iat, 1_700_000_000);
        assert_eq!(claims.exp, 1_700_000_300);
    }

    #[test]
    fn test_is_expired() {
        let issued_at = DateTime::from_timestamp(1000, 0).unwrap();
        let claims = Claims::issued_at(1, "Aqsa", "aqsa@gmail.com", issued_at, Duration::seconds(100));

        assert!(!claims.is_expired(1000)); // Just issued
        assert!(!claims.is_expired(1099)); // Last valid second
        assert!(claims.is_expired(1100)); // Exactly at expiration
        assert!(claims.is_expired(5000)); // Long expired
    }
}
