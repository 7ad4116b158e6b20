use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim set carried by an access token.
///
/// The subject is the username the token was issued for; tokens without a
/// subject or expiry fail deserialization and therefore validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Create claims for a subject expiring `ttl_minutes` from now.
    ///
    /// # Arguments
    /// * `subject` - Username the token is issued for
    /// * `ttl_minutes` - Minutes until the token expires
    pub fn for_subject(subject: impl Into<String>, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.into(),
            exp: (now + Duration::minutes(ttl_minutes)).timestamp(),
            iat: Some(now.timestamp()),
        }
    }

    /// Check whether the token is expired at `current_timestamp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
