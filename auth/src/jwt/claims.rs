use std::fmt;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::ClaimsError;

/// Numeric user identifier carried in the `sub` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    /// Parse a user ID from a subject claim.
    ///
    /// # Arguments
    /// * `subject` - Raw `sub` claim value
    ///
    /// # Returns
    /// Parsed UserId
    ///
    /// # Errors
    /// * `ClaimFormat` - Subject is not a decimal integer
    pub fn from_subject(subject: &str) -> Result<Self, ClaimsError> {
        subject.parse::<i64>().map(UserId).map_err(|e| {
            ClaimsError::ClaimFormat(format!(
                "subject '{}' is not a numeric identifier: {}",
                subject, e
            ))
        })
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Session claims carried by a signed token.
///
/// `iat` and `exp` are NumericDate values (Unix timestamps in seconds).
/// The remembered flag travels as the custom `isRemembered` claim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (string-encoded numeric user identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// "Remember me" session flag
    #[serde(
        rename = "isRemembered",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub remembered: Option<bool>,
}

impl Claims {
    /// Create claims for a subject issued at `iat` and expiring at `exp`.
    pub fn new(sub: impl ToString, iat: i64, exp: i64) -> Self {
        Self {
            sub: sub.to_string(),
            iat,
            exp,
            remembered: None,
        }
    }

    /// Set the remembered flag.
    pub fn with_remembered(mut self, remembered: bool) -> Self {
        self.remembered = Some(remembered);
        self
    }

    /// Parse the subject as a numeric user identifier.
    pub fn user_id(&self) -> Result<UserId, ClaimsError> {
        UserId::from_subject(&self.sub)
    }

    /// Remembered flag; an absent claim reads as `false`.
    pub fn is_remembered(&self) -> bool {
        self.remembered.unwrap_or(false)
    }

    /// Session lifetime, `exp - iat`.
    pub fn session_lifetime(&self) -> Duration {
        Duration::seconds(self.exp.saturating_sub(self.iat))
    }

    /// Session lifetime in milliseconds.
    pub fn session_lifetime_millis(&self) -> i64 {
        self.exp.saturating_sub(self.iat).saturating_mul(1000)
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.iat, 0)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Check if the session is expired at `current_timestamp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
