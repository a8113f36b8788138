use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Lifetime applied to access tokens when the caller configures none.
pub const DEFAULT_TOKEN_LIFETIME_MINUTES: i64 = 15;

/// Access token claims.
///
/// `exp` is mandatory: a token without an expiration can neither be built
/// nor decoded into this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username of the authenticated user)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Create claims issued now that expire after `lifetime`.
    ///
    /// # Errors
    /// * `EncodingFailed` - The expiration does not fit in a timestamp
    pub fn expiring_in(lifetime: Duration) -> Result<Self, JwtError> {
        let now = Utc::now();
        let expires_at = now.checked_add_signed(lifetime).ok_or_else(|| {
            JwtError::EncodingFailed(format!("token lifetime {lifetime} is out of range"))
        })?;

        Ok(Self {
            sub: None,
            exp: expires_at.timestamp(),
            iat: Some(now.timestamp()),
        })
    }

    /// Create claims for an authenticated subject.
    ///
    /// # Arguments
    /// * `subject` - Username the token is issued to
    /// * `lifetime` - Time until the token expires
    ///
    /// # Returns
    /// Claims with sub, exp and iat set
    ///
    /// # Errors
    /// * `EncodingFailed` - The expiration does not fit in a timestamp
    pub fn for_subject(subject: impl ToString, lifetime: Duration) -> Result<Self, JwtError> {
        Ok(Self::expiring_in(lifetime)?.with_subject(subject))
    }

    /// Set subject.
    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = exp;
        self
    }

    /// Set issued at (Unix timestamp).
    pub fn with_issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Subject claim, if present.
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref()
    }

    /// Check if token is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

impl Default for Claims {
    fn default() -> Self {
        let now = Utc::now().timestamp();

        Self {
            sub: None,
            exp: now + DEFAULT_TOKEN_LIFETIME_MINUTES * 60,
            iat: Some(now),
        }
    }
}
