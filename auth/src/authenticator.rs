use std::sync::OnceLock;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::Algorithm;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::DEFAULT_TOKEN_LIFETIME_MINUTES;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Token type reported alongside issued access tokens.
pub const BEARER_TOKEN_TYPE: &str = "bearer";

/// Authentication coordinator combining password verification and JWT generation.
///
/// Storage agnostic: callers look up the stored hash and pass it in, or pass
/// `None` when no account matched so the rejection costs the same time.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_lifetime: Duration,
    dummy_hash: OnceLock<String>,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
    /// Always "bearer"
    pub token_type: &'static str,
    /// Absolute expiration of the token
    pub expires_at: DateTime<Utc>,
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator using HS256 and the default token lifetime.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self::from_parts(PasswordHasher::new(), JwtHandler::new(jwt_secret))
    }

    /// Create an authenticator with an explicit signing algorithm.
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - Algorithm is not HMAC based
    pub fn with_algorithm(jwt_secret: &[u8], algorithm: Algorithm) -> Result<Self, JwtError> {
        Ok(Self::from_parts(
            PasswordHasher::new(),
            JwtHandler::with_algorithm(jwt_secret, algorithm)?,
        ))
    }

    /// Assemble an authenticator from already configured components.
    pub fn from_parts(password_hasher: PasswordHasher, jwt_handler: JwtHandler) -> Self {
        Self {
            password_hasher,
            jwt_handler,
            token_lifetime: Duration::minutes(DEFAULT_TOKEN_LIFETIME_MINUTES),
            dummy_hash: OnceLock::new(),
        }
    }

    /// Override the access token lifetime.
    pub fn with_token_lifetime(mut self, lifetime: Duration) -> Self {
        self.token_lifetime = lifetime;
        self
    }

    /// Override the password hasher (e.g. to change the bcrypt cost).
    pub fn with_password_hasher(mut self, password_hasher: PasswordHasher) -> Self {
        self.password_hasher = password_hasher;
        self.dummy_hash = OnceLock::new();
        self
    }

    /// Lifetime applied to issued tokens.
    pub fn token_lifetime(&self) -> Duration {
        self.token_lifetime
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a plaintext password against a stored hash.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and generate a JWT token for `subject`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash, `None` when no account matched
    /// * `subject` - Subject to embed in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - No account, or the password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: Option<&str>,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.check_credentials(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_token(subject)?)
    }

    /// Verify a password against an optional stored hash.
    ///
    /// When `stored_hash` is `None` the password is still checked against a
    /// dummy hash of the same cost and the result is always false.
    pub fn check_credentials(&self, password: &str, stored_hash: Option<&str>) -> bool {
        match stored_hash {
            Some(hash) => self.password_hasher.verify(password, hash),
            None => {
                if let Some(dummy) = self.dummy_hash() {
                    let _ = self.password_hasher.verify(password, dummy);
                }
                false
            }
        }
    }

    fn dummy_hash(&self) -> Option<&str> {
        if let Some(hash) = self.dummy_hash.get() {
            return Some(hash.as_str());
        }

        match self.password_hasher.hash("timing-equalisation-placeholder") {
            Ok(hash) => Some(self.dummy_hash.get_or_init(|| hash).as_str()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to prepare dummy password hash");
                None
            }
        }
    }

    /// Generate a JWT token without password verification.
    ///
    /// # Arguments
    /// * `subject` - Subject to embed in the token
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(&self, subject: &str) -> Result<AuthenticationResult, JwtError> {
        let claims = Claims::for_subject(subject, self.token_lifetime)?;
        let access_token = self.jwt_handler.encode(&claims)?;
        let expires_at = DateTime::from_timestamp(claims.exp, 0).unwrap_or_else(Utc::now);

        Ok(AuthenticationResult {
            access_token,
            token_type: BEARER_TOKEN_TYPE,
            expires_at,
        })
    }

    /// Validate and decode JWT token.
    ///
    /// # Errors
    /// * `InvalidToken` - Token validation or decoding failed
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }
}
