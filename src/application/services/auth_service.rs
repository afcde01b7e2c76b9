//! Authentication service for API key validation.

use crate::error::{AppError, INVALID_CREDENTIALS};

/// Validates request-supplied API keys against the configured secret.
///
/// The secret is loaded once at startup. When no secret is configured every
/// request is rejected.
#[derive(Debug, Clone)]
pub struct AuthService {
    api_key: Option<String>,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// An empty key is treated the same as a missing one.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    /// Returns whether a secret is configured at all.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Checks a request-supplied key and returns it on exact match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] if:
    /// - no key was supplied
    /// - no secret is configured
    /// - the key does not match the secret
    pub fn authenticate<'a>(&self, provided: Option<&'a str>) -> Result<&'a str, AppError> {
        match (self.api_key.as_deref(), provided) {
            (Some(expected), Some(key)) if key == expected => Ok(key),
            _ => Err(AppError::forbidden(INVALID_CREDENTIALS)),
        }
    }
}
