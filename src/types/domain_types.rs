//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use std::fmt;

/// API key used as a bearer token (preview, secured delivery or management).
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Create a new API key with validation
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();

        if key.trim().is_empty() {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key cannot be empty".to_string(),
            });
        }

        if key.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key must not contain whitespace".to_string(),
            });
        }

        Ok(Self(key))
    }

    /// Get the API key as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Redact API key in display
        let prefix: String = self.0.chars().take(6).collect();
        write!(f, "{}...", prefix)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({})", self)
    }
}

/// A single HTTP header sent with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let value = value.into();

        if name.trim().is_empty() {
            return Err(ValidationError::EmptyField("header name"));
        }

        if name.chars().any(|c| c.is_whitespace() || c == ':' || c.is_control()) {
            return Err(ValidationError::InvalidHeader {
                name,
                reason: "name contains whitespace, ':' or control characters".to_string(),
            });
        }

        if value.chars().any(|c| c == '\r' || c == '\n') {
            return Err(ValidationError::InvalidHeader {
                name,
                reason: "value contains a line break".to_string(),
            });
        }

        Ok(Self { name, value })
    }

    /// Headers assembled by the SDK itself from already-validated parts.
    pub(crate) fn trusted(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
        }
    }
}
