use super::ValidationError;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Project identifier, always a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// Parses a hyphenated or simple UUID string.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyField("project_id"));
        }

        Uuid::parse_str(trimmed)
            .map(Self)
            .map_err(|e| ValidationError::InvalidProjectId(format!("{}: {}", trimmed, e)))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for ProjectId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_hyphenated())
    }
}

/// A codename as used by the API to address items, types, elements,
/// taxonomies and languages.
///
/// Codenames become path segments and parameter values, so they must be
/// non-empty and free of whitespace and URL delimiters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codename(String);

impl Codename {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::EmptyField("codename"));
        }

        if let Some(bad) = trimmed
            .chars()
            .find(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '&'))
        {
            return Err(ValidationError::InvalidCodename {
                codename: value.clone(),
                reason: format!("contains forbidden character {:?}", bad),
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wraps a value that already came back from the API.
    pub(crate) fn from_api(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Codename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Codename {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Codename {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}
