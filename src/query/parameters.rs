// src/query/parameters.rs
//! Query-string parameters as a closed set of kinds.
//!
//! Names are sent verbatim (they carry the API's operator syntax), so they
//! may not contain query delimiters; values are form-encoded.

use super::filters::Filter;
use crate::types::{Codename, ValidationError};
use std::fmt;

pub(crate) const LANGUAGE_PARAMETER: &str = "language";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

/// Parameter kinds of which at most one may take effect per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SingletonKind {
    Language,
    Elements,
    Depth,
    Limit,
    Skip,
    IncludeTotalCount,
}

/// One `name=value` contribution to a query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryParameter {
    Language(Codename),
    Elements(Vec<Codename>),
    Depth(u32),
    Limit(u32),
    Skip(u32),
    Order { field: String, order: SortOrder },
    IncludeTotalCount,
    Filter(Filter),
    Custom { name: String, value: String },
}

impl QueryParameter {
    pub fn language(codename: &str) -> Result<Self, ValidationError> {
        Ok(Self::Language(Codename::new(codename)?))
    }

    pub fn elements<I, S>(codenames: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let codenames = codenames
            .into_iter()
            .map(|c| Codename::new(c.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        if codenames.is_empty() {
            return Err(ValidationError::EmptyValues("elements".to_string()));
        }
        Ok(Self::Elements(codenames))
    }

    pub fn order(field: &str, order: SortOrder) -> Result<Self, ValidationError> {
        let field = field.trim();
        if field.is_empty() {
            return Err(ValidationError::EmptyField("order field"));
        }
        Ok(Self::Order {
            field: field.to_string(),
            order,
        })
    }

    /// Arbitrary parameter the SDK has no dedicated method for.
    ///
    /// The name is mandatory; the value may be empty.
    pub fn custom(name: &str, value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::Custom {
            name: validate_name(name, "custom parameter name")?,
            value: value.into(),
        })
    }

    pub fn parameter_name(&self) -> String {
        match self {
            Self::Language(_) => LANGUAGE_PARAMETER.to_string(),
            Self::Elements(_) => "elements".to_string(),
            Self::Depth(_) => "depth".to_string(),
            Self::Limit(_) => "limit".to_string(),
            Self::Skip(_) => "skip".to_string(),
            Self::Order { .. } => "order".to_string(),
            Self::IncludeTotalCount => "includeTotalCount".to_string(),
            Self::Filter(filter) => filter.parameter_name(),
            Self::Custom { name, .. } => name.clone(),
        }
    }

    pub fn to_query_string(&self) -> String {
        let value = match self {
            Self::Language(codename) => encode_value(codename.as_str()),
            Self::Elements(codenames) => encode_values(codenames),
            Self::Depth(n) | Self::Limit(n) | Self::Skip(n) => n.to_string(),
            Self::Order { field, order } => format!("{}[{}]", encode_value(field), order),
            Self::IncludeTotalCount => "true".to_string(),
            Self::Filter(filter) => filter.encoded_value(),
            Self::Custom { value, .. } => encode_value(value),
        };
        format!("{}={}", self.parameter_name(), value)
    }

    pub fn singleton_kind(&self) -> Option<SingletonKind> {
        match self {
            Self::Language(_) => Some(SingletonKind::Language),
            Self::Elements(_) => Some(SingletonKind::Elements),
            Self::Depth(_) => Some(SingletonKind::Depth),
            Self::Limit(_) => Some(SingletonKind::Limit),
            Self::Skip(_) => Some(SingletonKind::Skip),
            Self::IncludeTotalCount => Some(SingletonKind::IncludeTotalCount),
            Self::Order { .. } | Self::Filter(_) | Self::Custom { .. } => None,
        }
    }
}

impl From<Filter> for QueryParameter {
    fn from(filter: Filter) -> Self {
        Self::Filter(filter)
    }
}

/// Trims a parameter name and rejects whitespace and query delimiters.
pub(crate) fn validate_name(name: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }

    if let Some(bad) = trimmed
        .chars()
        .find(|c| c.is_whitespace() || matches!(c, '&' | '=' | '#' | '?'))
    {
        return Err(ValidationError::InvalidParameterName {
            name: name.to_string(),
            reason: format!("contains forbidden character {:?}", bad),
        });
    }

    Ok(trimmed.to_string())
}

pub(crate) fn encode_value(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

pub(crate) fn encode_values<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(|v| encode_value(v.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}
