// src/error.rs
//! SDK error types.
//!
//! Every failure surfaced to callers falls into one of three kinds:
//! invalid caller input (raised before any network call), transport
//! failure (network error or non-2xx status) and malformed response
//! (body that does not satisfy the response contract).

use crate::types::ValidationError;
use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

/// Typed vocabulary for the HTTP status of a failed API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Request parameters were rejected (invalid filter, unknown language, ...)
    BadRequest,
    /// Missing or invalid API key
    Unauthorized,
    /// API key lacks access to the project or the operation
    Forbidden,
    /// The requested item, type, taxonomy or element does not exist
    NotFound,
    /// The resource already exists (e.g. duplicate external ID)
    Conflict,
    /// Too many requests in the current window
    RateLimited,
    /// The API failed internally or is unavailable
    ServerError,
    /// Any other status code
    HttpStatus(u16),
}

impl ApiErrorCode {
    pub fn from_http_status(status: StatusCode) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            429 => Self::RateLimited,
            500..=599 => Self::ServerError,
            other => Self::HttpStatus(other),
        }
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest => write!(f, "bad_request"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::NotFound => write!(f, "not_found"),
            Self::Conflict => write!(f, "conflict"),
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ServerError => write!(f, "server_error"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
        }
    }
}

/// Main SDK error type.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API returned an error ({code}, HTTP {status}): {message}")]
    Api {
        code: ApiErrorCode,
        status: StatusCode,
        message: String,
        request_id: Option<String>,
        error_code: Option<i64>,
        specific_code: Option<i64>,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Failed to deserialize response: {source}\nBody: {body}")]
    Deserialization {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("Failed to serialize request: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl SdkError {
    /// Caller input was rejected before any request was sent.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::MissingConfiguration(_))
    }

    /// The HTTP call failed: network error or non-2xx status.
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Api { .. })
    }

    /// The response did not satisfy its contract.
    pub fn is_malformed_response(&self) -> bool {
        matches!(self, Self::MalformedResponse(_) | Self::Deserialization { .. })
    }

    /// HTTP status of a failed API call, if the failure came from the API.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Network(e) => e.status(),
            _ => None,
        }
    }

    pub(crate) fn missing_field(resource: &str, field: &str) -> Self {
        Self::MalformedResponse(format!("{} is missing required field '{}'", resource, field))
    }
}

/// Result type alias for convenience
pub type Result<T, E = SdkError> = std::result::Result<T, E>;
