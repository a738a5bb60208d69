use thiserror::Error;

mod domain_types;
mod ids;

pub use domain_types::*;
pub use ids::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid project ID: {0}")]
    InvalidProjectId(String),

    #[error("Invalid codename '{codename}': {reason}")]
    InvalidCodename { codename: String, reason: String },

    #[error("Invalid parameter name '{name}': {reason}")]
    InvalidParameterName { name: String, reason: String },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Empty value list for {0}")]
    EmptyValues(String),

    #[error("Duplicate label: {0}")]
    DuplicateLabel(String),

    #[error("Invalid API key format: {reason}")]
    InvalidApiKey { reason: String },

    #[error("{mode} mode is enabled but no {key} is configured")]
    MissingApiKey {
        mode: &'static str,
        key: &'static str,
    },

    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },
}
