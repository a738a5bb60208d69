// src/management/identifiers.rs
//! Ways to address a content item or a language in management URLs.

use crate::query::url::path_segment;
use crate::types::Codename;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItemIdentifier {
    InternalId(Uuid),
    Codename(Codename),
    ExternalId(String),
}

impl ContentItemIdentifier {
    /// Path segment(s) following `/items/`.
    pub fn path(&self) -> String {
        match self {
            Self::InternalId(id) => id.to_string(),
            Self::Codename(codename) => format!("codename/{}", path_segment(codename.as_str())),
            Self::ExternalId(external_id) => format!("external-id/{}", path_segment(external_id)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageIdentifier {
    InternalId(Uuid),
    Codename(Codename),
}

impl LanguageIdentifier {
    /// Path segment(s) following `/variants/`.
    pub fn path(&self) -> String {
        match self {
            Self::InternalId(id) => id.to_string(),
            Self::Codename(codename) => format!("codename/{}", path_segment(codename.as_str())),
        }
    }
}
