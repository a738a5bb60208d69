// src/management/models.rs
use crate::error::SdkError;
use crate::types::{Codename, ValidationError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// Points at another object by internal id, codename or external id.
///
/// Serializes as a single-key object, e.g. `{"codename": "article"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reference {
    Id(Uuid),
    Codename(Codename),
    ExternalId(String),
}

impl Reference {
    pub fn codename(codename: &str) -> Result<Self, SdkError> {
        Ok(Self::Codename(Codename::new(codename)?))
    }

    pub fn external_id(external_id: &str) -> Result<Self, SdkError> {
        let external_id = external_id.trim();
        if external_id.is_empty() {
            return Err(ValidationError::EmptyField("external_id").into());
        }
        Ok(Self::ExternalId(external_id.to_string()))
    }
}

impl From<Uuid> for Reference {
    fn from(id: Uuid) -> Self {
        Self::Id(id)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id:{}", id),
            Self::Codename(codename) => write!(f, "codename:{}", codename),
            Self::ExternalId(external_id) => write!(f, "external_id:{}", external_id),
        }
    }
}

/// A content item as seen by the Content Management API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManagementContentItem {
    pub id: Uuid,
    pub name: String,
    pub codename: String,
    pub content_type: Option<Reference>,
    pub sitemap_locations: Vec<Reference>,
    pub external_id: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
}

/// Continuation metadata of a management listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContinuationPagination {
    /// Pass to `continuation_token()` to fetch the next page.
    pub continuation_token: Option<String>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentItemListingResponse {
    pub items: Vec<ManagementContentItem>,
    pub pagination: ContinuationPagination,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewContentItemResponse {
    pub item: ManagementContentItem,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddContentItemResponse {
    pub item: ManagementContentItem,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageVariantElement {
    pub element: Option<Reference>,
    pub value: Value,
}

/// Content of one item in one language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageVariant {
    pub item: Option<Reference>,
    pub language: Option<Reference>,
    pub last_modified: Option<DateTime<Utc>>,
    pub elements: Vec<LanguageVariantElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewLanguageVariantResponse {
    pub variant: LanguageVariant,
}

/// Data for creating a content item.
///
/// ```
/// use kontent_sdk::management::{AddContentItemData, Reference};
///
/// let data = AddContentItemData::new("On Roasts", Reference::codename("article")?)?
///     .with_external_id("59713")?;
/// # Ok::<(), kontent_sdk::SdkError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddContentItemData {
    pub(crate) name: String,
    pub(crate) content_type: Reference,
    pub(crate) external_id: Option<String>,
    pub(crate) sitemap_locations: Vec<Reference>,
}

impl AddContentItemData {
    pub fn new(name: &str, content_type: Reference) -> Result<Self, SdkError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyField("name").into());
        }
        Ok(Self {
            name: name.to_string(),
            content_type,
            external_id: None,
            sitemap_locations: Vec::new(),
        })
    }

    pub fn with_external_id(self, external_id: &str) -> Result<Self, SdkError> {
        let external_id = external_id.trim();
        if external_id.is_empty() {
            return Err(ValidationError::EmptyField("external_id").into());
        }
        Ok(Self {
            external_id: Some(external_id.to_string()),
            ..self
        })
    }

    pub fn with_sitemap_location(mut self, location: Reference) -> Self {
        self.sitemap_locations.push(location);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> &Reference {
        &self.content_type
    }
}
