// src/management/contracts.rs
//! Raw Content Management API contracts.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reference to another object as returned by the API. Usually only the
/// internal id is present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReferenceContract {
    pub id: Option<String>,
    pub codename: Option<String>,
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentItemContract {
    pub id: Option<String>,
    pub name: Option<String>,
    pub codename: Option<String>,
    #[serde(rename = "type", default)]
    pub content_type: ReferenceContract,
    #[serde(default)]
    pub sitemap_locations: Vec<ReferenceContract>,
    pub external_id: Option<String>,
    pub last_modified: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationContract {
    pub continuation_token: Option<String>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentItemListingResponseContract {
    #[serde(default)]
    pub items: Vec<ContentItemContract>,
    #[serde(default)]
    pub pagination: PaginationContract,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageVariantElementContract {
    #[serde(default)]
    pub element: ReferenceContract,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageVariantContract {
    #[serde(default)]
    pub item: ReferenceContract,
    #[serde(default)]
    pub language: ReferenceContract,
    pub last_modified: Option<String>,
    #[serde(default)]
    pub elements: Vec<LanguageVariantElementContract>,
}

/// Body of `POST /items`.
#[derive(Debug, Clone, Serialize)]
pub struct AddContentItemContract {
    pub name: String,
    #[serde(rename = "type")]
    pub content_type: super::Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sitemap_locations: Vec<super::Reference>,
}
