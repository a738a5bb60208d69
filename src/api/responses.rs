// src/api/responses.rs
//! Raw Delivery API response contracts.
//!
//! Fields are optional wherever the API may omit them; the mappers decide
//! which absences are fatal.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemContract {
    pub id: Option<String>,
    pub name: Option<String>,
    pub codename: Option<String>,
    pub language: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    #[serde(default)]
    pub sitemap_locations: Vec<String>,
    pub last_modified: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ElementContract {
    #[serde(rename = "type")]
    pub element_type: String,
    pub name: Option<String>,
    #[serde(default)]
    pub value: Value,
    pub taxonomy_group: Option<String>,
    #[serde(default)]
    pub images: IndexMap<String, RichTextImageContract>,
    #[serde(default)]
    pub links: IndexMap<String, RichTextLinkContract>,
    #[serde(default)]
    pub modular_content: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RichTextImageContract {
    pub image_id: Option<String>,
    pub url: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RichTextLinkContract {
    #[serde(rename = "type")]
    pub content_type: String,
    pub codename: String,
    pub url_slug: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceOptionContract {
    pub name: String,
    pub codename: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetContract {
    pub name: String,
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(default)]
    pub size: u64,
    pub description: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentItemContract {
    #[serde(default)]
    pub system: SystemContract,
    #[serde(default)]
    pub elements: IndexMap<String, ElementContract>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationContract {
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub count: u32,
    pub next_page: Option<String>,
    pub total_count: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemResponseContract {
    pub item: ContentItemContract,
    #[serde(default)]
    pub modular_content: IndexMap<String, ContentItemContract>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemListingResponseContract {
    #[serde(default)]
    pub items: Vec<ContentItemContract>,
    #[serde(default)]
    pub modular_content: IndexMap<String, ContentItemContract>,
    #[serde(default)]
    pub pagination: PaginationContract,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeElementContract {
    #[serde(rename = "type")]
    pub element_type: String,
    pub name: Option<String>,
    pub codename: Option<String>,
    #[serde(default)]
    pub options: Vec<ChoiceOptionContract>,
    pub taxonomy_group: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeResponseContract {
    #[serde(default)]
    pub system: SystemContract,
    #[serde(default)]
    pub elements: IndexMap<String, TypeElementContract>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeListingResponseContract {
    #[serde(default)]
    pub types: Vec<TypeResponseContract>,
    #[serde(default)]
    pub pagination: PaginationContract,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaxonomyTermContract {
    pub name: String,
    pub codename: String,
    #[serde(default)]
    pub terms: Vec<TaxonomyTermContract>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaxonomyResponseContract {
    #[serde(default)]
    pub system: SystemContract,
    #[serde(default)]
    pub terms: Vec<TaxonomyTermContract>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaxonomyListingResponseContract {
    #[serde(default)]
    pub taxonomies: Vec<TaxonomyResponseContract>,
    #[serde(default)]
    pub pagination: PaginationContract,
}

/// Error body returned with non-2xx statuses by both APIs.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorContract {
    pub message: String,
    pub request_id: Option<String>,
    pub error_code: Option<i64>,
    pub specific_code: Option<i64>,
}
