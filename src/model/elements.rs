//! Element values of content items.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

/// A named element of a content item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub codename: String,
    pub name: String,
    pub value: ElementValue,
}

/// Typed element value, one variant per element kind of the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ElementValue {
    Text(Option<String>),
    RichText(RichText),
    Number(Option<f64>),
    MultipleChoice(Vec<ChoiceOption>),
    DateTime(Option<DateTime<Utc>>),
    Asset(Vec<Asset>),
    /// Codenames of linked items, resolvable through the response's linked items.
    ModularContent(Vec<String>),
    Taxonomy {
        group: Option<String>,
        terms: Vec<TaxonomyTermReference>,
    },
    UrlSlug(Option<String>),
    Custom(Option<String>),
    /// An element kind this SDK does not know yet.
    Unknown {
        element_type: String,
        raw: serde_json::Value,
    },
}

impl ElementValue {
    /// The API's name for this element kind.
    pub fn kind(&self) -> &str {
        match self {
            Self::Text(_) => "text",
            Self::RichText(_) => "rich_text",
            Self::Number(_) => "number",
            Self::MultipleChoice(_) => "multiple_choice",
            Self::DateTime(_) => "date_time",
            Self::Asset(_) => "asset",
            Self::ModularContent(_) => "modular_content",
            Self::Taxonomy { .. } => "taxonomy",
            Self::UrlSlug(_) => "url_slug",
            Self::Custom(_) => "custom",
            Self::Unknown { element_type, .. } => element_type,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RichText {
    /// HTML markup.
    pub html: String,
    pub images: IndexMap<String, RichTextImage>,
    pub links: IndexMap<String, RichTextLink>,
    /// Codenames of items embedded in the markup.
    pub linked_items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichTextImage {
    pub image_id: String,
    pub url: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichTextLink {
    pub item_id: String,
    pub codename: String,
    pub content_type: String,
    pub url_slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub name: String,
    pub codename: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Asset {
    pub name: String,
    pub content_type: String,
    pub size: u64,
    pub description: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxonomyTermReference {
    pub name: String,
    pub codename: String,
}
