use super::elements::{Element, ElementValue};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

/// System attributes of a content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentItemSystem {
    pub id: String,
    pub name: String,
    pub codename: String,
    pub language: Option<String>,
    pub content_type: String,
    pub sitemap_locations: Vec<String>,
    pub last_modified: Option<DateTime<Utc>>,
}

/// A content item with its elements in API order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentItem {
    pub system: ContentItemSystem,
    pub elements: IndexMap<String, Element>,
}

impl ContentItem {
    pub fn codename(&self) -> &str {
        &self.system.codename
    }

    pub fn element(&self, codename: &str) -> Option<&Element> {
        self.elements.get(codename)
    }

    /// Value of a text, URL slug or custom element.
    pub fn text(&self, codename: &str) -> Option<&str> {
        match &self.element(codename)?.value {
            ElementValue::Text(value) | ElementValue::UrlSlug(value) | ElementValue::Custom(value) => {
                value.as_deref()
            }
            ElementValue::RichText(rich_text) => Some(rich_text.html.as_str()),
            _ => None,
        }
    }

    pub fn number(&self, codename: &str) -> Option<f64> {
        match self.element(codename)?.value {
            ElementValue::Number(value) => value,
            _ => None,
        }
    }

    pub fn date_time(&self, codename: &str) -> Option<DateTime<Utc>> {
        match self.element(codename)?.value {
            ElementValue::DateTime(value) => value,
            _ => None,
        }
    }

    /// Codenames referenced by a linked-items or rich text element.
    pub fn linked_item_codenames(&self, codename: &str) -> &[String] {
        match self.element(codename).map(|e| &e.value) {
            Some(ElementValue::ModularContent(codenames)) => codenames.as_slice(),
            Some(ElementValue::RichText(rich_text)) => rich_text.linked_items.as_slice(),
            _ => &[],
        }
    }
}
