//! Delivery API response envelopes.

use super::{ContentItem, ContentType, TaxonomyGroup, TypeElement};
use indexmap::IndexMap;
use serde::Serialize;

/// Paging metadata of a listing, copied verbatim from the response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub skip: u32,
    pub limit: u32,
    pub count: u32,
    /// URL of the next page, `None` on the last page.
    pub next_page: Option<String>,
    /// Present only when the query asked for `includeTotalCount`.
    pub total_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryItemResponse {
    pub item: ContentItem,
    /// Items referenced by linked-items and rich text elements, by codename.
    pub linked_items: IndexMap<String, ContentItem>,
}

impl DeliveryItemResponse {
    /// Linked items of one element, in element order. Codenames missing
    /// from the response (e.g. beyond the requested depth) are skipped.
    pub fn linked_items_of(&self, element_codename: &str) -> Vec<&ContentItem> {
        resolve_linked(&self.item, element_codename, &self.linked_items)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryItemListingResponse {
    pub items: Vec<ContentItem>,
    pub linked_items: IndexMap<String, ContentItem>,
    pub pagination: Pagination,
}

impl DeliveryItemListingResponse {
    pub fn linked_items_of<'a>(
        &'a self,
        item: &'a ContentItem,
        element_codename: &str,
    ) -> Vec<&'a ContentItem> {
        resolve_linked(item, element_codename, &self.linked_items)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryTypeResponse {
    pub content_type: ContentType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryTypeListingResponse {
    pub types: Vec<ContentType>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryElementResponse {
    pub element: TypeElement,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryTaxonomyResponse {
    pub taxonomy: TaxonomyGroup,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryTaxonomyListingResponse {
    pub taxonomies: Vec<TaxonomyGroup>,
    pub pagination: Pagination,
}

fn resolve_linked<'a>(
    item: &'a ContentItem,
    element_codename: &str,
    linked_items: &'a IndexMap<String, ContentItem>,
) -> Vec<&'a ContentItem> {
    item.linked_item_codenames(element_codename)
        .iter()
        .filter_map(|codename| linked_items.get(codename))
        .collect()
}
