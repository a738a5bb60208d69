// src/management/mod.rs
//! Content Management API: list, view and create content items, and read
//! language variants.

mod client;
mod contracts;
mod identifiers;
mod mapper;
mod models;
mod queries;
mod service;

pub use crate::config::{ManagementClientConfig, ManagementQueryConfig};
pub use client::ContentManagementClient;
pub use identifiers::{ContentItemIdentifier, LanguageIdentifier};
pub use models::{
    AddContentItemData, AddContentItemResponse, ContentItemListingResponse,
    ContinuationPagination, LanguageVariant, LanguageVariantElement, ManagementContentItem,
    Reference, ViewContentItemResponse, ViewLanguageVariantResponse,
};
pub use queries::{
    AddContentItemQuery, ContentItemIdentifierQuery, LanguageIdentifierQuery,
    ListContentItemsQuery, ViewContentItemQuery, ViewLanguageVariantQuery,
};
