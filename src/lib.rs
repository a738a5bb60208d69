// src/lib.rs
//! kontent-sdk: typed client for the Kentico Cloud Delivery and Content
//! Management APIs.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Clients**: `DeliveryClient`, `management::ContentManagementClient`
//! - **Configuration**: `DeliveryClientConfig`, `QueryConfig`
//! - **Queries**: fluent builders returned by the clients, `Filter`, `QueryParameter`
//! - **Domain model**: `ContentItem`, `ContentType`, `TaxonomyGroup` and response envelopes
//! - **Domain types**: `ProjectId`, `Codename`, `ApiKey`, `Header`
//! - **Transport**: `HttpService`, `ReqwestHttpService`
//! - **Error handling**: `SdkError`, `ValidationError`
//! - **Concurrency**: `combine::zip_all`

mod api;
mod client;
pub mod combine;
mod config;
mod constants;
mod error;
pub mod management;
mod mapping;
mod model;
mod query;
mod types;

// --- Error Handling ---
pub use crate::error::{ApiErrorCode, Result, SdkError};
pub use crate::types::ValidationError;

// --- Clients & Configuration ---
pub use crate::client::DeliveryClient;
pub use crate::config::{DeliveryClientConfig, QueryConfig};

// --- Queries ---
pub use crate::query::{
    build_query_string, build_url, resolve_parameters, ElementQuery, Filter, FilterOperator,
    MultipleItemsQuery, MultipleTypesQuery, QueryParameter, SingleItemQuery, SingleTypeQuery,
    SingletonKind, SortOrder, TaxonomiesQuery, TaxonomyQuery,
};

// --- Domain Model ---
pub use crate::model::{
    Asset, ChoiceOption, ContentItem, ContentItemSystem, ContentType, DeliveryElementResponse,
    DeliveryItemListingResponse, DeliveryItemResponse, DeliveryTaxonomyListingResponse,
    DeliveryTaxonomyResponse, DeliveryTypeListingResponse, DeliveryTypeResponse, Element,
    ElementValue, Pagination, ResourceSystem, RichText, RichTextImage, RichTextLink,
    TaxonomyGroup, TaxonomyTerm, TaxonomyTermReference, TypeElement,
};

// --- Domain Types ---
pub use crate::types::{ApiKey, Codename, Header, ProjectId};

// --- Transport ---
pub use crate::api::{
    parse_api_response, ApiResponse, HttpMethod, HttpRequest, HttpService, ReqwestHttpService,
};
pub use crate::constants::{
    DELIVERY_BASE_URL, DELIVERY_PREVIEW_BASE_URL, MANAGEMENT_BASE_URL, SDK_ID_HEADER,
};
