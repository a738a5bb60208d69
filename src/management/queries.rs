// src/management/queries.rs
//! Content Management queries.
//!
//! Queries that address one item (or one language variant) start with an
//! identifier step that only offers the valid ways to name the target.

use super::contracts::AddContentItemContract;
use super::identifiers::{ContentItemIdentifier, LanguageIdentifier};
use super::models::{
    AddContentItemData, AddContentItemResponse, ContentItemListingResponse,
    ViewContentItemResponse, ViewLanguageVariantResponse,
};
use super::service::ManagementQueryService;
use crate::config::ManagementQueryConfig;
use crate::error::SdkError;
use crate::types::{Codename, Header, ValidationError};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Configuration calls every management query supports.
macro_rules! management_query_common {
    () => {
        pub fn query_config(mut self, config: ManagementQueryConfig) -> Self {
            self.query_config = config;
            self
        }
    };
}

/// Chooses how the target content item is identified.
pub struct ContentItemIdentifierQuery<T> {
    build: Box<dyn FnOnce(ContentItemIdentifier) -> T + Send>,
}

impl<T> fmt::Debug for ContentItemIdentifierQuery<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentItemIdentifierQuery").finish_non_exhaustive()
    }
}

impl<T> ContentItemIdentifierQuery<T> {
    pub(crate) fn new(build: impl FnOnce(ContentItemIdentifier) -> T + Send + 'static) -> Self {
        Self {
            build: Box::new(build),
        }
    }

    pub fn by_internal_id(self, id: Uuid) -> T {
        self.by_identifier(ContentItemIdentifier::InternalId(id))
    }

    pub fn by_codename(self, codename: &str) -> Result<T, SdkError> {
        let codename = Codename::new(codename)?;
        Ok(self.by_identifier(ContentItemIdentifier::Codename(codename)))
    }

    pub fn by_external_id(self, external_id: &str) -> Result<T, SdkError> {
        let external_id = external_id.trim();
        if external_id.is_empty() {
            return Err(ValidationError::EmptyField("external_id").into());
        }
        Ok(self.by_identifier(ContentItemIdentifier::ExternalId(external_id.to_string())))
    }

    pub fn by_identifier(self, identifier: ContentItemIdentifier) -> T {
        (self.build)(identifier)
    }
}

/// Chooses the language of a variant.
pub struct LanguageIdentifierQuery<T> {
    build: Box<dyn FnOnce(LanguageIdentifier) -> T + Send>,
}

impl<T> fmt::Debug for LanguageIdentifierQuery<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageIdentifierQuery").finish_non_exhaustive()
    }
}

impl<T> LanguageIdentifierQuery<T> {
    pub(crate) fn new(build: impl FnOnce(LanguageIdentifier) -> T + Send + 'static) -> Self {
        Self {
            build: Box::new(build),
        }
    }

    pub fn by_language_id(self, id: Uuid) -> T {
        (self.build)(LanguageIdentifier::InternalId(id))
    }

    pub fn by_language_codename(self, codename: &str) -> Result<T, SdkError> {
        let codename = Codename::new(codename)?;
        Ok((self.build)(LanguageIdentifier::Codename(codename)))
    }
}

/// `GET /items`
#[derive(Debug, Clone)]
pub struct ListContentItemsQuery {
    service: Arc<ManagementQueryService>,
    query_config: ManagementQueryConfig,
    continuation_token: Option<String>,
}

impl ListContentItemsQuery {
    pub(crate) fn new(service: Arc<ManagementQueryService>) -> Self {
        Self {
            service,
            query_config: ManagementQueryConfig::default(),
            continuation_token: None,
        }
    }

    /// Continues a previous listing; sent as the `X-Continuation` header.
    pub fn continuation_token(mut self, token: &str) -> Result<Self, SdkError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ValidationError::EmptyField("continuation token").into());
        }
        self.continuation_token = Some(token.to_string());
        Ok(self)
    }

    management_query_common!();

    pub fn url(&self) -> String {
        self.service.url("/items")
    }

    pub fn headers(&self) -> Vec<Header> {
        self.service
            .headers(&self.query_config, self.continuation_token.as_deref())
    }

    pub async fn get(self) -> Result<ContentItemListingResponse, SdkError> {
        let url = self.url();
        let headers = self.headers();
        self.service.list_content_items(url, headers).await
    }
}

/// `GET /items/{identifier}`
#[derive(Debug, Clone)]
pub struct ViewContentItemQuery {
    service: Arc<ManagementQueryService>,
    query_config: ManagementQueryConfig,
    identifier: ContentItemIdentifier,
}

impl ViewContentItemQuery {
    pub(crate) fn new(service: Arc<ManagementQueryService>, identifier: ContentItemIdentifier) -> Self {
        Self {
            service,
            query_config: ManagementQueryConfig::default(),
            identifier,
        }
    }

    management_query_common!();

    pub fn url(&self) -> String {
        self.service.url(&format!("/items/{}", self.identifier.path()))
    }

    pub fn headers(&self) -> Vec<Header> {
        self.service.headers(&self.query_config, None)
    }

    pub async fn get(self) -> Result<ViewContentItemResponse, SdkError> {
        let url = self.url();
        let headers = self.headers();
        self.service.view_content_item(url, headers).await
    }
}

/// `POST /items`
#[derive(Debug, Clone)]
pub struct AddContentItemQuery {
    service: Arc<ManagementQueryService>,
    query_config: ManagementQueryConfig,
    data: AddContentItemData,
}

impl AddContentItemQuery {
    pub(crate) fn new(service: Arc<ManagementQueryService>, data: AddContentItemData) -> Self {
        Self {
            service,
            query_config: ManagementQueryConfig::default(),
            data,
        }
    }

    management_query_common!();

    pub fn url(&self) -> String {
        self.service.url("/items")
    }

    pub fn headers(&self) -> Vec<Header> {
        self.service.headers(&self.query_config, None)
    }

    pub async fn get(self) -> Result<AddContentItemResponse, SdkError> {
        let url = self.url();
        let headers = self.headers();
        let body = AddContentItemContract {
            name: self.data.name,
            content_type: self.data.content_type,
            external_id: self.data.external_id,
            sitemap_locations: self.data.sitemap_locations,
        };
        log::debug!("Adding content item '{}'", body.name);
        self.service.add_content_item(url, headers, &body).await
    }
}

/// `GET /items/{item}/variants/{language}`
#[derive(Debug, Clone)]
pub struct ViewLanguageVariantQuery {
    service: Arc<ManagementQueryService>,
    query_config: ManagementQueryConfig,
    item: ContentItemIdentifier,
    language: LanguageIdentifier,
}

impl ViewLanguageVariantQuery {
    pub(crate) fn new(
        service: Arc<ManagementQueryService>,
        item: ContentItemIdentifier,
        language: LanguageIdentifier,
    ) -> Self {
        Self {
            service,
            query_config: ManagementQueryConfig::default(),
            item,
            language,
        }
    }

    management_query_common!();

    pub fn url(&self) -> String {
        self.service.url(&format!(
            "/items/{}/variants/{}",
            self.item.path(),
            self.language.path()
        ))
    }

    pub fn headers(&self) -> Vec<Header> {
        self.service.headers(&self.query_config, None)
    }

    pub async fn get(self) -> Result<ViewLanguageVariantResponse, SdkError> {
        let url = self.url();
        let headers = self.headers();
        self.service.view_language_variant(url, headers).await
    }
}
