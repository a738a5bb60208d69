// src/query/item.rs
use super::url::path_segment;
use super::{Filter, QueryParameter, QueryState, Scope, SortOrder};
use crate::api::service::DeliveryQueryService;
use crate::error::SdkError;
use crate::model::{DeliveryItemListingResponse, DeliveryItemResponse};
use crate::types::Codename;
use std::sync::Arc;

/// `GET /items/{codename}`
#[derive(Debug, Clone)]
pub struct SingleItemQuery {
    state: QueryState,
    codename: Codename,
}

impl SingleItemQuery {
    pub(crate) fn new(service: Arc<DeliveryQueryService>, codename: Codename) -> Self {
        Self {
            state: QueryState::new(service),
            codename,
        }
    }

    /// Requests a language variant; overrides the client's default language.
    pub fn language(mut self, language: &str) -> Result<Self, SdkError> {
        self.state.push(QueryParameter::language(language)?);
        Ok(self)
    }

    /// Restricts the response to the listed elements.
    pub fn elements<I, S>(mut self, codenames: I) -> Result<Self, SdkError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.state.push(QueryParameter::elements(codenames)?);
        Ok(self)
    }

    /// How many levels of linked items to include.
    pub fn depth(mut self, depth: u32) -> Self {
        self.state.push(QueryParameter::Depth(depth));
        self
    }

    delivery_query_common!();

    pub fn url(&self) -> String {
        let path = format!("/items/{}", path_segment(self.codename.as_str()));
        self.state.url(&path, Scope::Items)
    }

    pub async fn get(self) -> Result<DeliveryItemResponse, SdkError> {
        let url = self.url();
        let headers = self.headers()?;
        log::debug!("Fetching content item '{}'", self.codename);
        self.state.service().get_single_item(url, headers).await
    }
}

/// `GET /items`, optionally scoped to one content type.
#[derive(Debug, Clone)]
pub struct MultipleItemsQuery {
    state: QueryState,
    content_type: Option<Codename>,
}

impl MultipleItemsQuery {
    pub(crate) fn new(service: Arc<DeliveryQueryService>) -> Self {
        Self {
            state: QueryState::new(service),
            content_type: None,
        }
    }

    /// Only items of this content type (`system.type=<codename>`).
    pub fn content_type(mut self, codename: &str) -> Result<Self, SdkError> {
        self.content_type = Some(Codename::new(codename)?);
        Ok(self)
    }

    /// Requests a language variant; overrides the client's default language.
    pub fn language(mut self, language: &str) -> Result<Self, SdkError> {
        self.state.push(QueryParameter::language(language)?);
        Ok(self)
    }

    /// Restricts each item to the listed elements.
    pub fn elements<I, S>(mut self, codenames: I) -> Result<Self, SdkError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.state.push(QueryParameter::elements(codenames)?);
        Ok(self)
    }

    /// How many levels of linked items to include.
    pub fn depth(mut self, depth: u32) -> Self {
        self.state.push(QueryParameter::Depth(depth));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.state.push(QueryParameter::Limit(limit));
        self
    }

    pub fn skip(mut self, skip: u32) -> Self {
        self.state.push(QueryParameter::Skip(skip));
        self
    }

    /// Sorts by a system attribute or element, e.g. `elements.title`.
    pub fn order_by(mut self, field: &str, order: SortOrder) -> Result<Self, SdkError> {
        self.state.push(QueryParameter::order(field, order)?);
        Ok(self)
    }

    /// Asks the API to report `pagination.total_count`.
    pub fn include_total_count(mut self) -> Self {
        self.state.push(QueryParameter::IncludeTotalCount);
        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.state.push(filter.into());
        self
    }

    /// Adds a prebuilt parameter.
    pub fn parameter(mut self, parameter: QueryParameter) -> Self {
        self.state.push(parameter);
        self
    }

    delivery_query_common!();

    pub fn url(&self) -> String {
        let scope = match &self.content_type {
            Some(content_type) => Scope::ItemsOfType(content_type),
            None => Scope::Items,
        };
        self.state.url("/items", scope)
    }

    pub async fn get(self) -> Result<DeliveryItemListingResponse, SdkError> {
        let url = self.url();
        let headers = self.headers()?;
        self.state.service().get_multiple_items(url, headers).await
    }
}
