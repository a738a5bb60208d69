// src/query/types.rs
use super::url::path_segment;
use super::{QueryParameter, QueryState, Scope};
use crate::api::service::DeliveryQueryService;
use crate::error::SdkError;
use crate::model::{DeliveryElementResponse, DeliveryTypeListingResponse, DeliveryTypeResponse};
use crate::types::Codename;
use std::sync::Arc;

/// `GET /types`
#[derive(Debug, Clone)]
pub struct MultipleTypesQuery {
    state: QueryState,
}

impl MultipleTypesQuery {
    pub(crate) fn new(service: Arc<DeliveryQueryService>) -> Self {
        Self {
            state: QueryState::new(service),
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.state.push(QueryParameter::Limit(limit));
        self
    }

    pub fn skip(mut self, skip: u32) -> Self {
        self.state.push(QueryParameter::Skip(skip));
        self
    }

    delivery_query_common!();

    pub fn url(&self) -> String {
        self.state.url("/types", Scope::Plain)
    }

    pub async fn get(self) -> Result<DeliveryTypeListingResponse, SdkError> {
        let url = self.url();
        let headers = self.headers()?;
        self.state.service().get_multiple_types(url, headers).await
    }
}

/// `GET /types/{codename}`
#[derive(Debug, Clone)]
pub struct SingleTypeQuery {
    state: QueryState,
    codename: Codename,
}

impl SingleTypeQuery {
    pub(crate) fn new(service: Arc<DeliveryQueryService>, codename: Codename) -> Self {
        Self {
            state: QueryState::new(service),
            codename,
        }
    }

    delivery_query_common!();

    pub fn url(&self) -> String {
        let path = format!("/types/{}", path_segment(self.codename.as_str()));
        self.state.url(&path, Scope::Plain)
    }

    pub async fn get(self) -> Result<DeliveryTypeResponse, SdkError> {
        let url = self.url();
        let headers = self.headers()?;
        self.state.service().get_single_type(url, headers).await
    }
}

/// `GET /types/{type}/elements/{element}`
#[derive(Debug, Clone)]
pub struct ElementQuery {
    state: QueryState,
    content_type: Codename,
    element: Codename,
}

impl ElementQuery {
    pub(crate) fn new(
        service: Arc<DeliveryQueryService>,
        content_type: Codename,
        element: Codename,
    ) -> Self {
        Self {
            state: QueryState::new(service),
            content_type,
            element,
        }
    }

    delivery_query_common!();

    pub fn url(&self) -> String {
        let path = format!(
            "/types/{}/elements/{}",
            path_segment(self.content_type.as_str()),
            path_segment(self.element.as_str())
        );
        self.state.url(&path, Scope::Plain)
    }

    pub async fn get(self) -> Result<DeliveryElementResponse, SdkError> {
        let url = self.url();
        let headers = self.headers()?;
        self.state.service().get_element(url, headers).await
    }
}
