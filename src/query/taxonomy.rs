// src/query/taxonomy.rs
use super::url::path_segment;
use super::{QueryParameter, QueryState, Scope};
use crate::api::service::DeliveryQueryService;
use crate::error::SdkError;
use crate::model::{DeliveryTaxonomyListingResponse, DeliveryTaxonomyResponse};
use crate::types::Codename;
use std::sync::Arc;

/// `GET /taxonomies`
#[derive(Debug, Clone)]
pub struct TaxonomiesQuery {
    state: QueryState,
}

impl TaxonomiesQuery {
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
        self.state.url("/taxonomies", Scope::Plain)
    }

    pub async fn get(self) -> Result<DeliveryTaxonomyListingResponse, SdkError> {
        let url = self.url();
        let headers = self.headers()?;
        self.state.service().get_taxonomies(url, headers).await
    }
}

/// `GET /taxonomies/{codename}`
#[derive(Debug, Clone)]
pub struct TaxonomyQuery {
    state: QueryState,
    codename: Codename,
}

impl TaxonomyQuery {
    pub(crate) fn new(service: Arc<DeliveryQueryService>, codename: Codename) -> Self {
        Self {
            state: QueryState::new(service),
            codename,
        }
    }

    delivery_query_common!();

    pub fn url(&self) -> String {
        let path = format!("/taxonomies/{}", path_segment(self.codename.as_str()));
        self.state.url(&path, Scope::Plain)
    }

    pub async fn get(self) -> Result<DeliveryTaxonomyResponse, SdkError> {
        let url = self.url();
        let headers = self.headers()?;
        self.state.service().get_taxonomy(url, headers).await
    }
}
