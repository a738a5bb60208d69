// src/api/service.rs
//! Executes assembled Delivery API requests.

use super::client::{HttpRequest, HttpService};
use super::parser::parse_api_response;
use super::responses::{
    ItemListingResponseContract, ItemResponseContract, TaxonomyListingResponseContract,
    TaxonomyResponseContract, TypeElementContract, TypeListingResponseContract,
    TypeResponseContract,
};
use crate::config::DeliveryClientConfig;
use crate::error::SdkError;
use crate::mapping;
use crate::model::{
    DeliveryElementResponse, DeliveryItemListingResponse, DeliveryItemResponse,
    DeliveryTaxonomyListingResponse, DeliveryTaxonomyResponse, DeliveryTypeListingResponse,
    DeliveryTypeResponse,
};
use crate::types::Header;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

/// Sends one request and decodes the body into its contract.
pub(crate) async fn execute<C>(http: &dyn HttpService, request: HttpRequest) -> Result<C, SdkError>
where
    C: DeserializeOwned,
{
    let response = http.send(request).await?;
    parse_api_response(response)
}

/// Shared by every query created from one `DeliveryClient`.
pub(crate) struct DeliveryQueryService {
    config: DeliveryClientConfig,
    http: Arc<dyn HttpService>,
}

impl fmt::Debug for DeliveryQueryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeliveryQueryService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl DeliveryQueryService {
    pub(crate) fn new(config: DeliveryClientConfig, http: Arc<dyn HttpService>) -> Self {
        Self { config, http }
    }

    pub(crate) fn config(&self) -> &DeliveryClientConfig {
        &self.config
    }

    async fn get<C: DeserializeOwned>(&self, url: String, headers: Vec<Header>) -> Result<C, SdkError> {
        execute(self.http.as_ref(), HttpRequest::get(url, headers)).await
    }

    pub(crate) async fn get_single_item(
        &self,
        url: String,
        headers: Vec<Header>,
    ) -> Result<DeliveryItemResponse, SdkError> {
        let contract: ItemResponseContract = self.get(url, headers).await?;
        mapping::map_item_response(contract)
    }

    pub(crate) async fn get_multiple_items(
        &self,
        url: String,
        headers: Vec<Header>,
    ) -> Result<DeliveryItemListingResponse, SdkError> {
        let contract: ItemListingResponseContract = self.get(url, headers).await?;
        mapping::map_item_listing_response(contract)
    }

    pub(crate) async fn get_single_type(
        &self,
        url: String,
        headers: Vec<Header>,
    ) -> Result<DeliveryTypeResponse, SdkError> {
        let contract: TypeResponseContract = self.get(url, headers).await?;
        mapping::map_type_response(contract)
    }

    pub(crate) async fn get_multiple_types(
        &self,
        url: String,
        headers: Vec<Header>,
    ) -> Result<DeliveryTypeListingResponse, SdkError> {
        let contract: TypeListingResponseContract = self.get(url, headers).await?;
        mapping::map_type_listing_response(contract)
    }

    pub(crate) async fn get_element(
        &self,
        url: String,
        headers: Vec<Header>,
    ) -> Result<DeliveryElementResponse, SdkError> {
        let contract: TypeElementContract = self.get(url, headers).await?;
        mapping::map_element_response(contract)
    }

    pub(crate) async fn get_taxonomy(
        &self,
        url: String,
        headers: Vec<Header>,
    ) -> Result<DeliveryTaxonomyResponse, SdkError> {
        let contract: TaxonomyResponseContract = self.get(url, headers).await?;
        mapping::map_taxonomy_response(contract)
    }

    pub(crate) async fn get_taxonomies(
        &self,
        url: String,
        headers: Vec<Header>,
    ) -> Result<DeliveryTaxonomyListingResponse, SdkError> {
        let contract: TaxonomyListingResponseContract = self.get(url, headers).await?;
        mapping::map_taxonomy_listing_response(contract)
    }
}
