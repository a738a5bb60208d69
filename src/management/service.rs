// src/management/service.rs
use super::contracts::{
    AddContentItemContract, ContentItemContract, ContentItemListingResponseContract,
    LanguageVariantContract,
};
use super::mapper;
use super::models::{
    AddContentItemResponse, ContentItemListingResponse, ViewContentItemResponse,
    ViewLanguageVariantResponse,
};
use crate::api::client::{HttpRequest, HttpService};
use crate::api::service::execute;
use crate::config::{ManagementClientConfig, ManagementQueryConfig};
use crate::constants::{AUTHORIZATION_HEADER, CONTINUATION_HEADER};
use crate::error::SdkError;
use crate::query::url::sdk_header;
use crate::types::Header;
use std::fmt;
use std::sync::Arc;

pub(crate) struct ManagementQueryService {
    config: ManagementClientConfig,
    http: Arc<dyn HttpService>,
}

impl fmt::Debug for ManagementQueryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagementQueryService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ManagementQueryService {
    pub(crate) fn new(config: ManagementClientConfig, http: Arc<dyn HttpService>) -> Self {
        Self { config, http }
    }

    pub(crate) fn config(&self) -> &ManagementClientConfig {
        &self.config
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.endpoint(), path)
    }

    /// SDK id, authorization, continuation token (listings only), then
    /// custom headers.
    pub(crate) fn headers(
        &self,
        query_config: &ManagementQueryConfig,
        continuation_token: Option<&str>,
    ) -> Vec<Header> {
        let mut headers = vec![
            sdk_header(),
            Header::trusted(AUTHORIZATION_HEADER, self.config.api_key.bearer()),
        ];
        if let Some(token) = continuation_token {
            headers.push(Header::trusted(CONTINUATION_HEADER, token));
        }
        headers.extend(query_config.custom_headers.iter().cloned());
        headers
    }

    pub(crate) async fn list_content_items(
        &self,
        url: String,
        headers: Vec<Header>,
    ) -> Result<ContentItemListingResponse, SdkError> {
        let contract: ContentItemListingResponseContract =
            execute(self.http.as_ref(), HttpRequest::get(url, headers)).await?;
        mapper::map_listing_response(contract)
    }

    pub(crate) async fn view_content_item(
        &self,
        url: String,
        headers: Vec<Header>,
    ) -> Result<ViewContentItemResponse, SdkError> {
        let contract: ContentItemContract =
            execute(self.http.as_ref(), HttpRequest::get(url, headers)).await?;
        mapper::map_view_response(contract)
    }

    pub(crate) async fn add_content_item(
        &self,
        url: String,
        headers: Vec<Header>,
        body: &AddContentItemContract,
    ) -> Result<AddContentItemResponse, SdkError> {
        let body = serde_json::to_value(body).map_err(SdkError::Serialization)?;
        let contract: ContentItemContract =
            execute(self.http.as_ref(), HttpRequest::post(url, headers, body)).await?;
        mapper::map_add_response(contract)
    }

    pub(crate) async fn view_language_variant(
        &self,
        url: String,
        headers: Vec<Header>,
    ) -> Result<ViewLanguageVariantResponse, SdkError> {
        let contract: LanguageVariantContract =
            execute(self.http.as_ref(), HttpRequest::get(url, headers)).await?;
        mapper::map_language_variant_response(contract)
    }
}
