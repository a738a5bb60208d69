// src/management/client.rs
use super::identifiers::ContentItemIdentifier;
use super::models::AddContentItemData;
use super::queries::{
    AddContentItemQuery, ContentItemIdentifierQuery, LanguageIdentifierQuery,
    ListContentItemsQuery, ViewContentItemQuery, ViewLanguageVariantQuery,
};
use super::service::ManagementQueryService;
use crate::api::{HttpService, ReqwestHttpService};
use crate::config::ManagementClientConfig;
use crate::error::SdkError;
use std::sync::Arc;

/// Content Management API client. Every request is authorized with the
/// configured management key.
#[derive(Debug, Clone)]
pub struct ContentManagementClient {
    service: Arc<ManagementQueryService>,
}

impl ContentManagementClient {
    pub fn new(config: ManagementClientConfig) -> Result<Self, SdkError> {
        let http = ReqwestHttpService::new()?;
        Self::with_http_service(config, Arc::new(http))
    }

    pub fn with_http_service(
        config: ManagementClientConfig,
        http: Arc<dyn HttpService>,
    ) -> Result<Self, SdkError> {
        config.validate()?;
        log::debug!("Management client created for project {}", config.project_id);

        Ok(Self {
            service: Arc::new(ManagementQueryService::new(config, http)),
        })
    }

    pub fn config(&self) -> &ManagementClientConfig {
        self.service.config()
    }

    pub fn list_content_items(&self) -> ListContentItemsQuery {
        ListContentItemsQuery::new(Arc::clone(&self.service))
    }

    pub fn view_content_item(&self) -> ContentItemIdentifierQuery<ViewContentItemQuery> {
        let service = Arc::clone(&self.service);
        ContentItemIdentifierQuery::new(move |identifier| ViewContentItemQuery::new(service, identifier))
    }

    pub fn add_content_item(&self, data: AddContentItemData) -> AddContentItemQuery {
        AddContentItemQuery::new(Arc::clone(&self.service), data)
    }

    pub fn view_language_variant(
        &self,
    ) -> ContentItemIdentifierQuery<LanguageIdentifierQuery<ViewLanguageVariantQuery>> {
        let service = Arc::clone(&self.service);
        ContentItemIdentifierQuery::new(move |item: ContentItemIdentifier| {
            LanguageIdentifierQuery::new(move |language| {
                ViewLanguageVariantQuery::new(service, item, language)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiResponse, HttpRequest};
    use crate::types::{ApiKey, ProjectId};
    use uuid::Uuid;

    struct Unreachable;

    #[async_trait::async_trait]
    impl HttpService for Unreachable {
        async fn send(&self, request: HttpRequest) -> Result<ApiResponse<String>, SdkError> {
            panic!("no request expected, got {}", request.url)
        }
    }

    fn client() -> ContentManagementClient {
        let config = ManagementClientConfig::new(
            ProjectId::parse("bb6882a0-3088-405c-a61e-b9d5b7d8b0c5").unwrap(),
            ApiKey::new("ew0KICAiYWxnIjoiSFMyNTYiLA0KICAidHlwIjoiSldUIg0KfQ").unwrap(),
        );
        ContentManagementClient::with_http_service(config, Arc::new(Unreachable)).unwrap()
    }

    const ENDPOINT: &str = "https://manage.kenticocloud.com/v2/projects/bb6882a0-3088-405c-a61e-b9d5b7d8b0c5";

    #[test]
    fn view_item_urls() {
        let client = client();
        let id = Uuid::parse_str("f4b3fc05-e988-4dae-9ac1-a94aba566474").unwrap();

        assert_eq!(
            client.view_content_item().by_internal_id(id).url(),
            format!("{}/items/f4b3fc05-e988-4dae-9ac1-a94aba566474", ENDPOINT)
        );
        assert_eq!(
            client.view_content_item().by_codename("on_roasts").unwrap().url(),
            format!("{}/items/codename/on_roasts", ENDPOINT)
        );
        assert_eq!(
            client.view_content_item().by_external_id("59713").unwrap().url(),
            format!("{}/items/external-id/59713", ENDPOINT)
        );
        assert!(client.view_content_item().by_codename("").is_err());
    }

    #[test]
    fn language_variant_url() {
        let url = client()
            .view_language_variant()
            .by_codename("on_roasts")
            .unwrap()
            .by_language_codename("es-ES")
            .unwrap()
            .url();

        assert_eq!(url, format!("{}/items/codename/on_roasts/variants/codename/es-ES", ENDPOINT));
    }

    #[test]
    fn continuation_token_becomes_header() {
        let headers = client()
            .list_content_items()
            .continuation_token("MTAw")
            .unwrap()
            .headers();

        let names: Vec<&str> = headers.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["X-KC-SDKID", "Authorization", "X-Continuation"]);
        assert!(headers[1].value.starts_with("Bearer ew0K"));
        assert_eq!(headers[2].value, "MTAw");
    }
}
