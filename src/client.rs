// src/client.rs
//! Entry point of the Delivery API.

use crate::api::service::DeliveryQueryService;
use crate::api::{HttpService, ReqwestHttpService};
use crate::config::DeliveryClientConfig;
use crate::error::SdkError;
use crate::query::{
    ElementQuery, MultipleItemsQuery, MultipleTypesQuery, SingleItemQuery, SingleTypeQuery,
    TaxonomiesQuery, TaxonomyQuery,
};
use crate::types::Codename;
use std::sync::Arc;

/// Read-only Delivery client.
///
/// Cheap to clone; clones share the configuration and the transport. Every
/// resource method returns a fresh, independent query.
///
/// ```no_run
/// # async fn run() -> Result<(), kontent_sdk::SdkError> {
/// use kontent_sdk::{DeliveryClient, DeliveryClientConfig, ProjectId, SortOrder};
///
/// let project = ProjectId::parse("975bf280-fd91-488c-994c-2f04416e5ee3")?;
/// let client = DeliveryClient::new(DeliveryClientConfig::new(project))?;
///
/// let movies = client
///     .items()
///     .content_type("movie")?
///     .order_by("elements.title", SortOrder::Ascending)?
///     .limit(10)
///     .get()
///     .await?;
///
/// for movie in &movies.items {
///     println!("{}", movie.system.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DeliveryClient {
    service: Arc<DeliveryQueryService>,
}

impl DeliveryClient {
    /// Validates the configuration and uses the default reqwest transport.
    pub fn new(config: DeliveryClientConfig) -> Result<Self, SdkError> {
        let http = ReqwestHttpService::new()?;
        Self::with_http_service(config, Arc::new(http))
    }

    /// Uses a caller-supplied transport.
    pub fn with_http_service(
        config: DeliveryClientConfig,
        http: Arc<dyn HttpService>,
    ) -> Result<Self, SdkError> {
        config.validate()?;
        log::debug!("Delivery client created for project {}", config.project_id);

        Ok(Self {
            service: Arc::new(DeliveryQueryService::new(config, http)),
        })
    }

    pub fn config(&self) -> &DeliveryClientConfig {
        self.service.config()
    }

    pub fn items(&self) -> MultipleItemsQuery {
        MultipleItemsQuery::new(Arc::clone(&self.service))
    }

    pub fn item(&self, codename: &str) -> Result<SingleItemQuery, SdkError> {
        Ok(SingleItemQuery::new(
            Arc::clone(&self.service),
            Codename::new(codename)?,
        ))
    }

    pub fn types(&self) -> MultipleTypesQuery {
        MultipleTypesQuery::new(Arc::clone(&self.service))
    }

    /// A single content type. Named `content_type` since `type` is reserved.
    pub fn content_type(&self, codename: &str) -> Result<SingleTypeQuery, SdkError> {
        Ok(SingleTypeQuery::new(
            Arc::clone(&self.service),
            Codename::new(codename)?,
        ))
    }

    pub fn element(
        &self,
        type_codename: &str,
        element_codename: &str,
    ) -> Result<ElementQuery, SdkError> {
        Ok(ElementQuery::new(
            Arc::clone(&self.service),
            Codename::new(type_codename)?,
            Codename::new(element_codename)?,
        ))
    }

    pub fn taxonomies(&self) -> TaxonomiesQuery {
        TaxonomiesQuery::new(Arc::clone(&self.service))
    }

    pub fn taxonomy(&self, codename: &str) -> Result<TaxonomyQuery, SdkError> {
        Ok(TaxonomyQuery::new(
            Arc::clone(&self.service),
            Codename::new(codename)?,
        ))
    }
}
