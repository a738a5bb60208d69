// src/query/mod.rs
//! Fluent Delivery queries.
//!
//! Every query is a by-value builder: configuration calls consume and return
//! it, `url()` and `headers()` inspect it, and `get()` executes it exactly once.

/// Configuration calls every Delivery query supports.
macro_rules! delivery_query_common {
    () => {
        /// Per-query overrides of the client-wide mode and header settings.
        pub fn query_config(mut self, config: $crate::config::QueryConfig) -> Self {
            self.state.query_config = config;
            self
        }

        /// Adds a parameter the SDK has no dedicated method for.
        pub fn custom_parameter(
            mut self,
            name: &str,
            value: impl Into<String>,
        ) -> Result<Self, $crate::error::SdkError> {
            self.state
                .push($crate::query::QueryParameter::custom(name, value)?);
            Ok(self)
        }

        /// Headers `get()` would send.
        pub fn headers(&self) -> Result<Vec<$crate::types::Header>, $crate::error::SdkError> {
            self.state.headers()
        }
    };
}

mod filters;
mod item;
mod parameters;
mod taxonomy;
mod types;
pub(crate) mod url;

pub use filters::{Filter, FilterOperator};
pub use item::{MultipleItemsQuery, SingleItemQuery};
pub use parameters::{QueryParameter, SingletonKind, SortOrder};
pub use taxonomy::{TaxonomiesQuery, TaxonomyQuery};
pub use types::{ElementQuery, MultipleTypesQuery, SingleTypeQuery};
pub use self::url::{build_query_string, build_url, resolve_parameters};

use crate::api::service::DeliveryQueryService;
use crate::config::QueryConfig;
use crate::error::SdkError;
use crate::types::{Codename, Header};
use std::sync::Arc;

/// State shared by all Delivery query kinds.
#[derive(Debug, Clone)]
pub(crate) struct QueryState {
    service: Arc<DeliveryQueryService>,
    parameters: Vec<QueryParameter>,
    query_config: QueryConfig,
}

/// How a query contributes implicit parameters.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Scope<'a> {
    /// No implicit parameters.
    Plain,
    /// Item query: the client's default language applies.
    Items,
    /// Item listing restricted to one content type.
    ItemsOfType(&'a Codename),
}

impl QueryState {
    pub(crate) fn new(service: Arc<DeliveryQueryService>) -> Self {
        Self {
            service,
            parameters: Vec::new(),
            query_config: QueryConfig::default(),
        }
    }

    pub(crate) fn push(&mut self, parameter: QueryParameter) {
        self.parameters.push(parameter);
    }

    pub(crate) fn service(&self) -> &DeliveryQueryService {
        &self.service
    }

    pub(crate) fn url(&self, path: &str, scope: Scope<'_>) -> String {
        let config = self.service.config();
        let endpoint = config.endpoint(self.query_config.effective_preview(config));

        let parameters = match scope {
            Scope::Plain => resolve_parameters(&self.parameters, None),
            Scope::Items => resolve_parameters(&self.parameters, config.default_language.as_ref()),
            Scope::ItemsOfType(content_type) => {
                let explicit = self::url::scope_to_type(&self.parameters, content_type);
                resolve_parameters(&explicit, config.default_language.as_ref())
            }
        };

        build_url(&endpoint, path, &parameters)
    }

    pub(crate) fn headers(&self) -> Result<Vec<Header>, SdkError> {
        Ok(self::url::delivery_headers(self.service.config(), &self.query_config)?)
    }
}
