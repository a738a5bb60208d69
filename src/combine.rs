// src/combine.rs
//! Running several queries concurrently.
//!
//! ```no_run
//! # async fn run(client: kontent_sdk::DeliveryClient) -> Result<(), kontent_sdk::SdkError> {
//! use kontent_sdk::combine::{zip_all, DeliveryResponse, Labeled};
//!
//! let results = zip_all(vec![
//!     Labeled::response("warrior", client.item("warrior")?.get()),
//!     Labeled::response("movies", client.items().content_type("movie")?.get()),
//!     Labeled::response("personas", client.taxonomy("personas")?.get()),
//! ])
//! .await?;
//!
//! if let Some(DeliveryResponse::Items(movies)) = results.get("movies") {
//!     println!("{} movies", movies.items.len());
//! }
//! # Ok(())
//! # }
//! ```

use crate::error::SdkError;
use crate::model::{
    DeliveryElementResponse, DeliveryItemListingResponse, DeliveryItemResponse,
    DeliveryTaxonomyListingResponse, DeliveryTaxonomyResponse, DeliveryTypeListingResponse,
    DeliveryTypeResponse,
};
use crate::types::ValidationError;
use futures::future::{try_join_all, BoxFuture, FutureExt, TryFutureExt};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::fmt;
use std::future::Future;

/// A future tagged with the key its result is stored under.
pub struct Labeled<'a, T> {
    label: String,
    future: BoxFuture<'a, Result<T, SdkError>>,
}

impl<'a, T> Labeled<'a, T> {
    pub fn new<F>(label: impl Into<String>, future: F) -> Self
    where
        F: Future<Output = Result<T, SdkError>> + Send + 'a,
    {
        Self {
            label: label.into(),
            future: future.boxed(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<'a> Labeled<'a, DeliveryResponse> {
    /// Tags any Delivery query so that differently typed queries can be
    /// combined in one call.
    pub fn response<F, R>(label: impl Into<String>, future: F) -> Self
    where
        F: Future<Output = Result<R, SdkError>> + Send + 'a,
        R: Into<DeliveryResponse> + 'a,
    {
        Self::new(label, future.map_ok(Into::into))
    }
}

impl<T> fmt::Debug for Labeled<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Labeled")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Polls all futures concurrently and collects their results by label, in
/// input order.
///
/// Fails with the first error any future produces. Empty input and
/// duplicate labels are rejected before anything is polled.
pub async fn zip_all<'a, T, I>(futures: I) -> Result<IndexMap<String, T>, SdkError>
where
    I: IntoIterator<Item = Labeled<'a, T>>,
{
    let (labels, futures): (Vec<String>, Vec<_>) = futures
        .into_iter()
        .map(|labeled| (labeled.label, labeled.future))
        .unzip();

    if labels.is_empty() {
        return Err(ValidationError::EmptyValues("zip_all input".to_string()).into());
    }

    let mut seen = HashSet::with_capacity(labels.len());
    if let Some(duplicate) = labels.iter().find(|label| !seen.insert(label.as_str())) {
        return Err(ValidationError::DuplicateLabel(duplicate.clone()).into());
    }

    log::debug!("Running {} queries concurrently", labels.len());
    let results = try_join_all(futures).await?;

    Ok(labels.into_iter().zip(results).collect())
}

/// Result of any Delivery query.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryResponse {
    Item(DeliveryItemResponse),
    Items(DeliveryItemListingResponse),
    Type(DeliveryTypeResponse),
    Types(DeliveryTypeListingResponse),
    Element(DeliveryElementResponse),
    Taxonomy(DeliveryTaxonomyResponse),
    Taxonomies(DeliveryTaxonomyListingResponse),
}

macro_rules! delivery_response_from {
    ($($variant:ident($response:ty)),+ $(,)?) => {
        $(
            impl From<$response> for DeliveryResponse {
                fn from(response: $response) -> Self {
                    Self::$variant(response)
                }
            }
        )+
    };
}

delivery_response_from!(
    Item(DeliveryItemResponse),
    Items(DeliveryItemListingResponse),
    Type(DeliveryTypeResponse),
    Types(DeliveryTypeListingResponse),
    Element(DeliveryElementResponse),
    Taxonomy(DeliveryTaxonomyResponse),
    Taxonomies(DeliveryTaxonomyListingResponse),
);
