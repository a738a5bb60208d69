//! Contract → model mappers.
//!
//! Every function here is pure: it consumes a decoded contract and either
//! returns the public model or a `MalformedResponse` error when a mandatory
//! field is missing. Absent optional fields map to `None` or empty
//! collections. Listings keep the API order.

mod items;
mod taxonomies;
mod types;

pub use items::{map_item_listing_response, map_item_response};
pub use taxonomies::{map_taxonomy_listing_response, map_taxonomy_response};
pub use types::{map_element_response, map_type_listing_response, map_type_response};

use crate::api::responses::{PaginationContract, SystemContract};
use crate::error::SdkError;
use crate::model::{Pagination, ResourceSystem};
use chrono::{DateTime, Utc};

pub(crate) fn map_pagination(contract: PaginationContract) -> Pagination {
    Pagination {
        skip: contract.skip,
        limit: contract.limit,
        count: contract.count,
        next_page: contract.next_page.filter(|url| !url.is_empty()),
        total_count: contract.total_count,
    }
}

pub(crate) fn map_resource_system(
    system: SystemContract,
    resource: &str,
) -> Result<ResourceSystem, SdkError> {
    Ok(ResourceSystem {
        id: require(system.id, resource, "system.id")?,
        codename: require(system.codename, resource, "system.codename")?,
        name: system.name.unwrap_or_default(),
        last_modified: parse_timestamp(system.last_modified, resource)?,
    })
}

/// Returns the value of a mandatory field or a `MalformedResponse` error.
pub(crate) fn require(
    value: Option<String>,
    resource: &str,
    field: &str,
) -> Result<String, SdkError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| SdkError::missing_field(resource, field))
}

pub(crate) fn parse_timestamp(
    value: Option<String>,
    resource: &str,
) -> Result<Option<DateTime<Utc>>, SdkError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| {
                SdkError::MalformedResponse(format!(
                    "{} has an invalid timestamp '{}': {}",
                    resource, raw, e
                ))
            }),
    }
}
