// src/management/mapper.rs
use super::contracts::{
    ContentItemContract, ContentItemListingResponseContract, LanguageVariantContract,
    PaginationContract, ReferenceContract,
};
use super::models::{
    AddContentItemResponse, ContentItemListingResponse, ContinuationPagination,
    LanguageVariant, LanguageVariantElement, ManagementContentItem, Reference,
    ViewContentItemResponse, ViewLanguageVariantResponse,
};
use crate::error::SdkError;
use crate::mapping::{parse_timestamp, require};
use crate::types::Codename;
use uuid::Uuid;

pub(crate) fn map_listing_response(
    contract: ContentItemListingResponseContract,
) -> Result<ContentItemListingResponse, SdkError> {
    Ok(ContentItemListingResponse {
        items: contract
            .items
            .into_iter()
            .map(map_content_item)
            .collect::<Result<Vec<_>, _>>()?,
        pagination: map_pagination(contract.pagination),
    })
}

pub(crate) fn map_view_response(
    contract: ContentItemContract,
) -> Result<ViewContentItemResponse, SdkError> {
    Ok(ViewContentItemResponse {
        item: map_content_item(contract)?,
    })
}

pub(crate) fn map_add_response(
    contract: ContentItemContract,
) -> Result<AddContentItemResponse, SdkError> {
    Ok(AddContentItemResponse {
        item: map_content_item(contract)?,
    })
}

pub(crate) fn map_language_variant_response(
    contract: LanguageVariantContract,
) -> Result<ViewLanguageVariantResponse, SdkError> {
    let elements = contract
        .elements
        .into_iter()
        .map(|e| {
            Ok(LanguageVariantElement {
                element: map_reference(e.element)?,
                value: e.value,
            })
        })
        .collect::<Result<Vec<_>, SdkError>>()?;

    Ok(ViewLanguageVariantResponse {
        variant: LanguageVariant {
            item: map_reference(contract.item)?,
            language: map_reference(contract.language)?,
            last_modified: parse_timestamp(contract.last_modified, "language variant")?,
            elements,
        },
    })
}

fn map_content_item(contract: ContentItemContract) -> Result<ManagementContentItem, SdkError> {
    let id = parse_uuid(&require(contract.id, "management content item", "id")?)?;
    let codename = require(contract.codename, "management content item", "codename")?;

    Ok(ManagementContentItem {
        id,
        name: contract.name.unwrap_or_default(),
        last_modified: parse_timestamp(
            contract.last_modified,
            &format!("management content item '{}'", codename),
        )?,
        codename,
        content_type: map_reference(contract.content_type)?,
        sitemap_locations: contract
            .sitemap_locations
            .into_iter()
            .filter_map(|r| map_reference(r).transpose())
            .collect::<Result<Vec<_>, _>>()?,
        external_id: contract.external_id,
    })
}

fn map_pagination(contract: PaginationContract) -> ContinuationPagination {
    ContinuationPagination {
        continuation_token: contract.continuation_token.filter(|t| !t.is_empty()),
        next_page: contract.next_page.filter(|url| !url.is_empty()),
    }
}

/// The most specific key wins: id, then codename, then external id.
fn map_reference(contract: ReferenceContract) -> Result<Option<Reference>, SdkError> {
    if let Some(id) = contract.id.filter(|v| !v.is_empty()) {
        return Ok(Some(Reference::Id(parse_uuid(&id)?)));
    }
    if let Some(codename) = contract.codename.filter(|v| !v.is_empty()) {
        return Ok(Some(Reference::Codename(Codename::from_api(codename))));
    }
    Ok(contract
        .external_id
        .filter(|v| !v.is_empty())
        .map(Reference::ExternalId))
}

fn parse_uuid(value: &str) -> Result<Uuid, SdkError> {
    Uuid::parse_str(value)
        .map_err(|e| SdkError::MalformedResponse(format!("invalid id '{}': {}", value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_item_with_references() {
        let contract: ContentItemContract = serde_json::from_value(json!({
            "id": "f4b3fc05-e988-4dae-9ac1-a94aba566474",
            "name": "On Roasts",
            "codename": "on_roasts",
            "type": { "id": "b7aa4a53-d9b1-48cf-b7a6-ed0b182c4b89" },
            "sitemap_locations": [{ "id": "45a123f3-1c55-c697-7dae-78369c8f1e2c" }],
            "external_id": "59713",
            "last_modified": "2017-04-04T13:45:30.7692802Z"
        }))
        .unwrap();

        let item = map_view_response(contract).unwrap().item;

        assert_eq!(item.codename, "on_roasts");
        assert_eq!(item.external_id.as_deref(), Some("59713"));
        assert!(matches!(item.content_type, Some(Reference::Id(_))));
        assert_eq!(item.sitemap_locations.len(), 1);
        assert!(item.last_modified.is_some());
    }

    #[test]
    fn missing_codename_is_malformed() {
        let contract: ContentItemContract = serde_json::from_value(json!({
            "id": "f4b3fc05-e988-4dae-9ac1-a94aba566474",
            "name": "On Roasts"
        }))
        .unwrap();
        assert!(map_view_response(contract).unwrap_err().is_malformed_response());
    }

    #[test]
    fn invalid_id_is_malformed() {
        let contract: ContentItemContract =
            serde_json::from_value(json!({ "id": "42", "codename": "x" })).unwrap();
        assert!(map_view_response(contract).unwrap_err().is_malformed_response());
    }

    #[test]
    fn empty_continuation_token_means_last_page() {
        let pagination = map_pagination(PaginationContract {
            continuation_token: Some(String::new()),
            next_page: None,
        });
        assert_eq!(pagination, ContinuationPagination::default());
    }
}
