use super::{map_pagination, parse_timestamp, require};
use crate::api::responses::{
    AssetContract, ChoiceOptionContract, ContentItemContract, ElementContract,
    ItemListingResponseContract, ItemResponseContract,
};
use crate::error::SdkError;
use crate::model::{
    Asset, ChoiceOption, ContentItem, ContentItemSystem, DeliveryItemListingResponse,
    DeliveryItemResponse, Element, ElementValue, RichText, RichTextImage, RichTextLink,
    TaxonomyTermReference,
};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub fn map_item_response(contract: ItemResponseContract) -> Result<DeliveryItemResponse, SdkError> {
    Ok(DeliveryItemResponse {
        item: map_content_item(contract.item)?,
        linked_items: map_linked_items(contract.modular_content)?,
    })
}

pub fn map_item_listing_response(
    contract: ItemListingResponseContract,
) -> Result<DeliveryItemListingResponse, SdkError> {
    Ok(DeliveryItemListingResponse {
        items: contract
            .items
            .into_iter()
            .map(map_content_item)
            .collect::<Result<Vec<_>, _>>()?,
        linked_items: map_linked_items(contract.modular_content)?,
        pagination: map_pagination(contract.pagination),
    })
}

pub fn map_content_item(contract: ContentItemContract) -> Result<ContentItem, SdkError> {
    let system = contract.system;
    let id = require(system.id, "content item", "system.id")?;
    let codename = require(system.codename, "content item", "system.codename")?;
    let last_modified = parse_timestamp(system.last_modified, &format!("content item '{}'", codename))?;

    let elements = contract
        .elements
        .into_iter()
        .map(|(element_codename, element)| {
            let mapped = map_element(&codename, element_codename.clone(), element)?;
            Ok((element_codename, mapped))
        })
        .collect::<Result<IndexMap<_, _>, SdkError>>()?;

    Ok(ContentItem {
        system: ContentItemSystem {
            id,
            name: system.name.unwrap_or_default(),
            codename,
            language: system.language,
            content_type: system.content_type.unwrap_or_default(),
            sitemap_locations: system.sitemap_locations,
            last_modified,
        },
        elements,
    })
}

fn map_linked_items(
    modular_content: IndexMap<String, ContentItemContract>,
) -> Result<IndexMap<String, ContentItem>, SdkError> {
    modular_content
        .into_iter()
        .map(|(codename, item)| Ok((codename, map_content_item(item)?)))
        .collect()
}

fn map_element(
    item_codename: &str,
    codename: String,
    contract: ElementContract,
) -> Result<Element, SdkError> {
    let context = format!("element '{}' of content item '{}'", codename, item_codename);

    let value = match contract.element_type.as_str() {
        "text" => ElementValue::Text(optional_string(contract.value, &context)?),
        "rich_text" => ElementValue::RichText(RichText {
            html: optional_string(contract.value, &context)?.unwrap_or_default(),
            images: contract
                .images
                .into_iter()
                .map(|(key, image)| {
                    let mapped = RichTextImage {
                        image_id: image.image_id.unwrap_or_else(|| key.clone()),
                        url: image.url,
                        description: image.description,
                    };
                    (key, mapped)
                })
                .collect(),
            links: contract
                .links
                .into_iter()
                .map(|(item_id, link)| {
                    let mapped = RichTextLink {
                        item_id: item_id.clone(),
                        codename: link.codename,
                        content_type: link.content_type,
                        url_slug: link.url_slug,
                    };
                    (item_id, mapped)
                })
                .collect(),
            linked_items: contract.modular_content,
        }),
        "number" => ElementValue::Number(optional_number(contract.value, &context)?),
        "multiple_choice" => ElementValue::MultipleChoice(
            array_of::<ChoiceOptionContract>(contract.value, &context)?
                .into_iter()
                .map(|o| ChoiceOption {
                    name: o.name,
                    codename: o.codename,
                })
                .collect(),
        ),
        "date_time" => ElementValue::DateTime(parse_timestamp(
            optional_string(contract.value, &context)?,
            &context,
        )?),
        "asset" => ElementValue::Asset(
            array_of::<AssetContract>(contract.value, &context)?
                .into_iter()
                .map(|a| Asset {
                    name: a.name,
                    content_type: a.content_type,
                    size: a.size,
                    description: a.description,
                    url: a.url,
                })
                .collect(),
        ),
        "modular_content" => ElementValue::ModularContent(array_of(contract.value, &context)?),
        "taxonomy" => ElementValue::Taxonomy {
            group: contract.taxonomy_group,
            terms: array_of::<ChoiceOptionContract>(contract.value, &context)?
                .into_iter()
                .map(|t| TaxonomyTermReference {
                    name: t.name,
                    codename: t.codename,
                })
                .collect(),
        },
        "url_slug" => ElementValue::UrlSlug(optional_string(contract.value, &context)?),
        "custom" => ElementValue::Custom(optional_string(contract.value, &context)?),
        other => {
            log::debug!("Unknown element type '{}' in {}", other, context);
            ElementValue::Unknown {
                element_type: other.to_string(),
                raw: contract.value,
            }
        }
    };

    Ok(Element {
        name: contract.name.unwrap_or_else(|| codename.clone()),
        codename,
        value,
    })
}

fn optional_string(value: Value, context: &str) -> Result<Option<String>, SdkError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        other => Err(unexpected(context, "a string", &other)),
    }
}

fn optional_number(value: Value, context: &str) -> Result<Option<f64>, SdkError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        other => Err(unexpected(context, "a number", &other)),
    }
}

fn array_of<T: DeserializeOwned>(value: Value, context: &str) -> Result<Vec<T>, SdkError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(_) => serde_json::from_value(value).map_err(|e| {
            SdkError::MalformedResponse(format!("{} has an invalid value: {}", context, e))
        }),
        other => Err(unexpected(context, "an array", &other)),
    }
}

fn unexpected(context: &str, expected: &str, found: &Value) -> SdkError {
    SdkError::MalformedResponse(format!("{} should be {}, found {}", context, expected, found))
}
