use super::{map_pagination, map_resource_system, require};
use crate::api::responses::{TypeElementContract, TypeListingResponseContract, TypeResponseContract};
use crate::error::SdkError;
use crate::model::{
    ChoiceOption, ContentType, DeliveryElementResponse, DeliveryTypeListingResponse,
    DeliveryTypeResponse, TypeElement,
};

pub fn map_type_response(contract: TypeResponseContract) -> Result<DeliveryTypeResponse, SdkError> {
    Ok(DeliveryTypeResponse {
        content_type: map_content_type(contract)?,
    })
}

pub fn map_type_listing_response(
    contract: TypeListingResponseContract,
) -> Result<DeliveryTypeListingResponse, SdkError> {
    Ok(DeliveryTypeListingResponse {
        types: contract
            .types
            .into_iter()
            .map(map_content_type)
            .collect::<Result<Vec<_>, _>>()?,
        pagination: map_pagination(contract.pagination),
    })
}

/// The element endpoint returns the element definition itself, which
/// always carries its codename.
pub fn map_element_response(
    contract: TypeElementContract,
) -> Result<DeliveryElementResponse, SdkError> {
    let codename = require(contract.codename.clone(), "content type element", "codename")?;
    Ok(DeliveryElementResponse {
        element: map_type_element(codename, contract),
    })
}

fn map_content_type(contract: TypeResponseContract) -> Result<ContentType, SdkError> {
    let system = map_resource_system(contract.system, "content type")?;

    let elements = contract
        .elements
        .into_iter()
        .map(|(key, element)| {
            let codename = element.codename.clone().unwrap_or_else(|| key.clone());
            (key, map_type_element(codename, element))
        })
        .collect();

    Ok(ContentType { system, elements })
}

fn map_type_element(codename: String, contract: TypeElementContract) -> TypeElement {
    TypeElement {
        name: contract.name.unwrap_or_else(|| codename.clone()),
        codename,
        element_type: contract.element_type,
        options: contract
            .options
            .into_iter()
            .map(|o| ChoiceOption {
                name: o.name,
                codename: o.codename,
            })
            .collect(),
        taxonomy_group: contract.taxonomy_group,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn element_codenames_fall_back_to_keys() {
        let contract: TypeResponseContract = serde_json::from_value(json!({
            "system": {
                "id": "929985ac-4aa5-436b-85a2-94c2d4fbbebd",
                "name": "Movie",
                "codename": "movie",
                "last_modified": "2017-06-21T12:07:14.9402232Z"
            },
            "elements": {
                "title": { "type": "text", "name": "Title" },
                "category": {
                    "type": "multiple_choice",
                    "name": "Category",
                    "options": [
                        { "name": "Sci fi", "codename": "sci_fi" },
                        { "name": "Drama", "codename": "drama" }
                    ]
                }
            }
        }))
        .unwrap();

        let content_type = map_type_response(contract).unwrap().content_type;

        assert_eq!(content_type.codename(), "movie");
        assert!(content_type.system.last_modified.is_some());
        assert_eq!(content_type.elements["title"].codename, "title");
        let options: Vec<&str> = content_type.elements["category"]
            .options
            .iter()
            .map(|o| o.codename.as_str())
            .collect();
        assert_eq!(options, ["sci_fi", "drama"]);
    }

    #[test]
    fn element_response_requires_codename() {
        let contract: TypeElementContract =
            serde_json::from_value(json!({ "type": "text", "name": "Title" })).unwrap();
        assert!(map_element_response(contract).unwrap_err().is_malformed_response());
    }
}
