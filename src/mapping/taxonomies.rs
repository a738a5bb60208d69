use super::{map_pagination, map_resource_system};
use crate::api::responses::{
    TaxonomyListingResponseContract, TaxonomyResponseContract, TaxonomyTermContract,
};
use crate::error::SdkError;
use crate::model::{
    DeliveryTaxonomyListingResponse, DeliveryTaxonomyResponse, TaxonomyGroup, TaxonomyTerm,
};

pub fn map_taxonomy_response(
    contract: TaxonomyResponseContract,
) -> Result<DeliveryTaxonomyResponse, SdkError> {
    Ok(DeliveryTaxonomyResponse {
        taxonomy: map_taxonomy_group(contract)?,
    })
}

pub fn map_taxonomy_listing_response(
    contract: TaxonomyListingResponseContract,
) -> Result<DeliveryTaxonomyListingResponse, SdkError> {
    Ok(DeliveryTaxonomyListingResponse {
        taxonomies: contract
            .taxonomies
            .into_iter()
            .map(map_taxonomy_group)
            .collect::<Result<Vec<_>, _>>()?,
        pagination: map_pagination(contract.pagination),
    })
}

fn map_taxonomy_group(contract: TaxonomyResponseContract) -> Result<TaxonomyGroup, SdkError> {
    Ok(TaxonomyGroup {
        system: map_resource_system(contract.system, "taxonomy group")?,
        terms: contract.terms.into_iter().map(map_term).collect(),
    })
}

fn map_term(contract: TaxonomyTermContract) -> TaxonomyTerm {
    TaxonomyTerm {
        name: contract.name,
        codename: contract.codename,
        terms: contract.terms.into_iter().map(map_term).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_terms_are_kept_in_order() {
        let contract: TaxonomyResponseContract = serde_json::from_value(json!({
            "system": {
                "id": "f30c7f72-e9ab-8832-2a57-62944a038809",
                "name": "Personas",
                "codename": "personas",
                "last_modified": "2016-10-20T13:24:00.3200182Z"
            },
            "terms": [
                {
                    "name": "Coffee expert",
                    "codename": "coffee_expert",
                    "terms": [
                        { "name": "Barista", "codename": "barista", "terms": [] },
                        { "name": "Cafe owner", "codename": "cafe_owner", "terms": [] }
                    ]
                },
                { "name": "Coffee enthusiast", "codename": "coffee_enthusiast", "terms": [] }
            ]
        }))
        .unwrap();

        let taxonomy = map_taxonomy_response(contract).unwrap().taxonomy;

        assert_eq!(taxonomy.codename(), "personas");
        assert_eq!(taxonomy.terms.len(), 2);
        assert_eq!(taxonomy.terms[0].terms[1].codename, "cafe_owner");
        assert_eq!(taxonomy.find_term("barista").map(|t| t.name.as_str()), Some("Barista"));
        assert!(taxonomy.find_term("tea_lover").is_none());
    }
}
