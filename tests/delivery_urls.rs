//! URL and header assembly of Delivery queries, checked without any network.

mod common;

use common::*;
use kontent_sdk::{Filter, Header, QueryConfig, SortOrder};
use pretty_assertions::assert_eq;

fn endpoint() -> String {
    format!("https://deliver.kenticocloud.com/{}", PROJECT_ID)
}

#[test]
fn test_custom_parameter_is_appended() {
    let client = offline_client(delivery_config());

    let url = client
        .items()
        .custom_parameter("customParam", "customVal")
        .unwrap()
        .url();

    assert_eq!(url, format!("{}/items?customParam=customVal", endpoint()));
}

#[test]
fn test_custom_parameter_requires_a_name() {
    let client = offline_client(delivery_config());

    let err = client.items().custom_parameter("", "customVal").unwrap_err();
    assert!(err.is_invalid_argument());

    let err = client.taxonomies().custom_parameter("   ", "x").unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_custom_parameter_name_cannot_inject_terms() {
    let client = offline_client(delivery_config());

    let err = client.items().custom_parameter("a&b=c", "v").unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(client.items().custom_parameter("page#2", "v").is_err());
}

#[test]
fn test_content_type_filter_is_added_exactly_once() {
    let client = offline_client(delivery_config());

    let url = client
        .items()
        .content_type("actor")
        .unwrap()
        .content_type("movie")
        .unwrap()
        .limit(5)
        .url();

    assert_eq!(url.matches("system.type=").count(), 1);
    assert_eq!(url, format!("{}/items?limit=5&system.type=movie", endpoint()));
}

#[test]
fn test_content_type_replaces_explicit_system_type_filter() {
    let client = offline_client(with_default_language(delivery_config(), "en"));

    let url = client
        .items()
        .content_type("movie")
        .unwrap()
        .filter(Filter::equals("system.type", "movie").unwrap())
        .url();

    assert_eq!(url.matches("system.type=").count(), 1);
    assert_eq!(url, format!("{}/items?system.type=movie&language=en", endpoint()));

    let url = client
        .items()
        .custom_parameter("system.type", "actor")
        .unwrap()
        .content_type("movie")
        .unwrap()
        .url();
    assert_eq!(url, format!("{}/items?system.type=movie&language=en", endpoint()));
}

#[test]
fn test_single_item_has_no_content_type_filter() {
    let client = offline_client(delivery_config());
    let url = client.item("warrior").unwrap().url();
    assert!(!url.contains("system.type"));
}

#[test]
fn test_default_language_is_injected_once() {
    let client = offline_client(with_default_language(delivery_config(), "en"));

    let url = client.item("warrior").unwrap().depth(2).url();
    assert_eq!(url, format!("{}/items/warrior?depth=2&language=en", endpoint()));

    let url = client.items().url();
    assert_eq!(url.matches("language=").count(), 1);
}

#[test]
fn test_explicit_language_wins_over_default() {
    let client = offline_client(with_default_language(delivery_config(), "en"));

    let url = client.item("warrior").unwrap().language("es-ES").unwrap().url();

    assert_eq!(url, format!("{}/items/warrior?language=es-ES", endpoint()));
}

#[test]
fn test_custom_language_parameter_wins_over_default() {
    let client = offline_client(with_default_language(delivery_config(), "en"));

    let url = client.items().custom_parameter("language", "de").unwrap().url();
    assert_eq!(url.matches("language=").count(), 1);
    assert_eq!(url, format!("{}/items?language=de", endpoint()));

    let url = client
        .item("warrior")
        .unwrap()
        .custom_parameter("language", "es-ES")
        .unwrap()
        .url();
    assert_eq!(url, format!("{}/items/warrior?language=es-ES", endpoint()));
}

#[test]
fn test_last_explicit_language_wins() {
    let client = offline_client(delivery_config());

    let url = client
        .items()
        .language("en")
        .unwrap()
        .limit(10)
        .language("cz")
        .unwrap()
        .url();

    assert_eq!(url, format!("{}/items?limit=10&language=cz", endpoint()));
}

#[test]
fn test_default_language_applies_only_to_items() {
    let client = offline_client(with_default_language(delivery_config(), "en"));

    assert_eq!(client.types().url(), format!("{}/types", endpoint()));
    assert_eq!(client.taxonomies().url(), format!("{}/taxonomies", endpoint()));
    assert_eq!(
        client.content_type("movie").unwrap().url(),
        format!("{}/types/movie", endpoint())
    );
}

#[test]
fn test_filters_and_ordering() {
    let client = offline_client(delivery_config());

    let url = client
        .items()
        .filter(Filter::any("elements.category", ["sci fi", "drama"]).unwrap())
        .filter(Filter::range("elements.length", "90", "150").unwrap())
        .order_by("elements.title", SortOrder::Descending)
        .unwrap()
        .elements(["title", "category"])
        .unwrap()
        .include_total_count()
        .url();

    assert_eq!(
        url,
        format!(
            "{}/items?elements.category[any]=sci+fi,drama&elements.length[range]=90,150\
             &order=elements.title[desc]&elements=title,category&includeTotalCount=true",
            endpoint()
        )
    );
}

#[test]
fn test_empty_value_lists_are_rejected() {
    let client = offline_client(delivery_config());
    assert!(client.items().elements(Vec::<&str>::new()).is_err());
    assert!(Filter::in_set("system.codename", Vec::<String>::new()).is_err());
}

#[test]
fn test_preview_mode_uses_preview_endpoint_and_key() {
    let client = offline_client(delivery_config().with_preview_mode(true));
    let query = client.item("warrior").unwrap();

    assert!(query
        .url()
        .starts_with(&format!("https://preview-deliver.kenticocloud.com/{}", PROJECT_ID)));

    let headers = query.headers().unwrap();
    let authorization = headers.iter().find(|h| h.name == "Authorization").unwrap();
    assert_eq!(authorization.value, format!("Bearer {}", PREVIEW_KEY));
}

#[test]
fn test_query_config_overrides_client_modes() {
    let client = offline_client(delivery_config().with_preview_mode(true));

    let headers = client
        .items()
        .query_config(
            QueryConfig::new()
                .preview_mode(false)
                .secured_mode(true)
                .wait_for_loading_new_content(true)
                .custom_header(Header::new("X-Trace", "abc").unwrap()),
        )
        .headers()
        .unwrap();

    let names: Vec<&str> = headers.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["X-KC-SDKID", "Authorization", "X-KC-Wait-For-Loading-New-Content", "X-Trace"]
    );
    assert_eq!(headers[1].value, format!("Bearer {}", SECURED_KEY));
}

#[test]
fn test_codenames_are_validated_at_construction() {
    let client = offline_client(delivery_config());
    assert!(client.item("").unwrap_err().is_invalid_argument());
    assert!(client.item("two words").unwrap_err().is_invalid_argument());
    assert!(client.items().content_type("").is_err());
}
