//! Delivery round-trips against a local mock server.

mod common;

use common::*;
use httpmock::prelude::*;
use kontent_sdk::{
    ApiErrorCode, DeliveryClient, DeliveryClientConfig, ElementValue, SdkError,
};
use pretty_assertions::assert_eq;

const ITEM_WARRIOR: &str = include_str!("fixtures/delivery/item_warrior.json");
const ITEMS_MOVIES: &str = include_str!("fixtures/delivery/items_movies.json");
const TYPES: &str = include_str!("fixtures/delivery/types.json");
const ELEMENT_CATEGORY: &str = include_str!("fixtures/delivery/element_category.json");
const TAXONOMY: &str = include_str!("fixtures/delivery/taxonomy_releasecategory.json");
const TAXONOMIES: &str = include_str!("fixtures/delivery/taxonomies.json");
const NOT_FOUND: &str = include_str!("fixtures/delivery/error_not_found.json");

fn client_for(server: &MockServer, config: DeliveryClientConfig) -> DeliveryClient {
    let config = config
        .with_base_url(server.base_url())
        .with_preview_base_url(server.url("/preview"));
    DeliveryClient::new(config).unwrap()
}

fn path(suffix: &str) -> String {
    format!("/{}{}", PROJECT_ID, suffix)
}

#[tokio::test]
async fn test_single_item_with_linked_items() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(path("/items/warrior"))
                .query_param("language", "en")
                .header_exists("x-kc-sdkid")
                .header_missing("authorization");
            then.status(200)
                .header("content-type", "application/json")
                .body(ITEM_WARRIOR);
        })
        .await;

    let client = client_for(&server, with_default_language(DeliveryClientConfig::new(project_id()), "en"));
    let response = client.item("warrior").unwrap().get().await.unwrap();

    mock.assert_async().await;

    let item = &response.item;
    assert_eq!(item.codename(), "warrior");
    assert_eq!(item.system.language.as_deref(), Some("en"));
    assert_eq!(item.text("title"), Some("Warrior"));
    assert_eq!(item.number("length"), Some(151.0));
    assert_eq!(
        item.date_time("released").map(|d| d.to_rfc3339()),
        Some("2011-09-09T00:00:00+00:00".to_string())
    );

    match &item.element("category").unwrap().value {
        ElementValue::MultipleChoice(options) => {
            let codenames: Vec<&str> = options.iter().map(|o| o.codename.as_str()).collect();
            assert_eq!(codenames, vec!["drama", "action"]);
        }
        other => panic!("Expected multiple choice, got {:?}", other),
    }

    let stars: Vec<&str> = response
        .linked_items_of("stars")
        .into_iter()
        .map(|actor| actor.text("first_name").unwrap_or_default())
        .collect();
    assert_eq!(stars, vec!["Tom", "Joel"]);
}

#[tokio::test]
async fn test_listing_keeps_order_and_pagination() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(path("/items"))
                .query_param("system.type", "movie")
                .query_param("limit", "3")
                .query_param("includeTotalCount", "true");
            then.status(200).body(ITEMS_MOVIES);
        })
        .await;

    let client = client_for(&server, DeliveryClientConfig::new(project_id()));
    let response = client
        .items()
        .content_type("movie")
        .unwrap()
        .limit(3)
        .include_total_count()
        .get()
        .await
        .unwrap();

    mock.assert_async().await;

    let codenames: Vec<&str> = response.items.iter().map(|i| i.codename()).collect();
    assert_eq!(codenames, vec!["warrior", "ant_man", "kingsman"]);

    assert_eq!(response.pagination.skip, 0);
    assert_eq!(response.pagination.limit, 3);
    assert_eq!(response.pagination.count, 3);
    assert_eq!(response.pagination.total_count, Some(11));
    assert_eq!(
        response.pagination.next_page.as_deref(),
        Some("https://deliver.kenticocloud.com/975bf280-fd91-488c-994c-2f04416e5ee3/items?system.type=movie&limit=3&skip=3")
    );
}

#[tokio::test]
async fn test_preview_request_is_authorized() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(format!("/preview{}", path("/items/warrior")))
                .header("authorization", format!("Bearer {}", PREVIEW_KEY))
                .header("x-kc-wait-for-loading-new-content", "true");
            then.status(200).body(ITEM_WARRIOR);
        })
        .await;

    let client = client_for(
        &server,
        delivery_config()
            .with_preview_mode(true)
            .with_wait_for_loading_new_content(true),
    );
    let response = client.item("warrior").unwrap().get().await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.item.system.name, "Warrior");
}

#[tokio::test]
async fn test_not_found_is_a_transport_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(path("/items/unknown_movie"));
            then.status(404).body(NOT_FOUND);
        })
        .await;

    let client = client_for(&server, DeliveryClientConfig::new(project_id()));
    let err = client.item("unknown_movie").unwrap().get().await.unwrap_err();

    assert!(err.is_transport_failure());
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    match err {
        SdkError::Api {
            code,
            request_id,
            error_code,
            ..
        } => {
            assert!(code.is_not_found());
            assert_eq!(code, ApiErrorCode::NotFound);
            assert_eq!(error_code, Some(100));
            assert!(request_id.is_some());
        }
        other => panic!("Expected SdkError::Api, got {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_body_is_malformed_response() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(path("/types"));
            then.status(200).body("{ not json");
        })
        .await;

    let client = client_for(&server, DeliveryClientConfig::new(project_id()));
    let err = client.types().get().await.unwrap_err();

    assert!(err.is_malformed_response());
}

#[tokio::test]
async fn test_types_and_element() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(path("/types"));
            then.status(200).body(TYPES);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(path("/types/movie/elements/category"));
            then.status(200).body(ELEMENT_CATEGORY);
        })
        .await;

    let client = client_for(&server, DeliveryClientConfig::new(project_id()));

    let types = client.types().get().await.unwrap();
    let codenames: Vec<&str> = types.types.iter().map(|t| t.codename()).collect();
    assert_eq!(codenames, vec!["movie", "actor"]);
    assert_eq!(types.pagination.next_page, None);

    let element = client
        .element("movie", "category")
        .unwrap()
        .get()
        .await
        .unwrap()
        .element;
    assert_eq!(element.codename, "category");
    assert_eq!(element.element_type, "multiple_choice");
    assert_eq!(element.options.len(), 3);
}

#[tokio::test]
async fn test_taxonomies() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(path("/taxonomies")).query_param("limit", "2");
            then.status(200).body(TAXONOMIES);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(path("/taxonomies/releasecategory"));
            then.status(200).body(TAXONOMY);
        })
        .await;

    let client = client_for(&server, DeliveryClientConfig::new(project_id()));

    let listing = client.taxonomies().limit(2).get().await.unwrap();
    assert_eq!(listing.taxonomies.len(), 2);
    assert_eq!(listing.taxonomies[1].codename(), "personas");
    assert!(listing.pagination.next_page.is_some());

    let taxonomy = client
        .taxonomy("releasecategory")
        .unwrap()
        .get()
        .await
        .unwrap()
        .taxonomy;
    assert_eq!(taxonomy.terms.len(), 2);
    assert_eq!(taxonomy.find_term("cinema").map(|t| t.name.as_str()), Some("Cinema"));
}
