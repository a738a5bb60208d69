// src/query/url.rs
//! URL and header assembly for Delivery requests.

use super::filters::Filter;
use super::parameters::{QueryParameter, LANGUAGE_PARAMETER};
use crate::config::{DeliveryClientConfig, QueryConfig};
use crate::constants::{
    AUTHORIZATION_HEADER, SDK_HOST, SDK_ID_HEADER, SDK_NAME, SDK_VERSION,
    WAIT_FOR_LOADING_NEW_CONTENT_HEADER,
};
use crate::types::{Codename, Header, ValidationError};

/// Computes the parameter list actually sent with a request.
///
/// Singleton kinds (language, depth, ...) collapse to their last occurrence,
/// which keeps its position. The default language is appended only when no
/// parameter named `language` remains, custom ones included, so an explicit
/// language always wins.
pub fn resolve_parameters(
    explicit: &[QueryParameter],
    default_language: Option<&Codename>,
) -> Vec<QueryParameter> {
    let mut resolved: Vec<QueryParameter> = explicit
        .iter()
        .enumerate()
        .filter(|(index, parameter)| match parameter.singleton_kind() {
            Some(kind) => !explicit[index + 1..]
                .iter()
                .any(|later| later.singleton_kind() == Some(kind)),
            None => true,
        })
        .map(|(_, parameter)| parameter.clone())
        .collect();

    if let Some(language) = default_language {
        let has_language = resolved
            .iter()
            .any(|p| p.parameter_name() == LANGUAGE_PARAMETER);
        if !has_language {
            resolved.push(QueryParameter::Language(language.clone()));
        }
    }

    resolved
}

/// Scopes an item listing to one content type.
///
/// Any `system.type` term the caller added is replaced by the scoping
/// filter, so the URL carries exactly one.
pub(crate) fn scope_to_type(
    explicit: &[QueryParameter],
    content_type: &Codename,
) -> Vec<QueryParameter> {
    let scoping = Filter::system_type(content_type);
    let name = scoping.parameter_name();

    let mut scoped: Vec<QueryParameter> = explicit
        .iter()
        .filter(|p| {
            let replaced = p.parameter_name() == name;
            if replaced {
                log::debug!("Replacing explicit {} with content type '{}'", name, content_type);
            }
            !replaced
        })
        .cloned()
        .collect();
    scoped.push(scoping.into());
    scoped
}

/// Serializes parameters in order, joined by `&`.
pub fn build_query_string(parameters: &[QueryParameter]) -> String {
    parameters
        .iter()
        .map(QueryParameter::to_query_string)
        .collect::<Vec<_>>()
        .join("&")
}

/// `endpoint + path`, followed by `?query` when there are parameters.
pub fn build_url(endpoint: &str, path: &str, parameters: &[QueryParameter]) -> String {
    let query = build_query_string(parameters);
    if query.is_empty() {
        format!("{}{}", endpoint, path)
    } else {
        format!("{}{}?{}", endpoint, path, query)
    }
}

/// Encodes a codename or identifier for use as a single path segment.
pub(crate) fn path_segment(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

pub(crate) fn sdk_header() -> Header {
    Header::trusted(
        SDK_ID_HEADER,
        format!("{};{};{}", SDK_HOST, SDK_NAME, SDK_VERSION),
    )
}

/// Headers for a Delivery request under the effective query configuration.
///
/// Preview takes precedence over secured mode for authorization; custom
/// headers come last.
pub fn delivery_headers(
    config: &DeliveryClientConfig,
    query_config: &QueryConfig,
) -> Result<Vec<Header>, ValidationError> {
    let mut headers = vec![sdk_header()];

    if query_config.effective_preview(config) {
        let key = config
            .preview_api_key
            .as_ref()
            .ok_or(ValidationError::MissingApiKey {
                mode: "preview",
                key: "preview API key",
            })?;
        headers.push(Header::trusted(AUTHORIZATION_HEADER, key.bearer()));
    } else if query_config.effective_secured(config) {
        let key = config
            .secured_api_key
            .as_ref()
            .ok_or(ValidationError::MissingApiKey {
                mode: "secured",
                key: "secured API key",
            })?;
        headers.push(Header::trusted(AUTHORIZATION_HEADER, key.bearer()));
    }

    if query_config.effective_wait(config) {
        headers.push(Header::trusted(WAIT_FOR_LOADING_NEW_CONTENT_HEADER, "true"));
    }

    headers.extend(query_config.custom_headers.iter().cloned());
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ApiKey, ProjectId};
    use pretty_assertions::assert_eq;

    fn codename(value: &str) -> Codename {
        Codename::new(value).unwrap()
    }

    fn config() -> DeliveryClientConfig {
        DeliveryClientConfig::new(ProjectId::parse("975bf280-fd91-488c-994c-2f04416e5ee3").unwrap())
    }

    #[test]
    fn default_language_is_injected_once() {
        let resolved = resolve_parameters(&[QueryParameter::Depth(1)], Some(&codename("en")));
        assert_eq!(
            resolved,
            vec![
                QueryParameter::Depth(1),
                QueryParameter::Language(codename("en"))
            ]
        );
    }

    #[test]
    fn explicit_language_wins_over_default() {
        let explicit = vec![QueryParameter::Language(codename("es-ES"))];
        let resolved = resolve_parameters(&explicit, Some(&codename("en")));
        assert_eq!(resolved, explicit);
    }

    #[test]
    fn last_explicit_singleton_wins() {
        let explicit = vec![
            QueryParameter::Language(codename("en")),
            QueryParameter::Limit(10),
            QueryParameter::Language(codename("cz")),
        ];
        let resolved = resolve_parameters(&explicit, None);
        assert_eq!(
            resolved,
            vec![
                QueryParameter::Limit(10),
                QueryParameter::Language(codename("cz"))
            ]
        );
    }

    #[test]
    fn custom_language_counts_as_explicit() {
        let explicit = vec![QueryParameter::custom("language", "de").unwrap()];
        let resolved = resolve_parameters(&explicit, Some(&codename("en")));
        assert_eq!(resolved, explicit);
    }

    #[test]
    fn type_scoping_replaces_explicit_system_type() {
        let explicit: Vec<QueryParameter> = vec![
            Filter::equals("system.type", "actor").unwrap().into(),
            QueryParameter::Limit(5),
            QueryParameter::custom("system.type", "movie").unwrap(),
        ];
        let scoped = scope_to_type(&explicit, &codename("movie"));
        assert_eq!(build_query_string(&scoped), "limit=5&system.type=movie");
    }

    #[test]
    fn repeated_filters_are_kept() {
        let explicit: Vec<QueryParameter> = vec![
            Filter::equals("elements.a", "1").unwrap().into(),
            Filter::equals("elements.a", "2").unwrap().into(),
        ];
        assert_eq!(resolve_parameters(&explicit, None), explicit);
    }

    #[test]
    fn url_omits_question_mark_without_parameters() {
        assert_eq!(build_url("https://x/p", "/types", &[]), "https://x/p/types");
        assert_eq!(
            build_url("https://x/p", "/types", &[QueryParameter::Limit(2), QueryParameter::Skip(4)]),
            "https://x/p/types?limit=2&skip=4"
        );
    }

    #[test]
    fn path_segments_are_encoded() {
        assert_eq!(path_segment("warrior"), "warrior");
        assert_eq!(path_segment("ext id/1"), "ext%20id%2F1");
    }

    #[test]
    fn public_delivery_has_no_authorization() {
        let headers = delivery_headers(&config(), &QueryConfig::new()).unwrap();
        assert_eq!(headers, vec![sdk_header()]);
        assert_eq!(headers[0].value, format!("crates.io;kontent-sdk;{}", SDK_VERSION));
    }

    #[test]
    fn preview_wins_over_secured() {
        let config = config()
            .with_preview_api_key(ApiKey::new("preview").unwrap())
            .with_secured_api_key(ApiKey::new("secured").unwrap())
            .with_secured_mode(true);

        let headers = delivery_headers(
            &config,
            &QueryConfig::new()
                .preview_mode(true)
                .custom_header(Header::new("X-Custom", "1").unwrap()),
        )
        .unwrap();

        assert_eq!(
            headers,
            vec![
                sdk_header(),
                Header::trusted(AUTHORIZATION_HEADER, "Bearer preview"),
                Header::new("X-Custom", "1").unwrap(),
            ]
        );

        let headers = delivery_headers(&config, &QueryConfig::new()).unwrap();
        assert_eq!(headers[1].value, "Bearer secured");
    }

    #[test]
    fn preview_without_key_fails() {
        let result = delivery_headers(&config(), &QueryConfig::new().preview_mode(true));
        assert!(matches!(
            result,
            Err(ValidationError::MissingApiKey { mode: "preview", .. })
        ));
    }

    #[test]
    fn wait_header_is_sent_on_request() {
        let headers = delivery_headers(
            &config(),
            &QueryConfig::new().wait_for_loading_new_content(true),
        )
        .unwrap();
        assert!(headers
            .iter()
            .any(|h| h.name == WAIT_FOR_LOADING_NEW_CONTENT_HEADER && h.value == "true"));
    }
}
