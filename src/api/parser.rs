// src/api/parser.rs
//! Turns raw HTTP results into response contracts or classified errors.

use super::client::ApiResponse;
use super::responses::ErrorContract;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{ApiErrorCode, SdkError};
use reqwest::StatusCode;

/// Parse any API response into its contract type.
///
/// Non-2xx statuses become `SdkError::Api`, carrying the API's error body
/// when it can be decoded.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, SdkError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_contract(&result.data, &result.url)
    } else {
        Err(parse_error(&result.data, result.status, &result.url))
    }
}

fn parse_contract<T>(body: &str, url: &str) -> Result<T, SdkError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);

        SdkError::Deserialization {
            source: e,
            body: preview(body),
        }
    })
}

fn parse_error(body: &str, status: StatusCode, url: &str) -> SdkError {
    log::warn!("{} responded with HTTP {}", url, status);

    let code = ApiErrorCode::from_http_status(status);

    match serde_json::from_str::<ErrorContract>(body) {
        Ok(error) => SdkError::Api {
            code,
            status,
            message: error.message,
            request_id: error.request_id,
            error_code: error.error_code,
            specific_code: error.specific_code,
        },
        // Fallback to generic error with HTTP status code
        Err(_) => SdkError::Api {
            code,
            status,
            message: format!("HTTP {} from {}", status, url),
            request_id: None,
            error_code: None,
            specific_code: None,
        },
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let truncated: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        body.to_string()
    }
}
