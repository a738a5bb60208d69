// src/api/client.rs
//! Pure HTTP transport.
//!
//! `HttpService` is the injection point for custom transports; the default
//! implementation wraps a reqwest `Client`. Requests and responses are plain
//! data so that queries stay free of transport details.

use crate::error::SdkError;
use crate::types::{Header, ValidationError};
use reqwest::{header, Client, Response};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A fully assembled request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<Header>,
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    pub fn get(url: String, headers: Vec<Header>) -> Self {
        Self {
            method: HttpMethod::Get,
            url,
            headers,
            body: None,
        }
    }

    pub fn post(url: String, headers: Vec<Header>, body: serde_json::Value) -> Self {
        Self {
            method: HttpMethod::Post,
            url,
            headers,
            body: Some(body),
        }
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// The ability to perform one HTTP round-trip.
///
/// Implementations must not retry: one call, one request.
#[async_trait::async_trait]
pub trait HttpService: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<ApiResponse<String>, SdkError>;
}

/// Default transport backed by reqwest.
#[derive(Clone)]
pub struct ReqwestHttpService {
    client: Client,
}

impl ReqwestHttpService {
    pub fn new() -> Result<Self, SdkError> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// Uses a preconfigured client (timeouts, proxies, TLS settings).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn header_map(headers: &[Header]) -> Result<header::HeaderMap, SdkError> {
        let mut map = header::HeaderMap::with_capacity(headers.len() + 1);

        for h in headers {
            let name = header::HeaderName::from_bytes(h.name.as_bytes()).map_err(|e| {
                ValidationError::InvalidHeader {
                    name: h.name.clone(),
                    reason: e.to_string(),
                }
            })?;
            let value = header::HeaderValue::from_str(&h.value).map_err(|e| {
                ValidationError::InvalidHeader {
                    name: h.name.clone(),
                    reason: e.to_string(),
                }
            })?;
            map.append(name, value);
        }

        Ok(map)
    }
}

#[async_trait::async_trait]
impl HttpService for ReqwestHttpService {
    async fn send(&self, request: HttpRequest) -> Result<ApiResponse<String>, SdkError> {
        let headers = Self::header_map(&request.headers)?;

        let builder = match request.method {
            HttpMethod::Get => {
                log::debug!("GET {}", request.url);
                self.client.get(&request.url)
            }
            HttpMethod::Post => {
                log::debug!("POST {}", request.url);
                self.client.post(&request.url)
            }
        };

        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder.headers(headers).send().await?;
        log::debug!("{} responded with {}", request.url, response.status());

        extract_response_text(response).await
    }
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, SdkError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
