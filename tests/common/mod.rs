//! Shared helpers for integration tests.
#![allow(dead_code)]

use kontent_sdk::{
    ApiKey, ApiResponse, Codename, DeliveryClient, DeliveryClientConfig, HttpRequest, HttpService,
    ProjectId, SdkError,
};
use reqwest::StatusCode;
use std::sync::{Arc, Mutex};

pub const PROJECT_ID: &str = "975bf280-fd91-488c-994c-2f04416e5ee3";
pub const MANAGEMENT_PROJECT_ID: &str = "bb6882a0-3088-405c-a61e-b9d5b7d8b0c5";
pub const PREVIEW_KEY: &str = "ew0KICAiYWxnIjoiSFMyNTYiLA0KICAidHlwIjoiSldUIg0KfQ.preview";
pub const SECURED_KEY: &str = "ew0KICAiYWxnIjoiSFMyNTYiLA0KICAidHlwIjoiSldUIg0KfQ.secured";
pub const MANAGEMENT_KEY: &str = "ew0KICAiYWxnIjoiSFMyNTYiLA0KICAidHlwIjoiSldUIg0KfQ.manage";

pub fn project_id() -> ProjectId {
    ProjectId::parse(PROJECT_ID).unwrap()
}

pub fn delivery_config() -> DeliveryClientConfig {
    DeliveryClientConfig::new(project_id())
        .with_preview_api_key(ApiKey::new(PREVIEW_KEY).unwrap())
        .with_secured_api_key(ApiKey::new(SECURED_KEY).unwrap())
}

pub fn with_default_language(config: DeliveryClientConfig, language: &str) -> DeliveryClientConfig {
    config.with_default_language(Codename::new(language).unwrap())
}

/// Answers every request with the same canned response and records what
/// was sent.
pub struct RecordingHttpService {
    status: StatusCode,
    body: String,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingHttpService {
    pub fn new(status: StatusCode, body: &str) -> Arc<Self> {
        Arc::new(Self {
            status,
            body: body.to_string(),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl HttpService for RecordingHttpService {
    async fn send(&self, request: HttpRequest) -> Result<ApiResponse<String>, SdkError> {
        let url = request.url.clone();
        self.requests.lock().unwrap().push(request);
        Ok(ApiResponse {
            data: self.body.clone(),
            status: self.status,
            url,
        })
    }
}

pub fn offline_client(config: DeliveryClientConfig) -> DeliveryClient {
    let http = RecordingHttpService::new(StatusCode::OK, "{}");
    DeliveryClient::with_http_service(config, http).unwrap()
}
