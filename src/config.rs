// src/config.rs
use crate::constants::{DELIVERY_BASE_URL, DELIVERY_PREVIEW_BASE_URL, MANAGEMENT_BASE_URL};
use crate::error::SdkError;
use crate::types::{ApiKey, Codename, Header, ProjectId, ValidationError};

const ENV_PROJECT_ID: &str = "KONTENT_PROJECT_ID";
const ENV_PREVIEW_API_KEY: &str = "KONTENT_PREVIEW_API_KEY";
const ENV_SECURED_API_KEY: &str = "KONTENT_SECURED_API_KEY";
const ENV_DEFAULT_LANGUAGE: &str = "KONTENT_DEFAULT_LANGUAGE";
const ENV_MANAGEMENT_API_KEY: &str = "KONTENT_MANAGEMENT_API_KEY";

/// Client-wide Delivery API settings, read-only once the client is built.
#[derive(Debug, Clone)]
pub struct DeliveryClientConfig {
    pub project_id: ProjectId,
    pub preview_api_key: Option<ApiKey>,
    pub secured_api_key: Option<ApiKey>,
    pub enable_preview_mode: bool,
    pub enable_secured_mode: bool,
    /// Language applied to item queries that do not name one explicitly.
    pub default_language: Option<Codename>,
    pub wait_for_loading_new_content: bool,
    pub base_url: String,
    pub preview_base_url: String,
}

impl DeliveryClientConfig {
    pub fn new(project_id: ProjectId) -> Self {
        Self {
            project_id,
            preview_api_key: None,
            secured_api_key: None,
            enable_preview_mode: false,
            enable_secured_mode: false,
            default_language: None,
            wait_for_loading_new_content: false,
            base_url: DELIVERY_BASE_URL.to_string(),
            preview_base_url: DELIVERY_PREVIEW_BASE_URL.to_string(),
        }
    }

    /// Resolves a configuration from `KONTENT_*` environment variables.
    ///
    /// A preview key switches preview mode on, a secured key switches
    /// secured mode on.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, SdkError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let project_id = lookup(ENV_PROJECT_ID).ok_or_else(|| {
            SdkError::MissingConfiguration(format!(
                "{} environment variable not set",
                ENV_PROJECT_ID
            ))
        })?;

        let mut config = Self::new(ProjectId::parse(&project_id)?);

        if let Some(key) = lookup(ENV_PREVIEW_API_KEY) {
            config = config.with_preview_api_key(ApiKey::new(key)?).with_preview_mode(true);
        }
        if let Some(key) = lookup(ENV_SECURED_API_KEY) {
            config = config.with_secured_api_key(ApiKey::new(key)?).with_secured_mode(true);
        }
        if let Some(language) = lookup(ENV_DEFAULT_LANGUAGE) {
            config = config.with_default_language(Codename::new(language)?);
        }

        Ok(config)
    }

    pub fn with_preview_api_key(self, key: ApiKey) -> Self {
        Self {
            preview_api_key: Some(key),
            ..self
        }
    }

    pub fn with_secured_api_key(self, key: ApiKey) -> Self {
        Self {
            secured_api_key: Some(key),
            ..self
        }
    }

    pub fn with_preview_mode(self, enabled: bool) -> Self {
        Self {
            enable_preview_mode: enabled,
            ..self
        }
    }

    pub fn with_secured_mode(self, enabled: bool) -> Self {
        Self {
            enable_secured_mode: enabled,
            ..self
        }
    }

    pub fn with_default_language(self, language: Codename) -> Self {
        Self {
            default_language: Some(language),
            ..self
        }
    }

    pub fn with_wait_for_loading_new_content(self, enabled: bool) -> Self {
        Self {
            wait_for_loading_new_content: enabled,
            ..self
        }
    }

    /// Overrides the published-content host (e.g. a proxy or a mock server).
    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_base_url(base_url.into()),
            ..self
        }
    }

    pub fn with_preview_base_url(self, base_url: impl Into<String>) -> Self {
        Self {
            preview_base_url: trim_base_url(base_url.into()),
            ..self
        }
    }

    /// Checks that every enabled mode has its key.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.enable_preview_mode && self.preview_api_key.is_none() {
            return Err(ValidationError::MissingApiKey {
                mode: "preview",
                key: "preview API key",
            });
        }
        if self.enable_secured_mode && self.secured_api_key.is_none() {
            return Err(ValidationError::MissingApiKey {
                mode: "secured",
                key: "secured API key",
            });
        }
        validate_base_url(&self.base_url)?;
        validate_base_url(&self.preview_base_url)
    }

    /// Project-scoped endpoint for published or preview content.
    pub(crate) fn endpoint(&self, use_preview: bool) -> String {
        let base = if use_preview {
            &self.preview_base_url
        } else {
            &self.base_url
        };
        format!("{}/{}", base, self.project_id)
    }
}

/// Per-request overrides of the client-wide Delivery settings.
///
/// Fields left as `None` fall back to the client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryConfig {
    pub use_preview_mode: Option<bool>,
    pub use_secured_mode: Option<bool>,
    pub wait_for_loading_new_content: Option<bool>,
    pub custom_headers: Vec<Header>,
}

impl QueryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preview_mode(self, enabled: bool) -> Self {
        Self {
            use_preview_mode: Some(enabled),
            ..self
        }
    }

    pub fn secured_mode(self, enabled: bool) -> Self {
        Self {
            use_secured_mode: Some(enabled),
            ..self
        }
    }

    pub fn wait_for_loading_new_content(self, enabled: bool) -> Self {
        Self {
            wait_for_loading_new_content: Some(enabled),
            ..self
        }
    }

    pub fn custom_header(mut self, header: Header) -> Self {
        self.custom_headers.push(header);
        self
    }

    pub(crate) fn effective_preview(&self, config: &DeliveryClientConfig) -> bool {
        self.use_preview_mode.unwrap_or(config.enable_preview_mode)
    }

    pub(crate) fn effective_secured(&self, config: &DeliveryClientConfig) -> bool {
        self.use_secured_mode.unwrap_or(config.enable_secured_mode)
    }

    pub(crate) fn effective_wait(&self, config: &DeliveryClientConfig) -> bool {
        self.wait_for_loading_new_content
            .unwrap_or(config.wait_for_loading_new_content)
    }
}

/// Content Management API settings.
#[derive(Debug, Clone)]
pub struct ManagementClientConfig {
    pub project_id: ProjectId,
    pub api_key: ApiKey,
    pub base_url: String,
}

impl ManagementClientConfig {
    pub fn new(project_id: ProjectId, api_key: ApiKey) -> Self {
        Self {
            project_id,
            api_key,
            base_url: MANAGEMENT_BASE_URL.to_string(),
        }
    }

    /// Resolves `KONTENT_PROJECT_ID` and `KONTENT_MANAGEMENT_API_KEY`.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, SdkError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing = |name: &str| {
            SdkError::MissingConfiguration(format!("{} environment variable not set", name))
        };

        let project_id = lookup(ENV_PROJECT_ID).ok_or_else(|| missing(ENV_PROJECT_ID))?;
        let api_key =
            lookup(ENV_MANAGEMENT_API_KEY).ok_or_else(|| missing(ENV_MANAGEMENT_API_KEY))?;

        Ok(Self::new(
            ProjectId::parse(&project_id)?,
            ApiKey::new(api_key)?,
        ))
    }

    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_base_url(base_url.into()),
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_base_url(&self.base_url)
    }

    pub(crate) fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url, self.project_id)
    }
}

/// Per-request settings for Content Management queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManagementQueryConfig {
    pub custom_headers: Vec<Header>,
}

impl ManagementQueryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn custom_header(mut self, header: Header) -> Self {
        self.custom_headers.push(header);
        self
    }
}

fn trim_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn validate_base_url(base_url: &str) -> Result<(), ValidationError> {
    let parsed = url::Url::parse(base_url).map_err(|e| ValidationError::InvalidUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ValidationError::InvalidUrl {
            url: base_url.to_string(),
            reason: "Only HTTP and HTTPS URLs are supported".to_string(),
        });
    }
    Ok(())
}
