// src/constants.rs
//! Fixed values of the remote API: endpoints, header names and the SDK
//! identity sent with every request.

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

/// Delivery API for published content. The project ID is appended as the
/// first path segment.
pub const DELIVERY_BASE_URL: &str = "https://deliver.kenticocloud.com";

/// Delivery API for unpublished (preview) content.
pub const DELIVERY_PREVIEW_BASE_URL: &str = "https://preview-deliver.kenticocloud.com";

/// Content Management API, version 2.
pub const MANAGEMENT_BASE_URL: &str = "https://manage.kenticocloud.com/v2/projects";

// ---------------------------------------------------------------------------
// Headers
// ---------------------------------------------------------------------------

/// Identifies the SDK as `host;name;version`.
pub const SDK_ID_HEADER: &str = "X-KC-SDKID";

/// Asks the Delivery API to wait until freshly published content is available.
pub const WAIT_FOR_LOADING_NEW_CONTENT_HEADER: &str = "X-KC-Wait-For-Loading-New-Content";

/// Continuation token for paging through Content Management listings.
pub const CONTINUATION_HEADER: &str = "X-Continuation";

pub const AUTHORIZATION_HEADER: &str = "Authorization";

// ---------------------------------------------------------------------------
// SDK identity
// ---------------------------------------------------------------------------

pub const SDK_HOST: &str = "crates.io";
pub const SDK_NAME: &str = env!("CARGO_PKG_NAME");
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing undecodable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;
