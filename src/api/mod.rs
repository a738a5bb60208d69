// src/api/mod.rs
//! Kontent API interaction: HTTP transport, response contracts and parsing.
//!
//! Queries depend on the `HttpService` trait, never on reqwest directly.

pub mod client;
pub mod parser;
pub(crate) mod responses;
pub(crate) mod service;

pub use client::{ApiResponse, HttpMethod, HttpRequest, HttpService, ReqwestHttpService};
pub use parser::parse_api_response;
