//! HTTP client types for Heroku Platform API communication.
//!
//! This module provides the layer every generated call goes through:
//! building a request from a verb, a path and optional options, attaching
//! credentials and version pinning, sending it once, and turning the
//! response into a typed value or a classified error.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: Prepares, sends and interprets requests
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response from the API
//! - [`ApiResponse`]: A decoded response with its pagination cursor
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, PUT, DELETE)
//! - [`ListRange`], [`PageCursor`], [`NextPage`]: Range-header pagination
//! - [`HttpError`]: The failure union every call returns
//! - [`rest::RestClient`]: Typed convenience methods used by resource calls
//!
//! # Example
//!
//! ```rust,ignore
//! use heroku_api::{ClientConfig, ApiToken, HttpClient, HttpRequest, HttpMethod};
//!
//! let config = ClientConfig::builder()
//!     .basic_auth("email@me.com", ApiToken::new("api-key").unwrap())
//!     .build()?;
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/apps").build()?;
//! let apps: ApiResponse<Vec<serde_json::Value>> = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! There is none. Each call makes exactly one network attempt and returns
//! its outcome; retries, backoff and rate limiting belong to the caller.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod pagination;
pub mod rest;

pub use errors::{ApiError, DecodeError, HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, CLIENT_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{ApiResponse, HttpResponse};
pub use pagination::{ListRange, NextPage, PageCursor, RangeHeader};

// Re-export the REST client at the clients module level
pub use rest::RestClient;
