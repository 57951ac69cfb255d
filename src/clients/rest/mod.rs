//! REST convenience client for the Heroku Platform API.
//!
//! This module provides a higher-level client built on top of the
//! [`HttpClient`](crate::clients::HttpClient). Its typed methods are the
//! contract the per-resource calls in [`resources`](crate::resources) are
//! written against.
//!
//! # Example
//!
//! ```rust,ignore
//! use heroku_api::{RestClient, ClientConfig, ApiToken, ListRange};
//!
//! let config = ClientConfig::builder()
//!     .basic_auth("email@me.com", ApiToken::new("api-key").unwrap())
//!     .build()?;
//! let client = RestClient::new(&config)?;
//!
//! // Single page
//! let apps: ApiResponse<Vec<serde_json::Value>> = client
//!     .list("/apps", Some(ListRange::new().max(100).into()))
//!     .await?;
//!
//! // Every page
//! let all: Vec<serde_json::Value> = client.list_all("/apps", None).await?;
//! ```
//!
//! # Retry Behavior
//!
//! Requests are attempted once. Failures are returned to the caller as
//! [`HttpError`](crate::HttpError) without retry.

mod client;

pub use client::RestClient;
