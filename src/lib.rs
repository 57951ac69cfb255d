//! # Heroku Platform API Rust Client
//!
//! A Rust client for the Heroku Platform API v3, providing type-safe
//! configuration, credential handling, and the shared HTTP core that every
//! per-resource call is built on.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Basic (email + API key), Bearer (OAuth token) or anonymous credentials
//! - Version pinning through the `Accept` header
//! - An async HTTP core that makes exactly one attempt per call
//! - Typed decoding of successes and structured [`ApiError`]s for failures
//! - Range-header pagination via [`ListRange`] and [`PageCursor`]
//! - Sample resources in [`resources`]
//!
//! ## Quick Start
//!
//! ```rust
//! use heroku_api::{ClientConfig, ApiToken, ApiVersion, RestClient};
//!
//! let config = ClientConfig::builder()
//!     .basic_auth("email@me.com", ApiToken::new("my-api-key").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::new(&config).unwrap();
//! assert_eq!(client.api_version(), &ApiVersion::V3);
//! ```
//!
//! ## Making Calls
//!
//! Pass `None` when a call's options are not needed; they are then omitted
//! from the request entirely.
//!
//! ```rust,ignore
//! use heroku_api::resources::{App, AppCreateOpts};
//! use heroku_api::HttpError;
//!
//! let app = App::create(&client, None).await?;
//! println!("Created {}", app.name);
//!
//! let opts = AppCreateOpts {
//!     name: "myapp".to_string().into(),
//!     region: "eu".to_string().into(),
//!     ..Default::default()
//! };
//! match App::create(&client, Some(&opts)).await {
//!     Ok(app) => println!("created app: name={} region={}", app.name, app.region.name),
//!     Err(HttpError::Api(e)) => eprintln!("Error id={} message={:?}", e.id, e.message),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```
//!
//! ## Optional Parameters
//!
//! Option struct fields are [`MaybeUndefined`] values. A field left
//! `Undefined` is omitted from the request body, `Null` is sent as JSON
//! `null`, and a value is sent as-is, so an explicit empty string or
//! `false` is never confused with "not provided".
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: Clients are `Send + Sync` and share one connection pool
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **No hidden retries**: Every failure is returned to the caller

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod optional;
pub mod resources;

// Re-export public types at crate root for convenience
pub use auth::Credentials;
pub use config::{ApiToken, ApiVersion, BaseUrl, ClientConfig, ClientConfigBuilder};
pub use error::ConfigError;
pub use optional::MaybeUndefined;

// Re-export HTTP client types
pub use clients::{
    ApiError, ApiResponse, DecodeError, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, InvalidHttpRequestError, ListRange, NextPage, PageCursor,
    RangeHeader, RestClient,
};
