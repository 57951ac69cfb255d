//! Error types for the Heroku API client.
//!
//! This module contains error types used throughout the crate for configuration
//! and validation errors. Request-time errors live in
//! [`clients`](crate::clients).
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use heroku_api::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API token or password cannot be empty.
    #[error("API token cannot be empty. Please provide a valid Heroku API key or OAuth token.")]
    EmptyApiToken,

    /// No authentication mode was selected.
    #[error("No credentials configured. Use basic_auth(), bearer_token() or anonymous() before building the client.")]
    MissingCredentials,

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected a positive integer (e.g., '3').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.heroku.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The `Accept` header is pinned to the API version and cannot be overridden.
    #[error("The Accept header is pinned to the configured API version and cannot be set as an additional header.")]
    AcceptHeaderOverride,

    /// An additional header has an invalid name or value.
    #[error("Invalid additional header '{name}': {reason}")]
    InvalidHeader {
        /// The header name that was provided.
        name: String,
        /// Why the header was rejected.
        reason: String,
    },

    /// The underlying HTTP transport could not be created.
    #[error("Failed to initialize HTTP transport: {reason}")]
    TransportInit {
        /// The reason reported by the transport.
        reason: String,
    },
}
