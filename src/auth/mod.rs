//! Authentication types for the Heroku Platform API.
//!
//! The Platform API accepts either HTTP basic authentication (account email
//! plus API key) or an OAuth bearer token. [`Credentials`] captures exactly
//! one of these modes, or the explicit anonymous mode, and is resolved into
//! the `Authorization` header by the HTTP client.
//!
//! # Example
//!
//! ```rust
//! use heroku_api::{ApiToken, ClientConfig, Credentials};
//!
//! let config = ClientConfig::builder()
//!     .bearer_token(ApiToken::new("oauth-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert!(matches!(config.credentials(), Credentials::Bearer(_)));
//! ```

mod credentials;

pub use credentials::Credentials;
