//! Configuration types for the Heroku API client.
//!
//! This module provides the configuration types used to initialize a client
//! for the Heroku Platform API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ClientConfig`]: The immutable configuration shared by every call
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`ApiToken`]: A validated API key / OAuth token with masked debug output
//! - [`BaseUrl`]: A validated base endpoint
//! - [`ApiVersion`]: The Platform API version pinned in the `Accept` header
//!
//! # Example
//!
//! ```rust
//! use heroku_api::{ClientConfig, ApiToken, ApiVersion, BaseUrl};
//!
//! let config = ClientConfig::builder()
//!     .basic_auth("email@me.com", ApiToken::new("my-api-key").unwrap())
//!     .base_url(BaseUrl::new("https://api.heroku.com").unwrap())
//!     .api_version(ApiVersion::V3)
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};

pub use newtypes::{ApiToken, BaseUrl};
pub use version::{ApiVersion, API_VENDOR};

use crate::auth::Credentials;
use crate::clients::CLIENT_VERSION;
use crate::error::ConfigError;

/// Returns the `User-Agent` sent when none is configured.
#[must_use]
pub fn default_user_agent() -> String {
    format!(
        "heroku-api-rust/{CLIENT_VERSION} ({}; {})",
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Configuration for the Heroku API client.
///
/// Holds the identity, endpoint and transport settings used by every call.
/// A `ClientConfig` is created once and never mutated afterwards.
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use heroku_api::{ClientConfig, ApiToken};
///
/// let config = ClientConfig::builder()
///     .bearer_token(ApiToken::new("oauth-token").unwrap())
///     .user_agent("my-deployer/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_agent(), "my-deployer/1.0");
/// assert_eq!(config.base_url().as_ref(), "https://api.heroku.com");
/// ```
#[derive(Clone, Debug)]
pub struct ClientConfig {
    credentials: Credentials,
    base_url: BaseUrl,
    api_version: ApiVersion,
    user_agent: String,
    additional_headers: HeaderMap,
    timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the configured credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the base endpoint.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns headers added to every request.
    #[must_use]
    pub const fn additional_headers(&self) -> &HeaderMap {
        &self.additional_headers
    }

    /// Returns the per-request timeout handed to the transport, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the transport override, if one was supplied.
    #[must_use]
    pub const fn http_client(&self) -> Option<&reqwest::Client> {
        self.http_client.as_ref()
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// Exactly one authentication mode must be chosen through
/// [`basic_auth`](Self::basic_auth), [`bearer_token`](Self::bearer_token),
/// [`credentials`](Self::credentials) or [`anonymous`](Self::anonymous).
/// Choosing a mode replaces any previously chosen one.
///
/// # Defaults
///
/// - `base_url`: `https://api.heroku.com`
/// - `api_version`: [`ApiVersion::V3`]
/// - `user_agent`: `heroku-api-rust/<version> (<os>; <arch>)`
/// - `additional_headers`: none
/// - `timeout`: none (transport default)
/// - `http_client`: a new rustls-backed `reqwest::Client`
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use heroku_api::{ClientConfig, ApiToken, BaseUrl};
///
/// let config = ClientConfig::builder()
///     .basic_auth("email@me.com", ApiToken::new("key").unwrap())
///     .base_url(BaseUrl::new("https://api.example.com").unwrap())
///     .header("X-Heroku-Sudo", "true")
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
///
/// assert!(config.additional_headers().contains_key("x-heroku-sudo"));
/// ```
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    credentials: Option<Credentials>,
    base_url: Option<BaseUrl>,
    api_version: Option<ApiVersion>,
    user_agent: Option<String>,
    additional_headers: Vec<(String, String)>,
    timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Authenticates with HTTP basic auth (account email and API key).
    #[must_use]
    pub fn basic_auth(mut self, username: impl Into<String>, password: ApiToken) -> Self {
        self.credentials = Some(Credentials::basic(username, password));
        self
    }

    /// Authenticates with an OAuth bearer token.
    #[must_use]
    pub fn bearer_token(mut self, token: ApiToken) -> Self {
        self.credentials = Some(Credentials::bearer(token));
        self
    }

    /// Sets the credentials directly.
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sends requests without an `Authorization` header.
    #[must_use]
    pub fn anonymous(mut self) -> Self {
        self.credentials = Some(Credentials::Anonymous);
        self
    }

    /// Overrides the base endpoint.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Replaces the default `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Adds a header sent with every request.
    ///
    /// `Accept` is rejected at [`build`](Self::build) time.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_headers.push((name.into(), value.into()));
        self
    }

    /// Sets the per-request deadline enforced by the transport.
    ///
    /// Ignored when a custom [`http_client`](Self::http_client) is supplied;
    /// configure the deadline on that client instead.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Supplies the pooled transport to use instead of a new one.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`ClientConfig`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] if no authentication mode
    /// was chosen, [`ConfigError::AcceptHeaderOverride`] if an additional
    /// header targets `Accept`, and [`ConfigError::InvalidHeader`] for
    /// malformed header names or values.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let credentials = self.credentials.ok_or(ConfigError::MissingCredentials)?;
        let additional_headers = validate_headers(self.additional_headers)?;

        Ok(ClientConfig {
            credentials,
            base_url: self.base_url.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            user_agent: self.user_agent.unwrap_or_else(default_user_agent),
            additional_headers,
            timeout: self.timeout,
            http_client: self.http_client,
        })
    }
}

/// Validates configured headers. Values are marked sensitive, so they never
/// appear in `Debug` output.
fn validate_headers(headers: Vec<(String, String)>) -> Result<HeaderMap, ConfigError> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| ConfigError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        if header_name == ACCEPT {
            return Err(ConfigError::AcceptHeaderOverride);
        }
        let mut header_value =
            HeaderValue::from_str(&value).map_err(|e| ConfigError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        header_value.set_sensitive(true);
        map.insert(header_name, header_value);
    }
    Ok(map)
}
