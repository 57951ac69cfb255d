//! Credential selection for Platform API requests.
//!
//! This module provides the [`Credentials`] type, which resolves to the
//! `Authorization` header attached to every outgoing request.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::config::ApiToken;

/// The identity used to authenticate against the Platform API.
///
/// The variants are mutually exclusive: a client holds exactly one of
/// them, so a basic-auth header and a bearer header can never be emitted
/// for the same request.
///
/// # Example
///
/// ```rust
/// use heroku_api::{ApiToken, Credentials};
///
/// let basic = Credentials::basic("user@example.com", ApiToken::new("api-key").unwrap());
/// assert!(basic.authorization_header().unwrap().starts_with("Basic "));
///
/// let bearer = Credentials::bearer(ApiToken::new("oauth-token").unwrap());
/// assert_eq!(bearer.authorization_header().as_deref(), Some("Bearer oauth-token"));
///
/// assert!(Credentials::Anonymous.authorization_header().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// HTTP basic authentication. Heroku accepts the account email (or an
    /// empty username) together with the API key as the password.
    Basic {
        /// The account username, usually an email address. May be empty.
        username: String,
        /// The API key sent as the password.
        password: ApiToken,
    },
    /// An OAuth authorization token sent as `Authorization: Bearer <token>`.
    Bearer(ApiToken),
    /// No `Authorization` header is sent.
    Anonymous,
}

impl Credentials {
    /// Creates basic-auth credentials.
    #[must_use]
    pub fn basic(username: impl Into<String>, password: ApiToken) -> Self {
        Self::Basic {
            username: username.into(),
            password,
        }
    }

    /// Creates bearer-token credentials.
    #[must_use]
    pub const fn bearer(token: ApiToken) -> Self {
        Self::Bearer(token)
    }

    /// Returns `true` if no credentials are attached to requests.
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }

    /// Returns the `Authorization` header value for this identity.
    #[must_use]
    pub fn authorization_header(&self) -> Option<String> {
        match self {
            Self::Basic { username, password } => {
                let encoded = STANDARD.encode(format!("{username}:{}", password.as_ref()));
                Some(format!("Basic {encoded}"))
            }
            Self::Bearer(token) => Some(format!("Bearer {}", token.as_ref())),
            Self::Anonymous => None,
        }
    }
}
