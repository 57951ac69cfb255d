//! Heroku Platform API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for pinning the wire format
//! of every request through the `Accept` header.

use crate::error::ConfigError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Vendor name used in the versioned media type.
pub const API_VENDOR: &str = "heroku";

/// Heroku Platform API version.
///
/// The Platform API negotiates its wire format through the `Accept` header
/// (`application/vnd.heroku+json; version=3`). Every request sent by this
/// crate carries exactly the media type produced by [`accept_header`].
///
/// [`accept_header`]: ApiVersion::accept_header
///
/// # Example
///
/// ```rust
/// use heroku_api::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version.accept_header(), "application/vnd.heroku+json; version=3");
///
/// let version: ApiVersion = "3".parse().unwrap();
/// assert_eq!(version, ApiVersion::V3);
/// ```
///
/// Versions compare by the number sent on the wire, so
/// `ApiVersion::Custom(3) == ApiVersion::V3`.
#[derive(Clone, Debug)]
pub enum ApiVersion {
    /// Platform API version 3.
    V3,
    /// Any other numeric version, for variants the server may add later.
    Custom(u32),
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V3
    }

    /// Returns `true` if this is a known stable API version.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        self.number() == 3
    }

    /// Returns the numeric version sent on the wire.
    #[must_use]
    pub const fn number(&self) -> u32 {
        match self {
            Self::V3 => 3,
            Self::Custom(n) => *n,
        }
    }

    /// Returns the full `Accept` header value pinning this version.
    #[must_use]
    pub fn accept_header(&self) -> String {
        format!("application/vnd.{API_VENDOR}+json; version={self}")
    }
}

impl PartialEq for ApiVersion {
    fn eq(&self, other: &Self) -> bool {
        self.number() == other.number()
    }
}

impl Eq for ApiVersion {}

impl Hash for ApiVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number().hash(state);
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.parse::<u32>() {
            Ok(3) => Ok(Self::V3),
            Ok(n) if n > 0 => Ok(Self::Custom(n)),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}
