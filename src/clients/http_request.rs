//! HTTP request types for the Heroku API client.
//!
//! This module provides the [`HttpRequest`] descriptor and its builder.
//! The builder turns a verb, a relative path, an optional body and extra
//! headers into a validated request; [`HttpClient`](crate::clients::HttpClient)
//! adds the base URL, version pinning and credentials when sending it.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, RANGE};
use serde::Serialize;

use crate::clients::errors::InvalidHttpRequestError;
use crate::clients::pagination::RangeHeader;

/// HTTP methods used by the Platform API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Retrieve a resource or list.
    Get,
    /// Create a resource.
    Post,
    /// Partially update a resource.
    Patch,
    /// Replace a resource.
    Put,
    /// Remove a resource.
    Delete,
}

impl HttpMethod {
    /// Returns `true` for verbs whose requests always carry a JSON body.
    ///
    /// Calls with these verbs and no options send `{}`.
    #[must_use]
    pub const fn requires_body(&self) -> bool {
        matches!(self, Self::Post | Self::Patch | Self::Put)
    }

    /// Returns the verb as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// A request to be sent to the Platform API.
///
/// Use [`HttpRequest::builder`] to construct requests.
///
/// # Example
///
/// ```rust
/// use heroku_api::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// let get = HttpRequest::builder(HttpMethod::Get, "/apps").build().unwrap();
/// assert!(get.body.is_none());
///
/// // Body-carrying verbs without options send an empty object
/// let post = HttpRequest::builder(HttpMethod::Post, "/apps").build().unwrap();
/// assert_eq!(post.body, Some(json!({})));
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the base URL.
    pub path: String,
    /// The JSON body, if any.
    pub body: Option<serde_json::Value>,
    /// Caller-supplied headers, merged over the client defaults.
    pub headers: HeaderMap,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
///
/// Serialization and header problems are collected while building and
/// reported by [`build`](Self::build).
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    headers: Vec<(String, String)>,
    range: Option<RangeHeader>,
    error: Option<InvalidHttpRequestError>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            headers: Vec::new(),
            range: None,
            error: None,
        }
    }

    /// Serializes `body` as the JSON request body.
    ///
    /// Option structs control which keys appear through their serde
    /// attributes; see [`MaybeUndefined`](crate::MaybeUndefined).
    #[must_use]
    pub fn body<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => self.body = Some(value),
            Err(e) => {
                self.error.get_or_insert(InvalidHttpRequestError::BodySerialization {
                    message: e.to_string(),
                });
            }
        }
        self
    }

    /// Sets the body from an optional options struct.
    ///
    /// `None` leaves the body to the verb's default.
    #[must_use]
    pub fn options<B: Serialize>(self, options: Option<&B>) -> Self {
        match options {
            Some(options) => self.body(options),
            None => self,
        }
    }

    /// Adds an extra header. Later writes to the same name (in any case) win.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the `Range` header, overriding any `Range` passed to
    /// [`header`](Self::header).
    #[must_use]
    pub fn range(mut self, range: impl Into<RangeHeader>) -> Self {
        self.range = Some(range.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the body failed to serialize,
    /// a header is malformed, or `Accept` was set.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                InvalidHttpRequestError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            if header_name == ACCEPT {
                return Err(InvalidHttpRequestError::AcceptHeaderOverride);
            }
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                InvalidHttpRequestError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            headers.insert(header_name, header_value);
        }

        if let Some(range) = &self.range {
            let value = HeaderValue::from_str(range.as_ref()).map_err(|e| {
                InvalidHttpRequestError::InvalidHeader {
                    name: RANGE.to_string(),
                    reason: e.to_string(),
                }
            })?;
            headers.insert(RANGE, value);
        }

        let body = match self.body {
            Some(body) => Some(body),
            None if self.http_method.requires_body() => {
                Some(serde_json::Value::Object(serde_json::Map::new()))
            }
            None => None,
        };

        Ok(HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body,
            headers,
        })
    }
}
