//! Error types for Platform API calls.
//!
//! Every call returns exactly one of the following failure classes, all
//! wrapped by [`HttpError`]:
//!
//! - [`InvalidHttpRequestError`]: the request was rejected before it was sent
//! - [`HttpError::Transport`]: DNS, connect, TLS, timeout or body read failures
//! - [`DecodeError`]: a 2xx response whose body did not match the expected shape
//! - [`ApiError`]: a non-2xx response, decoded from the body or synthesized
//!
//! None of them are retried, logged or swallowed by the client. Retries and
//! backoff are the caller's decision, and no error invalidates the client.
//!
//! # Example
//!
//! ```rust,ignore
//! use heroku_api::HttpError;
//!
//! match client.get::<App>("/apps/example").await {
//!     Ok(app) => println!("Found {}", app.name),
//!     Err(HttpError::Api(e)) if e.id == "not_found" => println!("No such app"),
//!     Err(HttpError::Api(e)) => println!("API error {}: {}", e.id, e.message),
//!     Err(HttpError::Decode(e)) => println!("Unexpected payload: {e}"),
//!     Err(HttpError::Transport(e)) => println!("Network error: {e}"),
//!     Err(HttpError::InvalidRequest(e)) => println!("Bad request: {e}"),
//! }
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Error returned when a request fails validation before being sent.
///
/// # Example
///
/// ```rust
/// use heroku_api::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::AcceptHeaderOverride;
/// assert!(error.to_string().contains("Accept"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The caller tried to set the version-pinned `Accept` header.
    #[error("The Accept header is pinned to the API version and cannot be overridden.")]
    AcceptHeaderOverride,

    /// A header name or value is not valid HTTP.
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader {
        /// The header name that was provided.
        name: String,
        /// Why the header was rejected.
        reason: String,
    },

    /// The base URL joined with the request path is not a valid URL.
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
        /// Why the URL was rejected.
        reason: String,
    },

    /// The request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {message}")]
    BodySerialization {
        /// The serializer's error message.
        message: String,
    },

    /// The transport rejected the assembled request before sending it.
    #[error("Failed to construct request: {reason}")]
    Construction {
        /// Why the request could not be assembled.
        reason: String,
    },

    /// `next()` was called on a cursor whose listing is complete.
    #[error("Cannot request the next page: the listing has no continuation range.")]
    ExhaustedCursor,
}

/// Error returned when a successful response cannot be decoded.
///
/// This indicates a client/server version mismatch or a corrupted payload,
/// never an API-level failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to decode {status} response at '{path}': {message}")]
pub struct DecodeError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The JSON path where decoding failed (`.` for the document root).
    pub path: String,
    /// The decoder's error message.
    pub message: String,
    /// The raw response body.
    pub body: String,
}

/// A structured failure returned by the Platform API.
///
/// Decoded from the `{"id": ..., "message": ..., "url": ...}` error body
/// the API sends with every non-2xx response. Any additional fields are
/// kept in [`detail`](Self::detail). When the body cannot be decoded, an
/// error is synthesized with [`UNEXPECTED_RESPONSE_ID`](Self::UNEXPECTED_RESPONSE_ID)
/// so no failure is ever silent.
///
/// # Example
///
/// ```rust
/// use heroku_api::ApiError;
///
/// let error = ApiError::from_response(
///     422,
///     r#"{"id":"invalid_params","message":"bad app name"}"#,
///     Some("req-123".to_string()),
/// );
/// assert_eq!(error.id, "invalid_params");
/// assert_eq!(error.message, "bad app name");
/// assert_eq!(error.status, 422);
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{message} (id: {id}, status: {status})")]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// Machine-readable error identifier, e.g. `not_found`.
    pub id: String,
    /// Human-readable error message.
    pub message: String,
    /// Documentation URL for the error, when provided.
    pub url: Option<String>,
    /// Any other fields of the error body, such as per-field details.
    pub detail: Option<serde_json::Value>,
    /// The `Request-Id` response header, for support requests.
    pub request_id: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    id: String,
    message: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

impl ApiError {
    /// The `id` of errors synthesized from undecodable failure bodies.
    pub const UNEXPECTED_RESPONSE_ID: &'static str = "unexpected_response";

    /// Builds an error from a non-2xx response body.
    ///
    /// Falls back to [`synthesize`](Self::synthesize) when the body is not a
    /// JSON object carrying `id` and `message`.
    #[must_use]
    pub fn from_response(status: u16, body: &str, request_id: Option<String>) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => Self {
                status,
                id: parsed.id,
                message: parsed.message,
                url: parsed.url,
                detail: if parsed.extra.is_empty() {
                    None
                } else {
                    Some(serde_json::Value::Object(parsed.extra))
                },
                request_id,
            },
            Err(_) => Self::synthesize(status, body, request_id),
        }
    }

    /// Synthesizes an error carrying the raw status and body text.
    #[must_use]
    pub fn synthesize(status: u16, body: &str, request_id: Option<String>) -> Self {
        let body = body.trim();
        let message = if body.is_empty() {
            reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|code| code.canonical_reason())
                .map_or_else(
                    || format!("Unexpected HTTP status {status}"),
                    ToString::to_string,
                )
        } else {
            body.to_string()
        };

        Self {
            status,
            id: Self::UNEXPECTED_RESPONSE_ID.to_string(),
            message,
            url: None,
            detail: None,
            request_id,
        }
    }

    /// Returns `true` if this error was synthesized rather than decoded.
    #[must_use]
    pub fn is_synthesized(&self) -> bool {
        self.id == Self::UNEXPECTED_RESPONSE_ID
    }
}

/// Unified error type for Platform API calls.
///
/// Callers switch on the variant instead of inspecting status codes.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed; nothing was sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The transport failed before a complete response was received.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response did not match the expected shape.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The API returned a non-2xx response.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl HttpError {
    /// Returns `true` if the failure came from the remote API.
    #[must_use]
    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// Returns the API error, if this is one.
    #[must_use]
    pub const fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Returns `true` if the failure happened in the transport.
    #[must_use]
    pub const fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns `true` if a successful response could not be decoded.
    #[must_use]
    pub const fn is_decode_error(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status),
            Self::Decode(e) => Some(e.status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidRequest(_) => None,
        }
    }
}
