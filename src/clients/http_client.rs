//! HTTP client for Platform API communication.
//!
//! This module provides the [`HttpClient`] type, the single path every call
//! takes: [`prepare`](HttpClient::prepare) attaches the base URL, version
//! pinning and credentials, [`execute`](HttpClient::execute) performs one
//! network attempt over the pooled transport, and
//! [`interpret`](HttpClient::interpret) turns the response into a typed
//! result or a classified error.

use std::collections::HashMap;

use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT,
};
use serde::de::DeserializeOwned;

use crate::clients::errors::{ApiError, DecodeError, HttpError, InvalidHttpRequestError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::{ApiResponse, HttpResponse};
use crate::config::{BaseUrl, ClientConfig};
use crate::error::ConfigError;

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Platform API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers: version-pinned `Accept`, `User-Agent`, `Authorization`
///   and any configured additional headers
/// - Exactly one transport attempt per call, with no hidden retries
/// - Response classification and decoding
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. The inner `reqwest::Client` is a pooled,
/// reference-counted transport, so one instance can serve any number of
/// concurrent calls and cloning it shares the pool.
///
/// # Example
///
/// ```rust,ignore
/// use heroku_api::{ClientConfig, ApiToken, HttpClient, HttpRequest, HttpMethod};
///
/// let config = ClientConfig::builder()
///     .bearer_token(ApiToken::new("oauth-token").unwrap())
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/account").build()?;
/// let account: ApiResponse<serde_json::Value> = client.request(request).await?;
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The pooled reqwest transport.
    client: reqwest::Client,
    /// Base URL requests are joined onto.
    base_url: BaseUrl,
    /// Headers included in every request.
    default_headers: HeaderMap,
    /// Version-pinned `Accept` value, re-asserted after caller headers.
    accept: HeaderValue,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from a configuration.
    ///
    /// Uses the configured transport when one was supplied; otherwise builds
    /// a rustls-backed `reqwest::Client` honoring the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TransportInit`] if the transport cannot be
    /// created, or [`ConfigError::InvalidHeader`] if the user agent or
    /// credentials cannot be expressed as header values.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let client = match config.http_client() {
            Some(client) => client.clone(),
            None => {
                let mut builder = reqwest::Client::builder().use_rustls_tls();
                if let Some(timeout) = config.timeout() {
                    builder = builder.timeout(timeout);
                }
                builder.build().map_err(|e| ConfigError::TransportInit {
                    reason: e.to_string(),
                })?
            }
        };

        let accept = header_value(ACCEPT.as_str(), &config.api_version().accept_header())?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, accept.clone());
        default_headers.insert(
            USER_AGENT,
            header_value(USER_AGENT.as_str(), config.user_agent())?,
        );
        if let Some(authorization) = config.credentials().authorization_header() {
            let mut value = header_value(AUTHORIZATION.as_str(), &authorization)?;
            value.set_sensitive(true);
            default_headers.insert(AUTHORIZATION, value);
        }
        for (name, value) in config.additional_headers() {
            default_headers.insert(name.clone(), value.clone());
        }

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
            accept,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Builds the outgoing transport request for a descriptor.
    ///
    /// Default headers are applied first, then `Content-Type` for requests
    /// with a body, then the caller's headers. `Accept` is applied last so
    /// the pinned version always reaches the server.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the joined URL is invalid, the
    /// body cannot be encoded, or the transport rejects the assembled request.
    pub fn prepare(&self, request: &HttpRequest) -> Result<reqwest::Request, HttpError> {
        let url = self.base_url.join(&request.path);
        let url = reqwest::Url::parse(&url).map_err(|e| InvalidHttpRequestError::InvalidUrl {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        for (name, value) in &request.headers {
            headers.insert(name.clone(), value.clone());
        }
        headers.insert(ACCEPT, self.accept.clone());

        let mut builder = self
            .client
            .request(request.http_method.into(), url)
            .headers(headers);

        if let Some(body) = &request.body {
            let bytes = serde_json::to_vec(body).map_err(|e| {
                InvalidHttpRequestError::BodySerialization {
                    message: e.to_string(),
                }
            })?;
            builder = builder.body(bytes);
        }

        builder.build().map_err(construction_error)
    }

    /// Sends a prepared request over the pooled transport.
    ///
    /// Exactly one attempt is made. Any transport failure, including a
    /// failure while reading the body, is returned as
    /// [`HttpError::Transport`] unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if no complete response was received.
    pub async fn execute(&self, request: reqwest::Request) -> Result<HttpResponse, HttpError> {
        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!(%method, %url, "Sending Platform API request");

        let res = self.client.execute(request).await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        let response = HttpResponse::new(code, headers, body);

        tracing::debug!(
            %method,
            %url,
            status = code,
            request_id = response.request_id().unwrap_or_default(),
            "Received Platform API response"
        );

        if let Some(warning) = response.warning_message() {
            tracing::warn!(
                "Platform API warning for {} {}: {}",
                method,
                url.path(),
                warning
            );
        }

        Ok(response)
    }

    /// Classifies a response and decodes it into `T`.
    ///
    /// - 2xx: the body is decoded into `T`; an empty body decodes as JSON
    ///   `null` so `()` and `Option<_>` accept `204 No Content`.
    /// - anything else: the body is decoded into an [`ApiError`], or one is
    ///   synthesized from the status and raw text.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Decode`] if a 2xx body does not match `T`, and
    /// [`HttpError::Api`] for non-2xx responses.
    pub fn interpret<T: DeserializeOwned>(
        response: HttpResponse,
    ) -> Result<ApiResponse<T>, HttpError> {
        let request_id = response.request_id().map(ToString::to_string);

        if !response.is_ok() {
            return Err(ApiError::from_response(response.code, &response.body, request_id).into());
        }

        let data = decode_body::<T>(response.code, &response.body)?;

        Ok(ApiResponse::new(
            data,
            response.cursor(),
            request_id,
            response.rate_limit_remaining(),
        ))
    }

    /// Prepares, sends and interprets a request.
    ///
    /// # Errors
    ///
    /// Returns any of the [`HttpError`] variants; see
    /// [`prepare`](Self::prepare), [`execute`](Self::execute) and
    /// [`interpret`](Self::interpret).
    pub async fn request<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> Result<ApiResponse<T>, HttpError> {
        let prepared = self.prepare(&request)?;
        let response = self.execute(prepared).await?;
        Self::interpret(response)
    }

    /// Parses response headers into a `HashMap`.
    ///
    /// Values are decoded as UTF-8; bytes that are not valid UTF-8 become
    /// U+FFFD. A value is never replaced by an empty string, so opaque
    /// tokens such as `Next-Range` survive non-ASCII content.
    fn parse_response_headers(headers: &HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

/// Maps a failure to assemble the outgoing request. Nothing was sent.
fn construction_error(e: reqwest::Error) -> HttpError {
    InvalidHttpRequestError::Construction {
        reason: e.to_string(),
    }
    .into()
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidHeader {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, DecodeError> {
    let text = if body.trim().is_empty() { "null" } else { body };
    let to_decode_error = |path: String, message: String| DecodeError {
        status,
        path,
        message,
        body: body.to_string(),
    };

    let mut deserializer = serde_json::Deserializer::from_str(text);
    let data: T = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| to_decode_error(e.path().to_string(), e.inner().to_string()))?;
    deserializer
        .end()
        .map_err(|e| to_decode_error(".".to_string(), e.to_string()))?;
    Ok(data)
}
