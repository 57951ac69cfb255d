//! REST client implementation for the Heroku Platform API.
//!
//! This module provides the [`RestClient`] type: typed `get`, `list`,
//! `post`, `patch`, `put` and `delete` methods over an [`HttpClient`].

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::{
    ApiResponse, HttpClient, HttpError, HttpMethod, HttpRequest, RangeHeader,
};
use crate::config::{ApiVersion, ClientConfig};
use crate::error::ConfigError;

/// REST client for the Heroku Platform API.
///
/// Each method takes a path relative to the base URL, optionally an options
/// value serialized as the JSON body, and decodes the response into `T`.
/// Every method makes exactly one request, except
/// [`list_all`](Self::list_all) which makes one per page.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async
/// tasks. Concurrent calls share the underlying connection pool and do not
/// wait on each other.
///
/// # Example
///
/// ```rust,ignore
/// use heroku_api::{RestClient, ClientConfig, ApiToken};
///
/// let config = ClientConfig::builder()
///     .bearer_token(ApiToken::new("oauth-token").unwrap())
///     .build()?;
/// let client = RestClient::new(&config)?;
///
/// // GET request
/// let account: ApiResponse<serde_json::Value> = client.get("/account").await?;
///
/// // POST request with options
/// let body = serde_json::json!({"name": "example"});
/// let app: ApiResponse<serde_json::Value> = client.post("/apps", Some(&body)).await?;
/// ```
#[derive(Clone, Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// The API version being used.
    api_version: ApiVersion,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the HTTP client cannot be created from the
    /// configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let http_client = HttpClient::new(config)?;
        let api_version = config.api_version().clone();

        tracing::debug!(
            base_url = %config.base_url(),
            api_version = %api_version,
            "Created Platform API client"
        );

        Ok(Self {
            http_client,
            api_version,
        })
    }

    /// Returns the API version pinned by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request and decodes the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request is invalid, the transport fails,
    /// the API returns an error, or the body does not decode into `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, HttpError> {
        self.make_request::<(), T>(HttpMethod::Get, path, None, None)
            .await
    }

    /// Sends a GET request for a list, optionally limited by a `Range`.
    ///
    /// Pass a [`ListRange`](crate::ListRange) for the first page and the
    /// cursor's [`NextPage`](crate::NextPage) for the following ones.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any failure; see [`get`](Self::get).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let first: ApiResponse<Vec<App>> = client
    ///     .list("/apps", Some(ListRange::new().max(10).into()))
    ///     .await?;
    /// if first.has_next_page() {
    ///     let next = first.cursor().next()?;
    ///     let second: ApiResponse<Vec<App>> = client.list("/apps", Some(next.into())).await?;
    /// }
    /// ```
    pub async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        range: Option<RangeHeader>,
    ) -> Result<ApiResponse<T>, HttpError> {
        self.make_request::<(), T>(HttpMethod::Get, path, None, range)
            .await
    }

    /// Fetches every page of a listing and concatenates the results.
    ///
    /// Starts from `range` (or the server default) and follows `Next-Range`
    /// until the cursor is terminal. Stops at the first failing page.
    ///
    /// # Errors
    ///
    /// Returns the [`HttpError`] of the first page that fails.
    pub async fn list_all<U: DeserializeOwned>(
        &self,
        path: &str,
        range: Option<RangeHeader>,
    ) -> Result<Vec<U>, HttpError> {
        let mut items = Vec::new();
        let mut range = range;

        loop {
            let page = self.list::<Vec<U>>(path, range.take()).await?;
            let (data, cursor) = page.into_parts();
            items.extend(data);

            if cursor.is_terminal() {
                return Ok(items);
            }
            range = Some(cursor.next()?.into());
        }
    }

    /// Sends a POST request with optional options as the body.
    ///
    /// `None` sends `{}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any failure; see [`get`](Self::get).
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<&B>,
    ) -> Result<ApiResponse<T>, HttpError> {
        self.make_request(HttpMethod::Post, path, options, None)
            .await
    }

    /// Sends a PATCH request with optional options as the body.
    ///
    /// `None` sends `{}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any failure; see [`get`](Self::get).
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<&B>,
    ) -> Result<ApiResponse<T>, HttpError> {
        self.make_request(HttpMethod::Patch, path, options, None)
            .await
    }

    /// Sends a PUT request with optional options as the body.
    ///
    /// `None` sends `{}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any failure; see [`get`](Self::get).
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<&B>,
    ) -> Result<ApiResponse<T>, HttpError> {
        self.make_request(HttpMethod::Put, path, options, None)
            .await
    }

    /// Sends a DELETE request.
    ///
    /// Most deletions return the removed resource; use `()` or
    /// `serde_json::Value` for `T` when the body is not needed.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any failure; see [`get`](Self::get).
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<ApiResponse<T>, HttpError> {
        self.make_request::<(), T>(HttpMethod::Delete, path, None, None)
            .await
    }

    /// Internal helper to build and send requests.
    async fn make_request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        options: Option<&B>,
        range: Option<RangeHeader>,
    ) -> Result<ApiResponse<T>, HttpError> {
        let mut builder = HttpRequest::builder(method, path).options(options);

        if let Some(range) = range {
            builder = builder.range(range);
        }

        let request = builder.build()?;
        self.http_client.request(request).await
    }
}
