//! HTTP response types for the Heroku API client.
//!
//! This module provides the raw [`HttpResponse`] returned by the transport
//! and the typed [`ApiResponse`] produced by interpreting it.

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use crate::clients::pagination::PageCursor;

/// A raw HTTP response from the Platform API.
///
/// Header names are stored lower-cased; a header may carry several values.
/// The body is kept as text so it can be decoded into the caller's type or
/// into an [`ApiError`](crate::ApiError).
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, lower-casing header names.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        let mut normalized: HashMap<String, Vec<String>> = HashMap::with_capacity(headers.len());
        for (name, values) in headers {
            normalized
                .entry(name.to_ascii_lowercase())
                .or_default()
                .extend(values);
        }
        Self {
            code,
            headers: normalized,
            body: body.into(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Request-Id` header value, if present.
    ///
    /// Include this ID when reporting problems to Heroku support.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("request-id")
    }

    /// Returns the `Next-Range` continuation token, if present.
    #[must_use]
    pub fn next_range(&self) -> Option<&str> {
        self.header("next-range")
    }

    /// Returns the `Content-Range` header value, if present.
    #[must_use]
    pub fn content_range(&self) -> Option<&str> {
        self.header("content-range")
    }

    /// Returns the remaining request budget from `RateLimit-Remaining`.
    ///
    /// Informational only; the client does not throttle itself.
    #[must_use]
    pub fn rate_limit_remaining(&self) -> Option<u32> {
        self.header("ratelimit-remaining")
            .and_then(|value| value.trim().parse().ok())
    }

    /// Returns the `Warning-Message` header value, if present.
    ///
    /// The API uses it to announce deprecations.
    #[must_use]
    pub fn warning_message(&self) -> Option<&str> {
        self.header("warning-message")
    }

    /// Returns the pagination cursor described by this response's headers.
    #[must_use]
    pub fn cursor(&self) -> PageCursor {
        PageCursor::new(
            self.next_range().map(ToString::to_string),
            self.content_range().map(ToString::to_string),
        )
    }
}

/// A decoded response from a Platform API call.
///
/// Combines the typed result with the pagination cursor and response
/// metadata. Implements `Deref<Target = T>` for direct access to the data.
///
/// # Example
///
/// ```rust
/// use heroku_api::{ApiResponse, PageCursor};
///
/// let response = ApiResponse::new(
///     vec!["app-a", "app-b"],
///     PageCursor::new(Some("id ]app-b..".to_string()), None),
///     Some("req-123".to_string()),
///     Some(4500),
/// );
///
/// assert_eq!(response.len(), 2);
/// assert!(response.cursor().has_next_page());
/// assert_eq!(response.request_id(), Some("req-123"));
/// let apps: Vec<&str> = response.into_inner();
/// assert_eq!(apps, vec!["app-a", "app-b"]);
/// ```
#[derive(Clone, Debug)]
pub struct ApiResponse<T> {
    data: T,
    cursor: PageCursor,
    request_id: Option<String>,
    rate_limit_remaining: Option<u32>,
}

impl<T> ApiResponse<T> {
    /// Creates a new `ApiResponse`.
    #[must_use]
    pub const fn new(
        data: T,
        cursor: PageCursor,
        request_id: Option<String>,
        rate_limit_remaining: Option<u32>,
    ) -> Self {
        Self {
            data,
            cursor,
            request_id,
            rate_limit_remaining,
        }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Consumes the response and returns the data with its cursor.
    #[must_use]
    pub fn into_parts(self) -> (T, PageCursor) {
        (self.data, self.cursor)
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns the pagination cursor. Terminal when the result is complete.
    #[must_use]
    pub const fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    /// Returns `true` if more pages are available.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.cursor.has_next_page()
    }

    /// Returns the `Request-Id` of the response, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Returns the remaining rate-limit budget, if reported.
    #[must_use]
    pub const fn rate_limit_remaining(&self) -> Option<u32> {
        self.rate_limit_remaining
    }

    /// Transforms the inner data, keeping the metadata.
    #[must_use]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResponse<U> {
        ApiResponse {
            data: f(self.data),
            cursor: self.cursor,
            request_id: self.request_id,
            rate_limit_remaining: self.rate_limit_remaining,
        }
    }
}

impl<T> Deref for ApiResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ApiResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in pairs {
            map.entry((*name).to_string())
                .or_default()
                .push((*value).to_string());
        }
        map
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), "");
            assert!(response.is_ok(), "Expected is_ok() to be true for code {code}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_other_codes() {
        for code in [199, 300, 304, 400, 404, 422, 429, 500, 503] {
            let response = HttpResponse::new(code, HashMap::new(), "");
            assert!(!response.is_ok(), "Expected is_ok() to be false for code {code}");
        }
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = HttpResponse::new(200, headers(&[("Request-Id", "abc-123")]), "");
        assert_eq!(response.request_id(), Some("abc-123"));
        assert_eq!(response.header("REQUEST-ID"), Some("abc-123"));
    }

    #[test]
    fn test_next_range_builds_non_terminal_cursor() {
        let response = HttpResponse::new(
            206,
            headers(&[("Next-Range", "id ]app-9..; max=10"), ("Content-Range", "id app-0..app-9")]),
            "[]",
        );
        let cursor = response.cursor();
        assert!(cursor.has_next_page());
        assert_eq!(cursor.next_range(), Some("id ]app-9..; max=10"));
        assert_eq!(cursor.content_range(), Some("id app-0..app-9"));
    }

    #[test]
    fn test_missing_next_range_builds_terminal_cursor() {
        let response = HttpResponse::new(200, HashMap::new(), "[]");
        assert!(response.cursor().is_terminal());
    }

    #[test]
    fn test_rate_limit_remaining_parsing() {
        let response = HttpResponse::new(200, headers(&[("RateLimit-Remaining", "4499")]), "");
        assert_eq!(response.rate_limit_remaining(), Some(4499));

        let response = HttpResponse::new(200, headers(&[("RateLimit-Remaining", "lots")]), "");
        assert_eq!(response.rate_limit_remaining(), None);
    }

    #[test]
    fn test_warning_message_extraction() {
        let response = HttpResponse::new(
            200,
            headers(&[("Warning-Message", "This endpoint is deprecated")]),
            "",
        );
        assert_eq!(response.warning_message(), Some("This endpoint is deprecated"));
    }

    #[test]
    fn test_api_response_map_keeps_metadata() {
        let response = ApiResponse::new(
            vec![1, 2, 3],
            PageCursor::new(Some("next".to_string()), None),
            Some("req".to_string()),
            None,
        );
        let mapped = response.map(|v| v.len());
        assert_eq!(*mapped, 3);
        assert!(mapped.has_next_page());
        assert_eq!(mapped.request_id(), Some("req"));
    }
}
