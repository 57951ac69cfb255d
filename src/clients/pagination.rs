//! Range-based pagination for list calls.
//!
//! The Platform API paginates list endpoints through the `Range` request
//! header and the `Next-Range` response header. A response carrying
//! `Next-Range` is partial; sending that value back as `Range` resumes the
//! listing where the previous page stopped. Range values are opaque and are
//! never parsed by this crate.
//!
//! # Example
//!
//! ```rust,ignore
//! use heroku_api::{ListRange, HttpRequest, HttpMethod};
//!
//! let first = client.list::<Vec<App>>("/apps", Some(ListRange::new().max(100).into())).await?;
//! let mut cursor = first.cursor().clone();
//! while cursor.has_next_page() {
//!     let page = client.list::<Vec<App>>("/apps", Some(cursor.next()?.into())).await?;
//!     cursor = page.cursor().clone();
//! }
//! ```

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;
use crate::clients::http_request::HttpRequestBuilder;

/// The value of a `Range` request header.
///
/// Built from a [`ListRange`] for the first page or from a [`NextPage`]
/// for subsequent ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeHeader(String);

impl RangeHeader {
    /// Wraps a raw `Range` header value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl AsRef<str> for RangeHeader {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RangeHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The first-page request range for a list call.
///
/// Rendered as `<field> <first>..<last>[; max=N][, order=desc]`.
///
/// # Example
///
/// ```rust
/// use heroku_api::ListRange;
///
/// let range = ListRange::new().field("name").max(10).descending();
/// assert_eq!(range.to_header_value(), "name ..; max=10, order=desc");
///
/// let range = ListRange::new().first_id("app-a").last_id("app-z");
/// assert_eq!(range.to_header_value(), "id app-a..app-z");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListRange {
    field: String,
    max: Option<u32>,
    descending: bool,
    first_id: String,
    last_id: String,
}

impl Default for ListRange {
    fn default() -> Self {
        Self {
            field: "id".to_string(),
            max: None,
            descending: false,
            first_id: String::new(),
            last_id: String::new(),
        }
    }
}

impl ListRange {
    /// Creates a range over `id` with server defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field the listing is sorted by.
    #[must_use]
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Sets the maximum page size.
    #[must_use]
    pub const fn max(mut self, max: u32) -> Self {
        self.max = Some(max);
        self
    }

    /// Requests descending order.
    #[must_use]
    pub const fn descending(mut self) -> Self {
        self.descending = true;
        self
    }

    /// Sets the first value of the range (inclusive).
    #[must_use]
    pub fn first_id(mut self, id: impl Into<String>) -> Self {
        self.first_id = id.into();
        self
    }

    /// Sets the last value of the range (inclusive).
    #[must_use]
    pub fn last_id(mut self, id: impl Into<String>) -> Self {
        self.last_id = id.into();
        self
    }

    /// Renders the `Range` header value.
    #[must_use]
    pub fn to_header_value(&self) -> String {
        let mut value = String::new();
        if !self.field.is_empty() {
            value.push_str(&self.field);
            value.push(' ');
        }
        value.push_str(&self.first_id);
        value.push_str("..");
        value.push_str(&self.last_id);

        match (self.max, self.descending) {
            (Some(max), true) => value.push_str(&format!("; max={max}, order=desc")),
            (Some(max), false) => value.push_str(&format!("; max={max}")),
            (None, true) => value.push_str("; order=desc"),
            (None, false) => {}
        }
        value
    }

    /// Sets this range on a request builder.
    #[must_use]
    pub fn apply(&self, builder: HttpRequestBuilder) -> HttpRequestBuilder {
        builder.range(self.clone())
    }
}

impl From<ListRange> for RangeHeader {
    fn from(range: ListRange) -> Self {
        Self(range.to_header_value())
    }
}

impl From<&ListRange> for RangeHeader {
    fn from(range: &ListRange) -> Self {
        Self(range.to_header_value())
    }
}

/// Request modifier that resumes a listing at the next page.
///
/// Obtained from [`PageCursor::next`]; apply it to the next request for
/// the same listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NextPage {
    range: String,
}

impl NextPage {
    /// Returns the opaque continuation token.
    #[must_use]
    pub fn range(&self) -> &str {
        &self.range
    }

    /// Sets the continuation `Range` header on a request builder.
    #[must_use]
    pub fn apply(&self, builder: HttpRequestBuilder) -> HttpRequestBuilder {
        builder.range(self.clone())
    }
}

impl From<NextPage> for RangeHeader {
    fn from(next: NextPage) -> Self {
        Self(next.range)
    }
}

/// Continuation state of a list call.
///
/// A cursor without a continuation token is terminal: the listing is
/// complete and [`next`](Self::next) reports a usage error.
///
/// # Example
///
/// ```rust
/// use heroku_api::PageCursor;
///
/// let cursor = PageCursor::new(Some("id ]app-42..; max=10".to_string()), None);
/// assert!(cursor.has_next_page());
/// assert_eq!(cursor.next().unwrap().range(), "id ]app-42..; max=10");
///
/// let done = PageCursor::terminal();
/// assert!(done.is_terminal());
/// assert!(done.next().is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageCursor {
    next_range: Option<String>,
    content_range: Option<String>,
}

impl PageCursor {
    /// Creates a cursor from the `Next-Range` and `Content-Range` headers.
    ///
    /// An empty `Next-Range` value is treated as absent.
    #[must_use]
    pub fn new(next_range: Option<String>, content_range: Option<String>) -> Self {
        Self {
            next_range: next_range.filter(|r| !r.trim().is_empty()),
            content_range,
        }
    }

    /// Creates a cursor for a complete listing.
    #[must_use]
    pub fn terminal() -> Self {
        Self::default()
    }

    /// Returns `true` if the server announced a further page.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next_range.is_some()
    }

    /// Returns `true` if the listing is complete.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.next_range.is_none()
    }

    /// Returns the continuation token, if any.
    #[must_use]
    pub fn next_range(&self) -> Option<&str> {
        self.next_range.as_deref()
    }

    /// Returns the range covered by the page this cursor came from.
    #[must_use]
    pub fn content_range(&self) -> Option<&str> {
        self.content_range.as_deref()
    }

    /// Returns the modifier that requests the next page.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::ExhaustedCursor`] if the cursor is
    /// terminal.
    pub fn next(&self) -> Result<NextPage, InvalidHttpRequestError> {
        self.next_range
            .as_ref()
            .map(|range| NextPage {
                range: range.clone(),
            })
            .ok_or(InvalidHttpRequestError::ExhaustedCursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_list_range_renders_open_id_range() {
        assert_eq!(ListRange::new().to_header_value(), "id ..");
    }

    #[test]
    fn test_list_range_with_max() {
        let range = ListRange::new().max(25);
        assert_eq!(range.to_header_value(), "id ..; max=25");
    }

    #[test]
    fn test_list_range_descending_without_max() {
        let range = ListRange::new().descending();
        assert_eq!(range.to_header_value(), "id ..; order=desc");
    }

    #[test]
    fn test_list_range_with_bounds_and_all_options() {
        let range = ListRange::new()
            .field("name")
            .first_id("a")
            .last_id("m")
            .max(5)
            .descending();
        assert_eq!(range.to_header_value(), "name a..m; max=5, order=desc");
    }

    #[test]
    fn test_list_range_without_field() {
        let range = ListRange::new().field("").first_id("x");
        assert_eq!(range.to_header_value(), "x..");
    }

    #[test]
    fn test_cursor_with_next_range_is_not_terminal() {
        let cursor = PageCursor::new(Some("id ]abc..".to_string()), Some("id 1..abc".to_string()));
        assert!(cursor.has_next_page());
        assert!(!cursor.is_terminal());
        assert_eq!(cursor.next_range(), Some("id ]abc.."));
        assert_eq!(cursor.content_range(), Some("id 1..abc"));
    }

    #[test]
    fn test_next_on_terminal_cursor_is_rejected() {
        let cursor = PageCursor::new(None, Some("id 1..9".to_string()));
        assert!(cursor.is_terminal());
        assert_eq!(
            cursor.next(),
            Err(InvalidHttpRequestError::ExhaustedCursor)
        );
    }

    #[test]
    fn test_blank_next_range_is_terminal() {
        let cursor = PageCursor::new(Some("  ".to_string()), None);
        assert!(cursor.is_terminal());
    }

    #[test]
    fn test_next_page_token_is_opaque() {
        let token = "name ]weird;;token..; max=1000";
        let next = PageCursor::new(Some(token.to_string()), None).next().unwrap();
        assert_eq!(RangeHeader::from(next).as_ref(), token);
    }
}
