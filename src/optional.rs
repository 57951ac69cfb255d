//! Three-state optional values for request bodies.
//!
//! Optional parameters of Platform API calls need to distinguish between a
//! field that was never set (omitted from the JSON body), a field explicitly
//! set to `null`, and a field set to a value. A plain `Option<T>` collapses
//! the first two, so option structs use [`MaybeUndefined`] instead.
//!
//! # Example
//!
//! ```rust
//! use heroku_api::MaybeUndefined;
//! use serde::Serialize;
//!
//! #[derive(Serialize, Default)]
//! struct Opts {
//!     #[serde(skip_serializing_if = "MaybeUndefined::is_undefined")]
//!     name: MaybeUndefined<String>,
//!     #[serde(skip_serializing_if = "MaybeUndefined::is_undefined")]
//!     maintenance: MaybeUndefined<bool>,
//! }
//!
//! let opts = Opts { maintenance: false.into(), ..Default::default() };
//! assert_eq!(serde_json::to_string(&opts).unwrap(), r#"{"maintenance":false}"#);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value that may be undefined, explicitly null, or present.
///
/// Presence drives serialization, not the value: `Value(String::new())`,
/// `Value(0)` and `Value(false)` are all written to the wire. Pair the field
/// with `#[serde(skip_serializing_if = "MaybeUndefined::is_undefined")]` so
/// `Undefined` never appears as a key, and `#[serde(default)]` when
/// deserializing so a missing key reads back as `Undefined`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MaybeUndefined<T> {
    /// Not set; the key is omitted.
    Undefined,
    /// Explicitly set to JSON `null`.
    Null,
    /// Set to a value, including zero-like values.
    Value(T),
}

impl<T> MaybeUndefined<T> {
    /// Maps `None` to `Null` and `Some(v)` to `Value(v)`.
    #[must_use]
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }

    /// Returns `true` if the value was never set.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` if the value was explicitly set to `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if a value is present.
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns a reference to the contained value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Converts into a nested option: `None` for undefined, `Some(None)`
    /// for null and `Some(Some(v))` for a value.
    #[must_use]
    pub fn into_option(self) -> Option<Option<T>> {
        match self {
            Self::Undefined => None,
            Self::Null => Some(None),
            Self::Value(v) => Some(Some(v)),
        }
    }
}

impl<T> From<T> for MaybeUndefined<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T> Default for MaybeUndefined<T> {
    fn default() -> Self {
        Self::Undefined
    }
}

impl<T: Serialize> Serialize for MaybeUndefined<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(v) => v.serialize(serializer),
            Self::Undefined | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for MaybeUndefined<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from_option)
    }
}
