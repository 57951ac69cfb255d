//! Config var resource implementation.
//!
//! Config vars are the environment variables of an app's processes. The
//! API exposes them as one JSON object per app.

use std::collections::HashMap;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::clients::{ApiResponse, HttpError, RestClient};
use crate::resources::identity;

/// Changes to apply with [`ConfigVars::update`].
///
/// `Some(value)` sets a var; `None` is sent as `null` and unsets it. Vars
/// not present in the map are left unchanged.
pub type ConfigVarUpdate = HashMap<String, Option<String>>;

/// The config vars of an app.
///
/// # Example
///
/// ```rust
/// use heroku_api::resources::ConfigVars;
///
/// let vars: ConfigVars = serde_json::from_str(r#"{"FOO":"bar"}"#).unwrap();
/// assert_eq!(vars.get("FOO").map(String::as_str), Some("bar"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ConfigVars(pub HashMap<String, String>);

impl ConfigVars {
    /// Retrieves the config vars of an app.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on failure.
    pub async fn info(client: &RestClient, app_identity: &str) -> Result<ApiResponse<Self>, HttpError> {
        client
            .get(&format!("/apps/{}/config-vars", identity(app_identity)))
            .await
    }

    /// Sets or unsets config vars, returning the resulting set.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on failure.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use heroku_api::resources::{ConfigVars, ConfigVarUpdate};
    ///
    /// let mut changes = ConfigVarUpdate::new();
    /// changes.insert("RAILS_ENV".to_string(), Some("production".to_string()));
    /// changes.insert("DEBUG".to_string(), None);
    ///
    /// let vars = ConfigVars::update(&client, "example", &changes).await?;
    /// assert!(!vars.contains_key("DEBUG"));
    /// ```
    pub async fn update(
        client: &RestClient,
        app_identity: &str,
        changes: &ConfigVarUpdate,
    ) -> Result<ApiResponse<Self>, HttpError> {
        client
            .patch(
                &format!("/apps/{}/config-vars", identity(app_identity)),
                Some(changes),
            )
            .await
    }

    /// Consumes the set and returns the underlying map.
    #[must_use]
    pub fn into_inner(self) -> HashMap<String, String> {
        self.0
    }
}

impl Deref for ConfigVars {
    type Target = HashMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_vars_deserialize_from_flat_object() {
        let vars: ConfigVars =
            serde_json::from_value(json!({"FOO": "bar", "BAZ": "qux"})).unwrap();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars.get("BAZ").map(String::as_str), Some("qux"));
    }

    #[test]
    fn test_update_serializes_unset_as_null() {
        let mut changes = ConfigVarUpdate::new();
        changes.insert("FOO".to_string(), Some("bar".to_string()));
        changes.insert("OLD".to_string(), None);

        assert_eq!(
            serde_json::to_value(&changes).unwrap(),
            json!({"FOO": "bar", "OLD": null})
        );
    }
}
