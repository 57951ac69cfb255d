//! App resource implementation.
//!
//! An app represents the program you deploy to Heroku. Apps are addressed
//! by either their name or their UUID.
//!
//! # Example
//!
//! ```rust,ignore
//! use heroku_api::resources::{App, AppUpdateOpts};
//! use heroku_api::{ListRange, MaybeUndefined};
//!
//! let app = App::info(&client, "dodging-samurai-42").await?;
//!
//! let apps = App::list(&client, Some(ListRange::new().max(10))).await?;
//! for app in apps.iter() {
//!     println!("{} ({})", app.name, app.region.name);
//! }
//!
//! let opts = AppUpdateOpts {
//!     maintenance: true.into(),
//!     ..Default::default()
//! };
//! App::update(&client, &app.id, Some(&opts)).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{ApiResponse, HttpError, ListRange, RestClient};
use crate::optional::MaybeUndefined;
use crate::resources::identity;

/// A reference to another resource by id and name, such as a region or stack.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NamedRef {
    /// Unique identifier.
    pub id: String,
    /// Unique name.
    pub name: String,
}

/// The account that owns an app.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppOwner {
    /// Unique email address of the owner.
    pub email: String,
    /// Unique identifier of the owner.
    pub id: String,
}

/// A Heroku app.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct App {
    /// Unique identifier of the app.
    pub id: String,

    /// Unique name of the app.
    pub name: String,

    /// When the app was archived, if it has been.
    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>,

    /// Description from the buildpack of the app.
    #[serde(default)]
    pub buildpack_provided_description: Option<String>,

    /// The stack the next build will use.
    pub build_stack: NamedRef,

    /// When the app was created.
    pub created_at: DateTime<Utc>,

    /// Git repository URL of the app.
    pub git_url: String,

    /// Whether maintenance mode is enabled.
    pub maintenance: bool,

    /// The owner of the app.
    pub owner: AppOwner,

    /// The region the app runs in.
    pub region: NamedRef,

    /// When the app was last released.
    #[serde(default)]
    pub released_at: Option<DateTime<Utc>>,

    /// Git repository size in bytes.
    #[serde(default)]
    pub repo_size: Option<u64>,

    /// Slug size in bytes.
    #[serde(default)]
    pub slug_size: Option<u64>,

    /// The stack the app currently runs on.
    pub stack: NamedRef,

    /// When the app was last updated.
    pub updated_at: DateTime<Utc>,

    /// Web URL of the app.
    #[serde(default)]
    pub web_url: Option<String>,
}

/// Optional parameters for [`App::create`].
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct AppCreateOpts {
    /// Unique name of the app. Chosen by the API when omitted.
    #[serde(skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub name: MaybeUndefined<String>,

    /// Name or id of the region to run in.
    #[serde(skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub region: MaybeUndefined<String>,

    /// Name or id of the stack to run on.
    #[serde(skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub stack: MaybeUndefined<String>,
}

/// Optional parameters for [`App::update`].
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct AppUpdateOpts {
    /// New name of the app.
    #[serde(skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub name: MaybeUndefined<String>,

    /// Whether maintenance mode is enabled.
    #[serde(skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub maintenance: MaybeUndefined<bool>,

    /// Name or id of the stack the next build will use.
    #[serde(skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub build_stack: MaybeUndefined<String>,
}

impl App {
    /// Retrieves an app by name or id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] with id `not_found` if no such app exists,
    /// or any other [`HttpError`] on failure.
    pub async fn info(client: &RestClient, app_identity: &str) -> Result<ApiResponse<Self>, HttpError> {
        client.get(&format!("/apps/{}", identity(app_identity))).await
    }

    /// Lists apps, one page at a time.
    ///
    /// Use the returned cursor to request the following page.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on failure.
    pub async fn list(
        client: &RestClient,
        range: Option<ListRange>,
    ) -> Result<ApiResponse<Vec<Self>>, HttpError> {
        client.list("/apps", range.map(Into::into)).await
    }

    /// Creates a new app.
    ///
    /// Pass `None` to let the API choose every attribute.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on failure, typically [`HttpError::Api`] with
    /// id `invalid_params` when a name is taken.
    pub async fn create(
        client: &RestClient,
        options: Option<&AppCreateOpts>,
    ) -> Result<ApiResponse<Self>, HttpError> {
        client.post("/apps", options).await
    }

    /// Updates an existing app.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on failure.
    pub async fn update(
        client: &RestClient,
        app_identity: &str,
        options: Option<&AppUpdateOpts>,
    ) -> Result<ApiResponse<Self>, HttpError> {
        client
            .patch(&format!("/apps/{}", identity(app_identity)), options)
            .await
    }

    /// Deletes an app, returning its final state.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on failure.
    pub async fn delete(client: &RestClient, app_identity: &str) -> Result<ApiResponse<Self>, HttpError> {
        client
            .delete(&format!("/apps/{}", identity(app_identity)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_app_json() -> serde_json::Value {
        json!({
            "archived_at": null,
            "buildpack_provided_description": "Ruby/Rack",
            "build_stack": {"id": "stack-1", "name": "heroku-22"},
            "created_at": "2012-01-01T12:00:00Z",
            "git_url": "https://git.heroku.com/example.git",
            "id": "01234567-89ab-cdef-0123-456789abcdef",
            "maintenance": false,
            "name": "example",
            "owner": {"email": "username@example.com", "id": "owner-1"},
            "region": {"id": "region-1", "name": "us"},
            "released_at": "2012-01-01T12:00:00Z",
            "repo_size": 0,
            "slug_size": 0,
            "stack": {"id": "stack-1", "name": "heroku-22"},
            "updated_at": "2012-01-01T12:00:00Z",
            "web_url": "https://example.herokuapp.com/"
        })
    }

    #[test]
    fn test_app_deserialization() {
        let app: App = serde_json::from_value(sample_app_json()).unwrap();

        assert_eq!(app.name, "example");
        assert_eq!(app.region.name, "us");
        assert_eq!(app.owner.email, "username@example.com");
        assert!(app.archived_at.is_none());
        assert_eq!(app.created_at.to_rfc3339(), "2012-01-01T12:00:00+00:00");
        assert_eq!(app.web_url.as_deref(), Some("https://example.herokuapp.com/"));
    }

    #[test]
    fn test_app_deserialization_tolerates_missing_nullable_fields() {
        let mut value = sample_app_json();
        let object = value.as_object_mut().unwrap();
        object.remove("released_at");
        object.remove("web_url");

        let app: App = serde_json::from_value(value).unwrap();
        assert!(app.released_at.is_none());
        assert!(app.web_url.is_none());
    }

    #[test]
    fn test_create_opts_omit_unset_fields() {
        let opts = AppCreateOpts {
            name: "myapp".to_string().into(),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&opts).unwrap(), json!({"name": "myapp"}));
        assert_eq!(serde_json::to_value(AppCreateOpts::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_update_opts_serialize_explicit_null_and_false() {
        let opts = AppUpdateOpts {
            maintenance: false.into(),
            build_stack: MaybeUndefined::Null,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&opts).unwrap(),
            json!({"maintenance": false, "build_stack": null})
        );
    }
}
