//! Per-resource calls for the Heroku Platform API.
//!
//! Each resource is a plain serde struct plus associated functions that
//! take a [`RestClient`](crate::RestClient). Optional parameters are passed
//! as `Option<&Opts>`; `None` omits them from the request entirely, and
//! within an options struct any field left
//! [`Undefined`](crate::MaybeUndefined::Undefined) is omitted as well.
//!
//! # Available Resources
//!
//! - [`App`] - An application: info, list, create, update, delete
//! - [`ConfigVars`] - An app's config vars: info, update
//!
//! # Example
//!
//! ```rust,ignore
//! use heroku_api::resources::{App, AppCreateOpts};
//!
//! // No options: the API picks a name and region
//! let app = App::create(&client, None).await?;
//! println!("Created {}", app.name);
//!
//! let opts = AppCreateOpts {
//!     name: "myapp".to_string().into(),
//!     region: "eu".to_string().into(),
//!     ..Default::default()
//! };
//! let app = App::create(&client, Some(&opts)).await?;
//! println!("created app: name={} region={}", app.name, app.region.name);
//! ```

mod app;
mod config_var;

pub use app::{App, AppCreateOpts, AppOwner, AppUpdateOpts, NamedRef};
pub use config_var::{ConfigVarUpdate, ConfigVars};

use std::borrow::Cow;

/// Percent-encodes a resource identity for use as a path segment.
///
/// Identities are names or UUIDs; encoding keeps a name containing `/` or
/// `?` from altering the request path.
pub(crate) fn identity(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}
