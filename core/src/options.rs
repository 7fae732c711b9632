//! Typed widget options.
//!
//! Templates historically passed loosely typed maps where booleans could arrive
//! as `"true"`/`"false"` strings. [`RatingOptions`] accepts both through serde
//! and ignores keys it does not know, so a raw map can be validated once at the
//! boundary with [`RatingOptions::from_value`].

use core::fmt;

use alloc::string::String;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{error::RatingError, user::UserId};

/// HTTP method used to submit a rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    #[default]
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

impl HttpMethod {
    /// Lowercase name, as written into `data-method`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where and how a rate is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteOptions {
    /// Submission URL. Derived from the environment's routes when absent.
    pub url: Option<String>,
    /// Submission method.
    pub method: HttpMethod,
}

/// Display options of a rating widget.
///
/// ```
/// use ajaxful_rating_core::RatingOptions;
///
/// let options = RatingOptions::new().small(true).dimension("quality");
/// assert!(options.wrap);
/// assert_eq!(options.dimension.as_deref(), Some("quality"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct RatingOptions {
    /// Wrap the star list in a container carrying the widget's DOM id.
    #[serde(deserialize_with = "flag")]
    pub wrap: bool,
    /// Render compact stars.
    #[serde(deserialize_with = "flag")]
    pub small: bool,
    /// Show the viewer's own rate instead of the average.
    #[serde(deserialize_with = "flag")]
    pub show_user_rating: bool,
    /// Never render rating controls.
    #[serde(deserialize_with = "flag")]
    pub force_static: bool,
    /// Append a label that tracks the hovered star.
    #[serde(deserialize_with = "flag")]
    pub show_chosen: bool,
    /// Rescale a dimension onto the record's global scale.
    #[serde(deserialize_with = "flag")]
    pub normalize: bool,
    /// Rating axis to display.
    pub dimension: Option<String>,
    /// The logged-in user. Defaults to the environment's current user.
    pub current_user: Option<UserId>,
    /// Submission settings.
    pub remote_options: RemoteOptions,
}

impl Default for RatingOptions {
    fn default() -> Self {
        Self {
            wrap: true,
            small: false,
            show_user_rating: false,
            force_static: false,
            show_chosen: false,
            normalize: false,
            dimension: None,
            current_user: None,
            remote_options: RemoteOptions::default(),
        }
    }
}

impl RatingOptions {
    /// Creates options with every default applied.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds options from a loosely typed map.
    ///
    /// Unknown keys are ignored and `null` yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::InvalidOptions`] if a known key has a value of the
    /// wrong shape.
    pub fn from_value(value: serde_json::Value) -> Result<Self, RatingError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Sets [`RatingOptions::wrap`].
    #[must_use]
    pub const fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Sets [`RatingOptions::small`].
    #[must_use]
    pub const fn small(mut self, small: bool) -> Self {
        self.small = small;
        self
    }

    /// Sets [`RatingOptions::show_user_rating`].
    #[must_use]
    pub const fn show_user_rating(mut self, show: bool) -> Self {
        self.show_user_rating = show;
        self
    }

    /// Sets [`RatingOptions::force_static`].
    #[must_use]
    pub const fn force_static(mut self, force: bool) -> Self {
        self.force_static = force;
        self
    }

    /// Sets [`RatingOptions::show_chosen`].
    #[must_use]
    pub const fn show_chosen(mut self, show: bool) -> Self {
        self.show_chosen = show;
        self
    }

    /// Sets [`RatingOptions::normalize`].
    #[must_use]
    pub const fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Selects a rating axis.
    #[must_use]
    pub fn dimension(mut self, dimension: impl Into<String>) -> Self {
        self.dimension = Some(dimension.into());
        self
    }

    /// Overrides the logged-in user used to decide interactivity.
    #[must_use]
    pub fn current_user(mut self, user: impl Into<UserId>) -> Self {
        self.current_user = Some(user.into());
        self
    }

    /// Sets the submission URL.
    #[must_use]
    pub fn remote_url(mut self, url: impl Into<String>) -> Self {
        self.remote_options.url = Some(url.into());
        self
    }

    /// Sets the submission method.
    #[must_use]
    pub const fn method(mut self, method: HttpMethod) -> Self {
        self.remote_options.method = method;
        self
    }
}

/// Accepts a boolean, its string form, or nothing.
///
/// Any string other than `"true"` is `false`.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(value)) => value,
        Some(Flag::Text(text)) => text == "true",
        None => false,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_defaults() {
        let options = RatingOptions::default();
        assert!(options.wrap);
        assert!(!options.small);
        assert!(!options.show_user_rating);
        assert!(!options.force_static);
        assert!(!options.show_chosen);
        assert!(!options.normalize);
        assert_eq!(options.remote_options.method, HttpMethod::Post);
        assert!(options.remote_options.url.is_none());
    }

    #[test]
    fn test_string_flags_are_normalized() {
        let options = RatingOptions::from_value(json!({
            "small": "true",
            "wrap": "false",
            "show_user_rating": "yes",
        }))
        .unwrap();
        assert!(options.small);
        assert!(!options.wrap);
        assert!(!options.show_user_rating);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let options = RatingOptions::from_value(json!({
            "dimension": "quality",
            "class": "fancy",
            "remote_options": { "url": "/rate", "method": "put" },
        }))
        .unwrap();
        assert_eq!(options.dimension.as_deref(), Some("quality"));
        assert_eq!(options.remote_options.url.as_deref(), Some("/rate"));
        assert_eq!(options.remote_options.method, HttpMethod::Put);
    }

    #[test]
    fn test_null_flag_is_false() {
        let options = RatingOptions::from_value(json!({ "wrap": null })).unwrap();
        assert!(!options.wrap);
    }

    #[test]
    fn test_null_map_yields_defaults() {
        let options = RatingOptions::from_value(serde_json::Value::Null).unwrap();
        assert_eq!(options, RatingOptions::default());
    }

    #[test]
    fn test_malformed_value_is_rejected() {
        let error = RatingOptions::from_value(json!({ "small": 3 })).unwrap_err();
        assert!(matches!(error, RatingError::InvalidOptions(_)));
    }

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
        assert_eq!(HttpMethod::default().as_str(), "post");
    }
}
