//! The contract between the widget and whatever stores ratings.
//!
//! A [`Rateable`] is owned by the application. The renderer only reads from it:
//! averages, a user's prior rate, and per-dimension configuration.

use alloc::{string::String, vec::Vec};

use serde::{Deserialize, Serialize};

use crate::user::UserId;

/// A single rate left by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rate {
    /// Number of stars given.
    pub stars: u32,
}

impl Rate {
    /// Creates a new rate.
    #[must_use]
    pub const fn new(stars: u32) -> Self {
        Self { stars }
    }
}

/// Per-dimension configuration of a rateable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionConfig {
    /// Whether a user may change a rate once given.
    pub allow_update: bool,
    /// Number of stars on this dimension's scale.
    pub max_stars: u32,
}

impl DimensionConfig {
    /// Creates a configuration with the given scale and updates disallowed.
    #[must_use]
    pub const fn new(max_stars: u32) -> Self {
        Self {
            allow_update: false,
            max_stars,
        }
    }

    /// Sets whether rates may be updated.
    #[must_use]
    pub const fn allow_update(mut self, allow: bool) -> Self {
        self.allow_update = allow;
        self
    }
}

impl Default for DimensionConfig {
    fn default() -> Self {
        Self::new(5)
    }
}

/// Something users can rate.
///
/// `dimension` selects a named rating axis; `None` is the default axis, and for
/// [`Rateable::max_stars`] it means the entity's global scale.
pub trait Rateable {
    /// DOM class of the record, e.g. `article`. Used for route and id derivation.
    fn dom_class(&self) -> &str;

    /// Stable identifier of the record, e.g. its primary key.
    fn record_id(&self) -> String;

    /// Configuration of a dimension.
    fn dimension_config(&self, dimension: Option<&str>) -> DimensionConfig;

    /// Maximum stars of a dimension, or the global maximum for `None`.
    fn max_stars(&self, dimension: Option<&str>) -> u32 {
        self.dimension_config(dimension).max_stars
    }

    /// Average rate of a dimension.
    ///
    /// With `cached` set the implementation returns the value meant for discrete
    /// star display (bucketed), otherwise the exact mean.
    fn rate_average(&self, cached: bool, dimension: Option<&str>) -> f64;

    /// The rate `user` left on a dimension, if any.
    fn rate_by(&self, user: &UserId, dimension: Option<&str>) -> Option<Rate>;

    /// Whether `user` already rated a dimension.
    fn rated_by(&self, user: &UserId, dimension: Option<&str>) -> bool {
        self.rate_by(user, dimension).is_some()
    }

    /// DOM id of the wrapper element.
    ///
    /// Distinct per record, size and dimension so that several widgets for the
    /// same record can live on one page. Characters of the dimension name
    /// outside `[A-Za-z0-9_-]` are replaced by `_`.
    fn wrapper_dom_id(&self, small: bool, dimension: Option<&str>) -> String {
        let dimension = dimension.map(dom_safe);
        let mut parts: Vec<&str> = Vec::with_capacity(3);
        parts.push("ajaxful_rating");
        parts.push(if small { "small" } else { "no-small" });
        if let Some(dimension) = dimension.as_deref() {
            parts.push(dimension);
        }
        parts.sort_unstable();
        alloc::format!(
            "{}_{}_{}",
            parts.join("_"),
            self.dom_class(),
            self.record_id()
        )
    }
}

fn dom_safe(name: &str) -> String {
    name.chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}
