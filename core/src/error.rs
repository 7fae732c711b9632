//! Error types shared by every ajaxful-rating crate.

use thiserror::Error;

/// Errors raised while preparing a rating widget or recording a rate.
///
/// Rendering errors are configuration mistakes of the integrating application.
/// They are raised before any markup is produced and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingError {
    /// No viewer was passed and the environment has no current-user accessor.
    #[error("no user specified: pass a viewer, register a current user accessor, or render statically")]
    NoUserSpecified,
    /// No submission URL was passed and no route could be derived for the rateable.
    #[error("missing rate route `{route}`: pass `remote_options.url` or register the route")]
    MissingRateRoute {
        /// The conventional route name that was looked up, e.g. `rate_article_path`.
        route: String,
    },
    /// The loosely typed option map could not be converted into rating options.
    #[error("invalid rating options: {0}")]
    InvalidOptions(String),
    /// A rate outside `1..=max` was submitted.
    #[error("{stars} stars is out of range, expected 1..={max}")]
    StarsOutOfRange {
        /// Submitted star count.
        stars: u32,
        /// Maximum allowed for the dimension.
        max: u32,
    },
    /// The user already rated and the dimension does not allow updates.
    #[error("user has already rated and updates are not allowed")]
    AlreadyRated,
}

impl From<serde_json::Error> for RatingError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidOptions(value.to_string())
    }
}
