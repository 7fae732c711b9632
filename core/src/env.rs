//! Capabilities the host application lends to the renderer.
//!
//! Instead of probing the template context at runtime, everything the widget
//! needs from its host is registered explicitly on an [`Environment`]:
//!
//! - a [`CurrentUser`] accessor naming the logged-in viewer,
//! - [`RateRoutes`] resolving the submission URL of a rateable,
//! - an optional [`ForgeryProtection`] token for asynchronous requests,
//! - an optional [`Translate`] implementation for labels.

use alloc::{
    boxed::Box,
    collections::BTreeMap,
    format,
    string::String,
};
use core::fmt;

use crate::{error::RatingError, rateable::Rateable, user::UserId};

/// Returns the logged-in user, or `None` for anonymous requests.
pub trait CurrentUser: 'static {
    /// The user making the current request.
    fn current_user(&self) -> Option<UserId>;
}

impl_debug!(dyn CurrentUser);

impl<F> CurrentUser for F
where
    F: Fn() -> Option<UserId> + 'static,
{
    fn current_user(&self) -> Option<UserId> {
        self()
    }
}

impl CurrentUser for UserId {
    fn current_user(&self) -> Option<UserId> {
        Some(self.clone())
    }
}

/// Resolves named routes to submission paths.
pub trait RateRoutes: 'static {
    /// Resolves `route` for `rateable`, or `None` if the route is unknown.
    fn rate_path(&self, route: &str, rateable: &dyn Rateable) -> Option<String>;
}

impl_debug!(dyn RateRoutes);

impl<F> RateRoutes for F
where
    F: Fn(&str, &dyn Rateable) -> Option<String> + 'static,
{
    fn rate_path(&self, route: &str, rateable: &dyn Rateable) -> Option<String> {
        self(route, rateable)
    }
}

/// Conventional route name for rating a record, e.g. `rate_article_path`.
#[must_use]
pub fn rate_route_name(rateable: &dyn Rateable) -> String {
    format!("rate_{}_path", rateable.dom_class())
}

/// A table of route patterns.
///
/// Patterns may contain `:id`, which is replaced by the record id.
///
/// ```
/// use ajaxful_rating_core::{MemoryRateable, RateRoutes, RouteTable};
///
/// let routes = RouteTable::new().route("rate_article_path", "/articles/:id/rate");
/// let article = MemoryRateable::new("article", 3);
/// assert_eq!(
///     routes.rate_path("rate_article_path", &article).as_deref(),
///     Some("/articles/3/rate")
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    patterns: BTreeMap<String, String>,
}

impl RouteTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            patterns: BTreeMap::new(),
        }
    }

    /// Registers a route pattern.
    #[must_use]
    pub fn route(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.patterns.insert(name.into(), pattern.into());
        self
    }
}

impl RateRoutes for RouteTable {
    fn rate_path(&self, route: &str, rateable: &dyn Rateable) -> Option<String> {
        self.patterns
            .get(route)
            .map(|pattern| pattern.replace(":id", &rateable.record_id()))
    }
}

/// Anti-forgery token injected into asynchronous rate submissions.
#[derive(Clone, PartialEq, Eq)]
pub struct ForgeryProtection {
    param: String,
    token: String,
}

impl ForgeryProtection {
    /// Creates a protection sending `token` as `authenticity_token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            param: "authenticity_token".into(),
            token: token.into(),
        }
    }

    /// Overrides the request parameter name.
    #[must_use]
    pub fn param(mut self, param: impl Into<String>) -> Self {
        self.param = param.into();
        self
    }

    /// The request parameter name.
    #[must_use]
    pub fn param_name(&self) -> &str {
        &self.param
    }

    /// The token value.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for ForgeryProtection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForgeryProtection")
            .field("param", &self.param)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Label keys of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Tooltip of a star that submits a rate.
    Hover,
    /// The viewer's own rate.
    UserRating,
    /// The average of all rates.
    GlobalAverage,
}

impl MessageKey {
    /// The key describing the displayed value.
    #[must_use]
    pub const fn current(show_user_rating: bool) -> Self {
        if show_user_rating {
            Self::UserRating
        } else {
            Self::GlobalAverage
        }
    }

    /// Key name as used in message catalogs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hover => "hover",
            Self::UserRating => "user_rating",
            Self::GlobalAverage => "global_average",
        }
    }
}

/// Produces localized labels.
pub trait Translate: 'static {
    /// Renders the label for `key` with the formatted `value` and scale `max`.
    fn translate(&self, key: MessageKey, value: &str, max: u32) -> String;
}

impl_debug!(dyn Translate);

/// Capabilities of the host for one request.
#[derive(Debug, Default)]
pub struct Environment {
    current_user: Option<Box<dyn CurrentUser>>,
    routes: Option<Box<dyn RateRoutes>>,
    forgery_protection: Option<ForgeryProtection>,
    translator: Option<Box<dyn Translate>>,
}

impl Environment {
    /// Creates an environment without any capability.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the current-user accessor.
    #[must_use]
    pub fn with_current_user(mut self, accessor: impl CurrentUser) -> Self {
        self.current_user = Some(Box::new(accessor));
        self
    }

    /// Registers the route resolver.
    #[must_use]
    pub fn with_routes(mut self, routes: impl RateRoutes) -> Self {
        self.routes = Some(Box::new(routes));
        self
    }

    /// Enables anti-forgery token injection.
    #[must_use]
    pub fn with_forgery_protection(mut self, protection: ForgeryProtection) -> Self {
        self.forgery_protection = Some(protection);
        self
    }

    /// Registers a translator.
    #[must_use]
    pub fn with_translator(mut self, translator: impl Translate) -> Self {
        self.translator = Some(Box::new(translator));
        self
    }

    /// The current-user accessor, if the host has one.
    #[must_use]
    pub fn current_user_accessor(&self) -> Option<&dyn CurrentUser> {
        self.current_user.as_deref()
    }

    /// The current user. `None` both for anonymous requests and hosts without an accessor.
    #[must_use]
    pub fn current_user(&self) -> Option<UserId> {
        self.current_user
            .as_deref()
            .and_then(|accessor| accessor.current_user())
    }

    /// The route resolver, if any.
    #[must_use]
    pub fn routes(&self) -> Option<&dyn RateRoutes> {
        self.routes.as_deref()
    }

    /// The anti-forgery token, if protection is active.
    #[must_use]
    pub const fn forgery_protection(&self) -> Option<&ForgeryProtection> {
        self.forgery_protection.as_ref()
    }

    /// The registered translator, if any.
    #[must_use]
    pub fn translator(&self) -> Option<&dyn Translate> {
        self.translator.as_deref()
    }

    /// Resolves the conventional submission path of `rateable`.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::MissingRateRoute`] if no resolver is registered or
    /// the resolver does not know the route.
    pub fn resolve_rate_path(&self, rateable: &dyn Rateable) -> Result<String, RatingError> {
        let route = rate_route_name(rateable);
        if let Some(path) = self
            .routes()
            .and_then(|routes| routes.rate_path(&route, rateable))
        {
            return Ok(path);
        }
        tracing::warn!(route = %route, "no rate route registered");
        Err(RatingError::MissingRateRoute { route })
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;
    use crate::memory::MemoryRateable;

    #[test]
    fn test_current_user_from_closure() {
        let env = Environment::new().with_current_user(|| Some(UserId::from(4_u64)));
        assert!(env.current_user_accessor().is_some());
        assert_eq!(env.current_user(), Some(UserId::from(4_u64)));
    }

    #[test]
    fn test_anonymous_accessor_differs_from_missing_accessor() {
        let anonymous = Environment::new().with_current_user(|| None);
        assert!(anonymous.current_user_accessor().is_some());
        assert!(anonymous.current_user().is_none());

        let bare = Environment::new();
        assert!(bare.current_user_accessor().is_none());
    }

    #[test]
    fn test_resolve_rate_path_from_table() {
        let env = Environment::new()
            .with_routes(RouteTable::new().route("rate_article_path", "/articles/:id/rate"));
        let article = MemoryRateable::new("article", 9);
        assert_eq!(env.resolve_rate_path(&article).unwrap(), "/articles/9/rate");
    }

    #[test]
    fn test_resolve_rate_path_missing() {
        let env = Environment::new().with_routes(RouteTable::new());
        let photo = MemoryRateable::new("photo", 1);
        assert_eq!(
            env.resolve_rate_path(&photo),
            Err(RatingError::MissingRateRoute {
                route: "rate_photo_path".into()
            })
        );
        assert!(Environment::new().resolve_rate_path(&photo).is_err());
    }

    #[test]
    fn test_routes_from_closure() {
        let env = Environment::new().with_routes(|route: &str, rateable: &dyn Rateable| {
            (route == "rate_article_path").then(|| format!("/a/{}", rateable.record_id()))
        });
        let article = MemoryRateable::new("article", 2);
        assert_eq!(env.resolve_rate_path(&article).unwrap(), "/a/2");
    }

    #[test]
    fn test_forgery_token_is_redacted_in_debug() {
        let protection = ForgeryProtection::new("s3cr3t").param("csrf");
        let debug = format!("{protection:?}");
        assert!(!debug.contains("s3cr3t"));
        assert_eq!(protection.param_name(), "csrf");
        assert_eq!(protection.token(), "s3cr3t");
    }

    #[test]
    fn test_current_message_key() {
        assert_eq!(MessageKey::current(true), MessageKey::UserRating);
        assert_eq!(MessageKey::current(false), MessageKey::GlobalAverage);
        assert_eq!(MessageKey::Hover.as_str(), "hover");
    }
}
