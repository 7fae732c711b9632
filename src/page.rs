//! Request-scoped rendering context.

use ajaxful_rating_core::{Environment, RatingError, RatingOptions, Rateable, Viewer};
use ajaxful_rating_css::CssBuilder;
use ajaxful_rating_stars::StarsBuilder;
use maud::{Markup, PreEscaped, html};

use crate::script;

/// Everything one page render shares between its widgets.
///
/// Create one `Page` per request. Every widget rendered through it registers
/// its CSS rules into the same builder, so [`Page::stylesheet`] covers all of
/// them once the body has been rendered.
///
/// ```
/// use ajaxful_rating::prelude::*;
///
/// let env = Environment::new()
///     .with_routes(RouteTable::new().route("rate_article_path", "/articles/:id/rate"));
/// let article = MemoryRateable::new("article", 7);
///
/// let mut page = Page::new(&env);
/// let widget = page.ratings_for(&article, Some(Viewer::Static), RatingOptions::new())?;
/// let style = page.stylesheet();
///
/// assert!(widget.into_string().contains("ajaxful_rating_no-small_article_7"));
/// assert!(style.into_string().contains(".max-5-stars"));
/// # Ok::<(), RatingError>(())
/// ```
#[derive(Debug)]
pub struct Page<'env> {
    env: &'env Environment,
    css: Option<CssBuilder>,
}

impl<'env> Page<'env> {
    /// Starts a page render against `env`.
    #[must_use]
    pub const fn new(env: &'env Environment) -> Self {
        Self { env, css: None }
    }

    /// The host environment.
    #[must_use]
    pub const fn env(&self) -> &'env Environment {
        self.env
    }

    /// Rules accumulated so far, if any widget or stylesheet was rendered.
    #[must_use]
    pub const fn css(&self) -> Option<&CssBuilder> {
        self.css.as_ref()
    }

    fn css_mut(&mut self) -> &mut CssBuilder {
        self.css.get_or_insert_with(CssBuilder::new)
    }

    /// Renders the rating widget of `rateable`.
    ///
    /// `viewer` is who the widget is displayed for; `None` asks the
    /// environment for the logged-in user. Pass [`Viewer::Static`] for a
    /// read-only list of stars.
    ///
    /// # Errors
    ///
    /// - [`RatingError::NoUserSpecified`] if `viewer` is `None`, the
    ///   environment has no current-user accessor and `force_static` is unset.
    /// - [`RatingError::MissingRateRoute`] if no URL was given and no
    ///   `rate_<class>_path` route resolves.
    #[doc(alias = "render_rating_widget")]
    pub fn ratings_for(
        &mut self,
        rateable: &dyn Rateable,
        viewer: Option<Viewer>,
        options: RatingOptions,
    ) -> Result<Markup, RatingError> {
        let env = self.env;
        let builder = StarsBuilder::new(rateable, viewer, env, self.css_mut(), options)?;
        Ok(builder.render())
    }

    /// Renders a widget from a loosely typed option map.
    ///
    /// Only recognized keys are read and boolean flags also accept the strings
    /// `"true"` and `"false"`.
    ///
    /// # Errors
    ///
    /// [`RatingError::InvalidOptions`] for malformed values, plus everything
    /// [`Page::ratings_for`] returns.
    pub fn ratings_for_value(
        &mut self,
        rateable: &dyn Rateable,
        viewer: Option<Viewer>,
        options: serde_json::Value,
    ) -> Result<Markup, RatingError> {
        let options = RatingOptions::from_value(options)?;
        self.ratings_for(rateable, viewer, options)
    }

    /// The `<style>` block for every widget rendered so far.
    pub fn stylesheet(&mut self) -> Markup {
        let css = self.css_mut().to_css();
        html! {
            style type="text/css" { (PreEscaped(css)) }
        }
    }

    /// The jQuery behaviour script, carrying the anti-forgery token if the
    /// environment provides one.
    #[must_use]
    pub fn script(&self) -> Markup {
        script::jquery(self.env.forgery_protection())
    }

    /// The Prototype.js behaviour script.
    #[must_use]
    pub fn prototype_script(&self) -> Markup {
        script::prototype()
    }

    /// Ends the page, handing back the accumulated rules.
    #[must_use]
    pub fn into_css(self) -> CssBuilder {
        self.css.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use ajaxful_rating_core::{ForgeryProtection, MemoryRateable, RouteTable, UserId};
    use serde_json::json;

    use super::*;

    fn env() -> Environment {
        Environment::new()
            .with_current_user(|| Some(UserId::from(1_u64)))
            .with_routes(RouteTable::new().route("rate_article_path", "/articles/:id/rate"))
    }

    #[test]
    fn test_stylesheet_before_any_widget() {
        let env = env();
        let mut page = Page::new(&env);
        assert!(page.css().is_none());
        assert_eq!(
            page.stylesheet().into_string(),
            r#"<style type="text/css"></style>"#
        );
        assert!(page.css().is_some_and(CssBuilder::is_empty));
    }

    #[test]
    fn test_widgets_share_one_stylesheet() {
        let env = env();
        let article = MemoryRateable::new("article", 1);
        let other = MemoryRateable::new("article", 2);
        let mut page = Page::new(&env);

        page.ratings_for(&article, None, RatingOptions::new()).unwrap();
        page.ratings_for(&other, None, RatingOptions::new().small(true))
            .unwrap();

        let first = page.stylesheet().into_string();
        let second = page.stylesheet().into_string();
        assert_eq!(first, second);
        assert!(first.contains(".max-5-stars { width: 125px; margin-right: 0px; }"));
        assert!(first.contains(".max-5-stars.small { width: 50px; margin-right: 0px; }"));

        let css = page.into_css();
        assert_eq!(css.len(), 7);
    }

    #[test]
    fn test_ratings_for_uses_current_user() {
        let env = env();
        let article = MemoryRateable::new("article", 4);
        let mut page = Page::new(&env);
        let markup = page
            .ratings_for(&article, None, RatingOptions::new())
            .unwrap()
            .into_string();
        assert!(markup.contains(r#"href="/articles/4/rate?show_user_rating=false&amp;small=false&amp;stars=3""#));
    }

    #[test]
    fn test_ratings_for_value_normalizes_flags() {
        let env = env();
        let article = MemoryRateable::new("article", 4);
        let mut page = Page::new(&env);
        let markup = page
            .ratings_for_value(
                &article,
                None,
                json!({ "wrap": "false", "force_static": "true", "colour": "red" }),
            )
            .unwrap()
            .into_string();
        assert!(markup.starts_with(r#"<ul class="ajaxful-rating max-5-stars">"#));
        assert!(!markup.contains("<a "));
    }

    #[test]
    fn test_ratings_for_value_rejects_malformed_values() {
        let env = env();
        let article = MemoryRateable::new("article", 4);
        let mut page = Page::new(&env);
        let result = page.ratings_for_value(&article, None, json!({ "small": [1] }));
        assert!(matches!(result, Err(RatingError::InvalidOptions(_))));
        assert!(page.css().is_none());
    }

    #[test]
    fn test_no_user_without_accessor() {
        let env = Environment::new();
        let article = MemoryRateable::new("article", 4);
        let mut page = Page::new(&env);
        let result = page.ratings_for(&article, None, RatingOptions::new().remote_url("/rate"));
        assert!(matches!(result, Err(RatingError::NoUserSpecified)));
    }

    #[test]
    fn test_missing_route() {
        let env = Environment::new();
        let article = MemoryRateable::new("article", 4);
        let mut page = Page::new(&env);
        let result = page.ratings_for(&article, Some(Viewer::Static), RatingOptions::new());
        assert!(matches!(
            result,
            Err(RatingError::MissingRateRoute { route }) if route == "rate_article_path"
        ));
    }

    #[test]
    fn test_script_follows_environment() {
        let env = env();
        assert!(!Page::new(&env).script().into_string().contains("csrf_token"));

        let env = env.with_forgery_protection(ForgeryProtection::new("secret"));
        let page = Page::new(&env);
        assert!(page.script().into_string().contains(r#"var csrf_token = "secret";"#));
        assert!(page.prototype_script().into_string().contains("Ajax.Request"));
    }
}
