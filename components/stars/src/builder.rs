//! The star list renderer.

use core::fmt;

use ajaxful_rating_core::{
    Environment, MessageKey, RatingError, RatingOptions, Rateable, Translate, UserId, Viewer,
    format_decimal,
};
use ajaxful_rating_css::{CssBuilder, CssValue};
use ajaxful_rating_i18n::Catalog;
use maud::{Markup, html};
use serde::Serialize;

static ENGLISH: Catalog = Catalog::ENGLISH;

/// Width of one star in pixels.
const STAR_WIDTH: f64 = 25.0;
/// Width of one compact star in pixels.
const SMALL_STAR_WIDTH: f64 = 10.0;

/// Renders the star list of one rateable.
///
/// All validation happens in [`StarsBuilder::new`]; once built, rendering
/// cannot fail. Rules the markup depends on are registered into the shared
/// [`CssBuilder`] of the page.
///
/// ```
/// use ajaxful_rating_core::{Environment, MemoryRateable, RatingOptions, Viewer};
/// use ajaxful_rating_css::CssBuilder;
/// use ajaxful_rating_stars::StarsBuilder;
///
/// let article = MemoryRateable::new("article", 1);
/// let env = Environment::new();
/// let mut css = CssBuilder::new();
/// let options = RatingOptions::new().remote_url("/articles/1/rate");
///
/// let markup = StarsBuilder::new(&article, Some(Viewer::Static), &env, &mut css, options)?
///     .render()
///     .into_string();
/// assert!(markup.contains("stars-5-5"));
/// assert!(css.contains(".max-5-stars"));
/// # Ok::<(), ajaxful_rating_core::RatingError>(())
/// ```
pub struct StarsBuilder<'a> {
    rateable: &'a dyn Rateable,
    viewer: Viewer,
    current_user: Option<UserId>,
    css: &'a mut CssBuilder,
    translator: &'a dyn Translate,
    options: RatingOptions,
    url: String,
}

impl fmt::Debug for StarsBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StarsBuilder")
            .field("rateable", &self.rateable.wrapper_dom_id(self.options.small, self.dimension()))
            .field("viewer", &self.viewer)
            .field("current_user", &self.current_user)
            .field("options", &self.options)
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

/// Query string of a rate submission link.
#[derive(Serialize)]
struct StarQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    dimension: Option<&'a str>,
    show_user_rating: bool,
    small: bool,
    stars: u32,
}

impl<'a> StarsBuilder<'a> {
    /// Validates the inputs of a widget.
    ///
    /// A `viewer` of `None` means the caller did not name one: the environment's
    /// current-user accessor decides, and static rendering is used when
    /// `force_static` is set.
    ///
    /// # Errors
    ///
    /// - [`RatingError::NoUserSpecified`] if no viewer can be determined.
    /// - [`RatingError::MissingRateRoute`] if no submission URL was given and
    ///   the environment cannot derive one.
    pub fn new(
        rateable: &'a dyn Rateable,
        viewer: Option<Viewer>,
        env: &'a Environment,
        css: &'a mut CssBuilder,
        mut options: RatingOptions,
    ) -> Result<Self, RatingError> {
        let viewer = match viewer {
            Some(viewer) => viewer,
            None => match env.current_user_accessor() {
                Some(accessor) => Viewer::from(accessor.current_user()),
                None if options.force_static => Viewer::Static,
                None => {
                    tracing::warn!(record = %rateable.record_id(), "no user specified for rating widget");
                    return Err(RatingError::NoUserSpecified);
                }
            },
        };

        let url = match options.remote_options.url.take() {
            Some(url) => url,
            None => env.resolve_rate_path(rateable)?,
        };
        options.remote_options.url = Some(url.clone());

        let current_user = options.current_user.clone().or_else(|| env.current_user());
        let translator = env.translator().unwrap_or(&ENGLISH);

        Ok(Self {
            rateable,
            viewer,
            current_user,
            css,
            translator,
            options,
            url,
        })
    }

    /// The resolved options.
    #[must_use]
    pub const fn options(&self) -> &RatingOptions {
        &self.options
    }

    /// The resolved submission URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    fn dimension(&self) -> Option<&str> {
        self.options.dimension.as_deref()
    }

    fn user(&self) -> Option<&UserId> {
        self.viewer.user()
    }

    /// The value the widget displays, before any normalization.
    ///
    /// With `show_user_rating` this is the viewer's own rate, or `0` if they
    /// have not rated or are unknown. Otherwise it is the cached average.
    #[must_use]
    pub fn show_value(&self) -> f64 {
        let dimension = self.dimension();
        if self.options.show_user_rating {
            self.user()
                .and_then(|user| self.rateable.rate_by(user, dimension))
                .map_or(0.0, |rate| f64::from(rate.stars))
        } else {
            self.rateable.rate_average(true, dimension)
        }
    }

    /// Renders the widget: the star list, its wrapper and the chosen label
    /// as the options ask.
    #[must_use]
    pub fn render(mut self) -> Markup {
        let value = self.show_value();
        let scale = self.scale(value);
        let ratings = self.ratings_tag(scale);
        let show_chosen = self.options.show_chosen;

        tracing::debug!(
            record = %self.rateable.record_id(),
            dimension = self.dimension().unwrap_or_default(),
            value = scale.value,
            max = scale.max,
            "rendering rating widget"
        );

        html! {
            @if self.options.wrap {
                (self.wrapper_tag(&ratings))
            } @else {
                (ratings)
            }
            @if show_chosen {
                (self.ratings_chosen(scale))
            }
        }
    }

    /// Resolves the displayed scale, applying normalization and clamping.
    fn scale(&self, value: f64) -> Scale {
        let dimension_max = self.rateable.max_stars(self.dimension());
        let (value, max) = if self.options.normalize && dimension_max > 0 {
            let global_max = self.rateable.max_stars(None);
            (
                f64::from(global_max) * value / f64::from(dimension_max),
                global_max,
            )
        } else {
            (value, dimension_max)
        };
        Scale {
            value: value.clamp(0.0, f64::from(max)),
            max,
        }
    }

    fn label(&self, key: MessageKey, value: f64, max: u32) -> String {
        self.translator.translate(key, &format_decimal(value), max)
    }

    fn current_label(&self, value: f64, max: u32) -> String {
        self.label(MessageKey::current(self.options.show_user_rating), value, max)
    }

    fn ratings_tag(&mut self, scale: Scale) -> Markup {
        let Scale { value, max } = scale;
        let small = self.options.small;
        let gap = (f64::from(self.rateable.max_stars(None)) - f64::from(max)) * STAR_WIDTH;

        self.css.rule(
            format!(".max-{max}-stars"),
            [
                ("width", CssValue::Px(f64::from(max) * STAR_WIDTH)),
                ("margin_right", CssValue::Px(gap)),
            ],
        );
        if small {
            self.css.rule(
                format!(".max-{max}-stars.small"),
                [
                    ("width", CssValue::Px(f64::from(max) * SMALL_STAR_WIDTH)),
                    ("margin_right", CssValue::Px(gap)),
                ],
            );
        }

        let current = self.current_label(value, max);
        let width = scale.fill_percent();
        let stars: Vec<Markup> = (1..=max).map(|star| self.star_tag(star, max)).collect();
        let list_class = format!(
            "ajaxful-rating{} max-{max}-stars",
            if small { " small" } else { "" }
        );

        html! {
            ul class=(list_class) {
                li class="show-value" style=(format!("width: {}%", format_decimal(width))) title=(current) {
                    (current)
                }
                @for star in &stars {
                    li { (star) }
                }
            }
        }
    }

    fn star_tag(&mut self, star: u32, max: u32) -> Markup {
        let css_class = format!("stars-{star}-{max}");
        self.css.rule(
            format!(".ajaxful-rating .{css_class}"),
            [
                (
                    "width",
                    CssValue::Percent(f64::from(star) / f64::from(max) * 100.0),
                ),
                ("z-index", CssValue::Raw((max + 2 - star).to_string())),
            ],
        );

        if self.is_interactive() {
            self.link_star_tag(star, max, &css_class)
        } else {
            let title = self.current_label(f64::from(star), max);
            html! {
                span class=(css_class) title=(title) { (star) }
            }
        }
    }

    /// Whether stars submit rates for this viewer.
    ///
    /// Requires a known viewer who is the logged-in user, no `force_static`, and
    /// either an unrated dimension or one that allows updates.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        let Some(user) = self.user() else {
            return false;
        };
        if self.options.force_static || self.current_user.as_ref() != Some(user) {
            return false;
        }
        let dimension = self.dimension();
        self.rateable.dimension_config(dimension).allow_update
            || !self.rateable.rated_by(user, dimension)
    }

    fn link_star_tag(&self, star: u32, max: u32, css_class: &str) -> Markup {
        let query = StarQuery {
            dimension: self.dimension(),
            show_user_rating: self.options.show_user_rating,
            small: self.options.small,
            stars: star,
        };
        let query = serde_urlencoded::to_string(&query).unwrap_or_else(|error| {
            tracing::error!(%error, "failed to encode rate query");
            String::new()
        });
        let separator = if self.url.contains('?') { '&' } else { '?' };
        let href = format!("{}{separator}{query}", self.url);
        let title = self.label(MessageKey::Hover, f64::from(star), max);
        let method = self.options.remote_options.method.as_str();

        html! {
            a class=(css_class) href=(href) title=(title) data-method=(method) data-remote="true" rel="nofollow" {
                (star)
            }
        }
    }

    fn wrapper_tag(&self, ratings: &Markup) -> Markup {
        let dom_id = self
            .rateable
            .wrapper_dom_id(self.options.small, self.dimension());
        html! {
            div class="ajaxful-rating-wrapper" id=(dom_id) {
                (ratings)
            }
        }
    }

    fn ratings_chosen(&self, scale: Scale) -> Markup {
        let label = self.label(MessageKey::Hover, scale.value, scale.max);
        html! {
            div class="ajaxful-rating-chosen-wrapper" {
                div class="ajaxful-rating-chosen" { (label) }
            }
        }
    }
}

/// A display value and the scale it is drawn on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Scale {
    pub(crate) value: f64,
    pub(crate) max: u32,
}

impl Scale {
    /// Fill width of the current-value indicator, in percent.
    pub(crate) fn fill_percent(self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        self.value / f64::from(self.max) * 100.0
    }
}
