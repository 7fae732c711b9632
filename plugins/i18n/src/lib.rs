//! Message catalogs for rating widget labels.
//!
//! A [`Catalog`] holds the three label templates of a widget. Templates use
//! `%{value}` and `%{max}` placeholders; the older `{{value}}`/`{{max}}` form is
//! accepted too. With the `std` feature (enabled by default) catalogs can be
//! loaded from TOML:
//!
//! ```toml
//! [ajaxful_rating.helper]
//! hover = "Votar %{value} de %{max}"
//! global_average = "Promedio: %{value} de %{max}"
//! ```
//!
//! Keys missing from the file keep their English default.

extern crate alloc;

use alloc::borrow::Cow;
use alloc::string::{String, ToString};

use ajaxful_rating_core::{MessageKey, Translate};
use serde::Deserialize;

#[cfg(feature = "std")]
mod load;
#[cfg(feature = "std")]
pub use load::CatalogError;

/// Label templates of a rating widget.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Tooltip of a star that submits a rate.
    pub hover: Cow<'static, str>,
    /// Label of the viewer's own rate.
    pub user_rating: Cow<'static, str>,
    /// Label of the average rate.
    pub global_average: Cow<'static, str>,
}

impl Catalog {
    /// Built-in English labels.
    pub const ENGLISH: Self = Self {
        hover: Cow::Borrowed("Rate %{value} of %{max}"),
        user_rating: Cow::Borrowed("Your rating: %{value} of %{max}"),
        global_average: Cow::Borrowed("Currently rated %{value} of %{max}"),
    };

    /// The raw template of `key`.
    #[must_use]
    pub fn template(&self, key: MessageKey) -> &str {
        match key {
            MessageKey::Hover => &self.hover,
            MessageKey::UserRating => &self.user_rating,
            MessageKey::GlobalAverage => &self.global_average,
        }
    }

    /// Overrides the template of `key`.
    #[must_use]
    pub fn with(mut self, key: MessageKey, template: impl Into<Cow<'static, str>>) -> Self {
        let template = template.into();
        match key {
            MessageKey::Hover => self.hover = template,
            MessageKey::UserRating => self.user_rating = template,
            MessageKey::GlobalAverage => self.global_average = template,
        }
        self
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::ENGLISH
    }
}

impl Translate for Catalog {
    fn translate(&self, key: MessageKey, value: &str, max: u32) -> String {
        interpolate(self.template(key), value, &max.to_string())
    }
}

fn interpolate(template: &str, value: &str, max: &str) -> String {
    template
        .replace("%{value}", value)
        .replace("{{value}}", value)
        .replace("%{max}", max)
        .replace("{{max}}", max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_defaults() {
        let catalog = Catalog::default();
        assert_eq!(
            catalog.translate(MessageKey::GlobalAverage, "3", 5),
            "Currently rated 3 of 5"
        );
        assert_eq!(catalog.translate(MessageKey::Hover, "2", 5), "Rate 2 of 5");
        assert_eq!(
            catalog.translate(MessageKey::UserRating, "4", 5),
            "Your rating: 4 of 5"
        );
    }

    #[test]
    fn test_legacy_placeholders() {
        let catalog =
            Catalog::ENGLISH.with(MessageKey::Hover, "{{value}} out of {{max}} stars");
        assert_eq!(catalog.translate(MessageKey::Hover, "1", 3), "1 out of 3 stars");
    }
}
