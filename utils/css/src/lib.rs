//! # CSS Rule Accumulator
//!
//! Rating widgets size themselves through CSS classes such as `.max-5-stars`
//! and `.stars-3-5`. Every widget rendered on a page registers the rules it
//! relies on into one [`CssBuilder`], and the page emits the collected
//! stylesheet once.
//!
//! ```
//! use ajaxful_rating_css::{CssBuilder, CssValue};
//!
//! let mut css = CssBuilder::new();
//! css.rule(".max-5-stars", [("width", CssValue::from(125u32))]);
//! css.rule(".max-5-stars", [("margin_right", CssValue::from(0u32))]);
//! assert_eq!(css.to_css(), ".max-5-stars { width: 125px; margin-right: 0px; }");
//! ```

mod value;

use core::fmt;

use indexmap::IndexMap;

pub use value::CssValue;

/// Collects CSS rules keyed by selector.
///
/// Selectors keep the order in which they were first registered. Registering
/// a selector again merges into it: new properties are appended and existing
/// ones are overwritten in place, so each selector is emitted exactly once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CssBuilder {
    rules: IndexMap<String, IndexMap<String, CssValue>>,
}

impl CssBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or merges properties under `selector`.
    pub fn rule<I, K, V>(&mut self, selector: impl Into<String>, properties: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<CssValue>,
    {
        let selector = selector.into();
        let declarations = self.rules.entry(selector).or_default();
        for (name, value) in properties {
            declarations.insert(value::property_name(name.as_ref()), value.into());
        }
        self
    }

    /// Looks up a single property of a selector.
    #[must_use]
    pub fn get(&self, selector: &str, property: &str) -> Option<&CssValue> {
        self.rules.get(selector)?.get(property)
    }

    /// Whether `selector` has been registered.
    #[must_use]
    pub fn contains(&self, selector: &str) -> bool {
        self.rules.contains_key(selector)
    }

    /// Registered selectors in registration order.
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Number of distinct selectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rule has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Serializes every rule, one selector per line.
    ///
    /// Does not modify the builder; an empty builder yields an empty string.
    #[must_use]
    pub fn to_css(&self) -> String {
        tracing::trace!(rules = self.rules.len(), "serializing stylesheet");
        self.to_string()
    }
}

impl fmt::Display for CssBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (selector, declarations)) in self.rules.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{selector} {{")?;
            for (name, value) in declarations {
                write!(f, " {name}: {value};")?;
            }
            f.write_str(" }")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder_serializes_to_nothing() {
        let css = CssBuilder::new();
        assert!(css.is_empty());
        assert_eq!(css.to_css(), "");
    }

    #[test]
    fn test_rules_keep_registration_order() {
        let mut css = CssBuilder::new();
        css.rule(".b", [("width", 10u32)]);
        css.rule(".a", [("width", 20u32)]);
        assert_eq!(css.selectors().collect::<Vec<_>>(), [".b", ".a"]);
        assert_eq!(css.to_css(), ".b { width: 10px; }\n.a { width: 20px; }");
    }

    #[test]
    fn test_reregistering_merges_instead_of_duplicating() {
        let mut css = CssBuilder::new();
        css.rule(".max-3-stars", [("width", 75u32), ("margin_right", 50u32)]);
        css.rule(".max-3-stars", [("width", 80u32)]);
        css.rule(".max-3-stars", [("height", "25px")]);

        assert_eq!(css.len(), 1);
        assert_eq!(
            css.to_css(),
            ".max-3-stars { width: 80px; margin-right: 50px; height: 25px; }"
        );
        assert_eq!(css.to_css().matches(".max-3-stars").count(), 1);
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let mut css = CssBuilder::new();
        css.rule(
            ".ajaxful-rating .stars-1-5",
            [
                ("width", CssValue::Percent(20.0)),
                ("zIndex", CssValue::from("6")),
            ],
        );
        let first = css.to_css();
        assert_eq!(first, ".ajaxful-rating .stars-1-5 { width: 20%; z-index: 6; }");
        assert_eq!(css.to_css(), first);
        assert_eq!(css.get(".ajaxful-rating .stars-1-5", "z-index"), Some(&CssValue::from("6")));
    }
}
