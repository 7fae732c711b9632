use core::fmt::{self, Display};

use ajaxful_rating_core::format_decimal;
use heck::ToKebabCase;

/// The value of a CSS property.
///
/// Numbers are lengths in pixels unless they carry their own unit. Use
/// [`CssValue::Raw`] for unitless values such as `z-index` or values that
/// already include a unit.
#[derive(Debug, Clone, PartialEq)]
pub enum CssValue {
    /// A length in pixels.
    Px(f64),
    /// A percentage.
    Percent(f64),
    /// Verbatim text.
    Raw(String),
}

impl Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(value) => write!(f, "{}px", format_decimal(*value)),
            Self::Percent(value) => write!(f, "{}%", format_decimal(*value)),
            Self::Raw(value) => f.write_str(value),
        }
    }
}

macro_rules! px_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for CssValue {
                fn from(value: $ty) -> Self {
                    Self::Px(f64::from(value))
                }
            }
        )*
    };
}

px_from!(u8, u16, u32, i8, i16, i32, f32, f64);

impl From<&str> for CssValue {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_owned())
    }
}

impl From<String> for CssValue {
    fn from(value: String) -> Self {
        Self::Raw(value)
    }
}

/// Converts a property name to its CSS spelling.
///
/// Underscores become hyphens and camelCase becomes kebab-case, so
/// `margin_right` and `zIndex` turn into `margin-right` and `z-index`.
pub(crate) fn property_name(name: &str) -> String {
    name.to_kebab_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_pixels() {
        assert_eq!(CssValue::from(125u32).to_string(), "125px");
        assert_eq!(CssValue::from(-50i32).to_string(), "-50px");
        assert_eq!(CssValue::from(2.5f64).to_string(), "2.5px");
    }

    #[test]
    fn test_unit_bearing_values_are_verbatim() {
        assert_eq!(CssValue::from("60%").to_string(), "60%");
        assert_eq!(CssValue::Percent(20.0).to_string(), "20%");
    }

    #[test]
    fn test_property_names() {
        assert_eq!(property_name("margin_right"), "margin-right");
        assert_eq!(property_name("zIndex"), "z-index");
        assert_eq!(property_name("marginRight"), "margin-right");
        assert_eq!(property_name("width"), "width");
        assert_eq!(property_name("z-index"), "z-index");
    }
}
