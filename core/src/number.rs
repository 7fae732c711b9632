//! Number formatting for markup and stylesheets.

use alloc::string::{String, ToString};

/// Formats a decimal the way it should appear in class names, labels and CSS.
///
/// Integral values drop the fractional part (`60.0` prints `60`), everything else
/// prints in its shortest round-trip form. Negative zero and `NaN` print `0`.
#[must_use]
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() || value == 0.0 {
        return "0".into();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values_have_no_fraction() {
        assert_eq!(format_decimal(60.0), "60");
        assert_eq!(format_decimal(5.0), "5");
        assert_eq!(format_decimal(-0.0), "0");
    }

    #[test]
    fn test_fractions_keep_shortest_form() {
        assert_eq!(format_decimal(3.5), "3.5");
        assert_eq!(format_decimal(1.0 / 3.0 * 100.0), "33.33333333333333");
    }

    #[test]
    fn test_nan_is_zero() {
        assert_eq!(format_decimal(f64::NAN), "0");
    }
}
