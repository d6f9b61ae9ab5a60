/// Number of decimal places numbers are rendered with before trimming.
pub const DECIMAL_PLACES: usize = 6;

/// Parses the text of a numeric literal produced by the scanner.
///
/// The scanner only emits digit runs with an optional `.digits` fraction, so
/// this only fails if it is handed text that did not come from a numeric token.
///
/// ## Example
/// ```
/// use sprig::util::num::parse_literal;
///
/// assert_eq!(parse_literal("3.5"), Some(3.5));
/// assert_eq!(parse_literal("42"), Some(42.0));
/// assert_eq!(parse_literal("4x"), None);
/// ```
#[must_use]
pub fn parse_literal(text: &str) -> Option<f64> {
    text.parse().ok()
}

/// Renders a number the way `print` and string concatenation show it.
///
/// The value is formatted with [`DECIMAL_PLACES`] fixed decimals, then trailing
/// zeros and a dangling decimal point are removed. Whole numbers therefore print
/// without a fraction, and fractions are rounded to six places.
///
/// ## Example
/// ```
/// use sprig::util::num::format_number;
///
/// assert_eq!(format_number(13.0), "13");
/// assert_eq!(format_number(3.5 / 2.25), "1.555556");
/// assert_eq!(format_number(0.25), "0.25");
/// assert_eq!(format_number(-2.0), "-2");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let mut text = format!("{value:.DECIMAL_PLACES$}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}
