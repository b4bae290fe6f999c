//! Locale-independent number rendering
//!
//! Results are rendered purely from [`Preferences`]; the host locale is
//! never consulted. Whole numbers print without a fractional part, anything
//! else prints with exactly `decimal_places` fractional digits.

use crate::preferences::Preferences;

/// Format a finite evaluation result according to `prefs`.
///
/// # Example
/// ```rust
/// use reckon_core::{format_number, Preferences};
///
/// let prefs = Preferences::default();
/// assert_eq!(format_number(1234567.0, &prefs), "1,234,567");
/// assert_eq!(format_number(6.2831853072, &prefs), "6.28");
/// ```
pub fn format_number(value: f64, prefs: &Preferences) -> String {
    let rendered = if value.round() == value {
        format!("{value:.0}")
    } else {
        let places = prefs.decimal_places as usize;
        format!("{value:.places$}")
    };

    let (number, sign) = match rendered.strip_prefix('-') {
        Some(rest) => (rest, "-"),
        None => (rendered.as_str(), ""),
    };
    let (int_digits, frac_digits) = match number.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (number, None),
    };

    let mut out = String::with_capacity(rendered.len() + int_digits.len() / 3 + 1);
    out.push_str(sign);

    let len = int_digits.len();
    for (i, c) in int_digits.chars().enumerate() {
        if i != 0 && (len - i) % 3 == 0 {
            out.push(prefs.thousands_separator);
        }
        out.push(c);
    }

    if let Some(frac) = frac_digits {
        out.push(prefs.decimal_separator);
        out.push_str(frac);
    }

    out
}
