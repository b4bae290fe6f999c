//! Shorthand rewrite passes
//!
//! Each pass repeats its substitution until no match remains. Termination
//! holds because every substitution strictly shrinks the matched shorthand:
//! a conversion phrase collapses to a number, a magnitude suffix loses its
//! letter, a percentage loses its `%`, a constant word becomes digits, and a
//! bare call gains parentheses that block re-matching.

use lazy_regex::regex;
use once_cell::sync::Lazy;
use regex::Regex;
use reckon_core::FUNCTIONS;
use reckon_units::{UnitConverter, UNIT_ALIASES};

/// Replace the leftmost match repeatedly until the pattern no longer matches
fn rewrite_all(mut text: String, pattern: &Regex, replacement: &str) -> String {
    while pattern.is_match(&text) {
        text = pattern.replace(&text, replacement).into_owned();
    }
    text
}

/// Rewrite `<number><unit> (in|to) <unit>` phrases into their converted
/// numeric value.
///
/// Gated on the line containing ` in ` or ` to `. Aliases like `feet` or
/// `celsius` are normalized to canonical symbols first. A failed or
/// non-finite conversion stops the pass and leaves the remaining text
/// untouched; the evaluator rejects it later.
pub fn rewrite_conversions(text: &str, converter: &dyn UnitConverter) -> String {
    if !text.contains(" in ") && !text.contains(" to ") {
        return text.to_string();
    }

    let mut text = normalize_unit_aliases(text);
    let pattern = regex!(r"(?i)(\d+\.?\d*)\s*(\S+)\s+(in|to)\s+([^\s()]+)");

    loop {
        let spliced = {
            let caps = match pattern.captures(&text) {
                Some(caps) => caps,
                None => break,
            };
            let value: f64 = match caps[1].parse() {
                Ok(value) => value,
                Err(_) => break,
            };
            match converter.convert(value, &caps[2], &caps[4]) {
                Ok(converted) if converted.is_finite() => {
                    let range = match caps.get(0) {
                        Some(m) => m.range(),
                        None => break,
                    };
                    (range, converted.to_string())
                }
                Ok(converted) => {
                    log::debug!(
                        "discarding non-finite conversion result {converted} for '{}'",
                        &caps[0]
                    );
                    break;
                }
                Err(err) => {
                    log::debug!("deferring unit conversion '{}': {err}", &caps[0]);
                    break;
                }
            }
        };
        text.replace_range(spliced.0, &spliced.1);
    }

    text
}

/// Normalize spelled-out unit names to canonical symbols.
///
/// Table order, at most one replacement per alias, first case-insensitive
/// occurrence only.
pub fn normalize_unit_aliases(text: &str) -> String {
    let mut text = text.to_string();
    for (alias, canonical) in UNIT_ALIASES {
        if let Some(start) = find_ignore_ascii_case(&text, alias) {
            text.replace_range(start..start + alias.len(), canonical);
        }
    }
    text
}

fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    // Needles are plain ASCII words, so a matching window always sits on
    // char boundaries.
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

/// Rewrite magnitude suffixes: `2k` → `2 * 1e3`, `3M` → `3 * 1e6`,
/// `1 billion` → `1 * 1e9`.
///
/// `k` is case-insensitive, `M` is not (`m` would collide with meters).
pub fn rewrite_magnitudes(text: &str) -> String {
    let text = rewrite_all(
        text.to_string(),
        regex!(r"(?i)(\d+\.?\d*)k"),
        "${1} * 1e3",
    );
    let text = rewrite_all(text, regex!(r"(\d+\.?\d*)M"), "${1} * 1e6");
    rewrite_all(text, regex!(r"(\d+\.?\d*)\s?billion"), "${1} * 1e9")
}

/// Rewrite percentage phrases: `a% of b`, `a% on b`, `a% off b`
pub fn rewrite_percentages(text: &str) -> String {
    let text = rewrite_all(
        text.to_string(),
        regex!(r"(\d+\.?\d*)% of (\d+\.?\d*)"),
        "${2} * ${1} / 100",
    );
    let text = rewrite_all(
        text,
        regex!(r"(\d+\.?\d*)% on (\d+\.?\d*)"),
        "${2} * ${1} / 100 + ${2}",
    );
    rewrite_all(
        text,
        regex!(r"(\d+\.?\d*)% off (\d+\.?\d*)"),
        "${2} - ${2} * ${1} / 100",
    )
}

/// Rewrite the standalone constant words `PI` (case-insensitive) and `E`
/// (case-sensitive) into numeric literals, preserving the delimiters
pub fn rewrite_constants(text: &str) -> String {
    let text = rewrite_all(
        text.to_string(),
        regex!(r"(?i)(\s|^)PI(\s|$)"),
        "${1}3.1415926536${2}",
    );
    rewrite_all(text, regex!(r"(\s|^)E(\s|$)"), "${1}2.7182818285${2}")
}

/// Per-function patterns for bare calls like `sqrt 9`; the argument is a run
/// of characters excluding whitespace and parentheses
static BARE_CALLS: Lazy<Vec<(Regex, String)>> = Lazy::new(|| {
    FUNCTIONS
        .iter()
        .map(|name| {
            let pattern =
                Regex::new(&format!(r"{name}\s+([^\s()]+)")).expect("valid bare-call pattern");
            (pattern, format!("{name}(${{1}})"))
        })
        .collect()
});

/// Rewrite bare function calls: `sqrt 9` → `sqrt(9)`
pub fn rewrite_functions(text: &str) -> String {
    let mut text = text.to_string();
    for (pattern, replacement) in BARE_CALLS.iter() {
        text = rewrite_all(text, pattern, replacement);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reckon_units::StandardConverter;

    #[test]
    fn test_magnitude_k() {
        assert_eq!(rewrite_magnitudes("2k + 1"), "2 * 1e3 + 1");
        assert_eq!(rewrite_magnitudes("2K"), "2 * 1e3");
        assert_eq!(rewrite_magnitudes("1k + 2k"), "1 * 1e3 + 2 * 1e3");
    }

    #[test]
    fn test_magnitude_m_is_case_sensitive() {
        assert_eq!(rewrite_magnitudes("3M"), "3 * 1e6");
        assert_eq!(rewrite_magnitudes("3m"), "3m");
    }

    #[test]
    fn test_magnitude_billion() {
        assert_eq!(rewrite_magnitudes("1 billion"), "1 * 1e9");
        assert_eq!(rewrite_magnitudes("1billion"), "1 * 1e9");
    }

    #[test]
    fn test_percentages() {
        assert_eq!(rewrite_percentages("10% of 200"), "200 * 10 / 100");
        assert_eq!(rewrite_percentages("10% on 200"), "200 * 10 / 100 + 200");
        assert_eq!(rewrite_percentages("10% off 200"), "200 - 200 * 10 / 100");
    }

    #[test]
    fn test_constants() {
        assert_eq!(rewrite_constants("PI * 2"), "3.1415926536 * 2");
        assert_eq!(rewrite_constants("2 * pi"), "2 * 3.1415926536");
        assert_eq!(rewrite_constants("E + 1"), "2.7182818285 + 1");
        // E is case-sensitive, and only standalone words rewrite
        assert_eq!(rewrite_constants("e + 1"), "e + 1");
        assert_eq!(rewrite_constants("PIE"), "PIE");
    }

    #[test]
    fn test_bare_function_calls() {
        assert_eq!(rewrite_functions("sqrt 9"), "sqrt(9)");
        assert_eq!(rewrite_functions("sqrt 9 + floor 2.5"), "sqrt(9) + floor(2.5)");
        // already-parenthesized calls are left alone
        assert_eq!(rewrite_functions("sqrt(9)"), "sqrt(9)");
    }

    #[test]
    fn test_conversion_phrase() {
        let converter = StandardConverter;
        assert_eq!(rewrite_conversions("100 cm in m", &converter), "1");
        assert_eq!(rewrite_conversions("1 GB to MB", &converter), "1024");
        assert_eq!(rewrite_conversions("100cm in m", &converter), "1");
    }

    #[test]
    fn test_conversion_alias_normalization() {
        let converter = StandardConverter;
        assert_eq!(
            rewrite_conversions("30 celsius in farenheit", &converter),
            "86"
        );
        assert_eq!(rewrite_conversions("2 feet in ft", &converter), "2");
    }

    #[test]
    fn test_conversion_fails_open() {
        let converter = StandardConverter;
        // unknown unit: aliases normalize, the phrase stays
        assert_eq!(
            rewrite_conversions("5 blobs in m", &converter),
            "5 blobs in m"
        );
        // incompatible families
        assert_eq!(rewrite_conversions("5 cm in kg", &converter), "5 cm in kg");
        // no conversion phrase at all
        assert_eq!(
            rewrite_conversions("what in the world", &converter),
            "what in the world"
        );
    }

    #[test]
    fn test_conversion_gate() {
        let converter = StandardConverter;
        // without the spaced keyword the pass does not touch the line
        assert_eq!(rewrite_conversions("100cm", &converter), "100cm");
    }

    #[test]
    fn test_multiple_conversions_per_line() {
        let converter = StandardConverter;
        assert_eq!(
            rewrite_conversions("1 km in m + 2 h in min", &converter),
            "1000 + 120"
        );
    }

    #[test]
    fn test_alias_first_occurrence_only() {
        assert_eq!(
            normalize_unit_aliases("1 feet in feet"),
            "1 ft in feet"
        );
    }

    #[test]
    fn test_passes_are_idempotent_without_matches() {
        for text in ["1 + 2", "hello world", "a = b", ""] {
            assert_eq!(rewrite_magnitudes(text), text);
            assert_eq!(rewrite_percentages(text), text);
            assert_eq!(rewrite_constants(text), text);
            assert_eq!(rewrite_functions(text), text);
        }
    }

    #[test]
    fn test_passes_reach_fixpoint() {
        let once = rewrite_magnitudes("2k + 3k");
        assert_eq!(rewrite_magnitudes(&once), once);

        let once = rewrite_percentages("10% of 200");
        assert_eq!(rewrite_percentages(&once), once);

        let once = rewrite_functions("sqrt 9");
        assert_eq!(rewrite_functions(&once), once);
    }
}
