//! Unit name aliases

/// Spelled-out unit names accepted in notebook text, mapped to the canonical
/// symbols the converter understands.
///
/// The rewrite pipeline applies these in table order, replacing only the
/// first case-insensitive occurrence of each alias per line.
pub const UNIT_ALIASES: &[(&str, &str)] = &[
    ("tbs", "Tbs"),
    ("cups", "cup"),
    ("pint", "pnt"),
    ("gallon", "gal"),
    ("weeks", "week"),
    ("months", "month"),
    ("years", "year"),
    ("foot", "ft"),
    ("feet", "ft"),
    ("kb", "KB"),
    ("gb", "GB"),
    ("mb", "MB"),
    ("tb", "TB"),
    ("celsius", "C"),
    ("farenheit", "F"),
    ("kelvin", "K"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::StandardConverter;
    use crate::UnitConverter;

    #[test]
    fn test_every_alias_targets_a_known_unit() {
        let converter = StandardConverter;
        for (alias, canonical) in UNIT_ALIASES {
            // Converting a unit to itself succeeds exactly when it is known.
            assert!(
                converter.convert(1.0, canonical, canonical).is_ok(),
                "alias {alias} targets unknown unit {canonical}"
            );
        }
    }
}
