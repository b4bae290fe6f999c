//! Conversion trait and the built-in converter

use crate::error::{UnitError, UnitResult};

/// A unit conversion capability.
///
/// Implementations must be pure and reentrant: the rewrite pipeline may call
/// [`convert`](UnitConverter::convert) any number of times while processing a
/// single line, and the session replays lines on every document pass.
pub trait UnitConverter {
    /// Convert `value` from one canonical unit symbol to another.
    fn convert(&self, value: f64, from: &str, to: &str) -> UnitResult<f64>;
}

/// Built-in converter covering length, mass, volume, time, digital storage
/// and temperature.
///
/// Symbols are case-sensitive (`Mb` is megabits, `MB` megabytes). Spelled-out
/// names like `feet` or `celsius` are not understood here; the rewrite
/// pipeline normalizes them to canonical symbols first via
/// [`UNIT_ALIASES`](crate::UNIT_ALIASES).
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardConverter;

// Linear families, each as (symbol, factor to the family base unit).

const LENGTH: &[(&str, f64)] = &[
    ("mm", 1e-3),
    ("cm", 1e-2),
    ("m", 1.0),
    ("km", 1e3),
    ("in", 0.0254),
    ("ft", 0.3048),
    ("yd", 0.9144),
    ("mi", 1609.344),
];

const MASS: &[(&str, f64)] = &[
    ("mcg", 1e-6),
    ("mg", 1e-3),
    ("g", 1.0),
    ("kg", 1e3),
    ("oz", 28.349523125),
    ("lb", 453.59237),
    ("t", 1e6),
];

const VOLUME: &[(&str, f64)] = &[
    ("ml", 1e-3),
    ("l", 1.0),
    ("tsp", 0.00492892),
    ("Tbs", 0.0147868),
    ("cup", 0.24),
    ("pnt", 0.473176),
    ("qt", 0.946353),
    ("gal", 3.78541),
];

// month is a twelfth of a Julian year, year is 365.25 days
const TIME: &[(&str, f64)] = &[
    ("ns", 1e-9),
    ("mu", 1e-6),
    ("ms", 1e-3),
    ("s", 1.0),
    ("min", 60.0),
    ("h", 3600.0),
    ("d", 86400.0),
    ("week", 604800.0),
    ("month", 2_629_800.0),
    ("year", 31_557_600.0),
];

// 1024-based, with bits as the base unit
const DIGITAL: &[(&str, f64)] = &[
    ("b", 1.0),
    ("Kb", 1024.0),
    ("Mb", 1_048_576.0),
    ("Gb", 1_073_741_824.0),
    ("Tb", 1_099_511_627_776.0),
    ("B", 8.0),
    ("KB", 8192.0),
    ("MB", 8_388_608.0),
    ("GB", 8_589_934_592.0),
    ("TB", 8_796_093_022_208.0),
];

const FAMILIES: &[&[(&str, f64)]] = &[LENGTH, MASS, VOLUME, TIME, DIGITAL];

const TEMPERATURE: &[&str] = &["C", "F", "K"];

/// Look up a linear unit, returning its base factor and family index
fn linear_unit(symbol: &str) -> Option<(f64, usize)> {
    FAMILIES.iter().enumerate().find_map(|(family, units)| {
        units
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, factor)| (*factor, family))
    })
}

// Temperature is affine, not linear, so it converts through Celsius.

fn to_celsius(unit: &str, value: f64) -> f64 {
    match unit {
        "F" => (value - 32.0) / 1.8,
        "K" => value - 273.15,
        _ => value,
    }
}

fn from_celsius(unit: &str, value: f64) -> f64 {
    match unit {
        "F" => value * 1.8 + 32.0,
        "K" => value + 273.15,
        _ => value,
    }
}

impl UnitConverter for StandardConverter {
    fn convert(&self, value: f64, from: &str, to: &str) -> UnitResult<f64> {
        let from_temp = TEMPERATURE.contains(&from);
        let to_temp = TEMPERATURE.contains(&to);

        if from_temp && to_temp {
            return Ok(from_celsius(to, to_celsius(from, value)));
        }

        match (linear_unit(from), linear_unit(to)) {
            (Some((from_factor, from_family)), Some((to_factor, to_family))) => {
                if from_family == to_family {
                    Ok(value * from_factor / to_factor)
                } else {
                    Err(UnitError::Incompatible {
                        from: from.to_string(),
                        to: to.to_string(),
                    })
                }
            }
            (None, _) if !from_temp => Err(UnitError::UnknownUnit(from.to_string())),
            (_, None) if !to_temp => Err(UnitError::UnknownUnit(to.to_string())),
            // One side is a temperature, the other a known linear unit
            _ => Err(UnitError::Incompatible {
                from: from.to_string(),
                to: to.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_length() {
        let c = StandardConverter;
        assert_eq!(c.convert(100.0, "cm", "m").unwrap(), 1.0);
        assert_eq!(c.convert(1.0, "km", "m").unwrap(), 1000.0);
        let inches = c.convert(1.0, "ft", "in").unwrap();
        assert!((inches - 12.0).abs() < 1e-9, "expected 12, got {inches}");
    }

    #[test]
    fn test_mass() {
        let c = StandardConverter;
        assert_eq!(c.convert(2.0, "kg", "g").unwrap(), 2000.0);
        assert_eq!(c.convert(1.0, "t", "kg").unwrap(), 1000.0);
    }

    #[test]
    fn test_time() {
        let c = StandardConverter;
        assert_eq!(c.convert(2.0, "h", "min").unwrap(), 120.0);
        assert_eq!(c.convert(1.0, "year", "month").unwrap(), 12.0);
        assert_eq!(c.convert(1.0, "week", "d").unwrap(), 7.0);
    }

    #[test]
    fn test_digital_storage() {
        let c = StandardConverter;
        assert_eq!(c.convert(1.0, "GB", "MB").unwrap(), 1024.0);
        assert_eq!(c.convert(1.0, "KB", "b").unwrap(), 8192.0);
        assert_eq!(c.convert(1.0, "B", "b").unwrap(), 8.0);
    }

    #[test]
    fn test_temperature() {
        let c = StandardConverter;
        assert_eq!(c.convert(30.0, "C", "F").unwrap(), 86.0);
        assert_eq!(c.convert(32.0, "F", "C").unwrap(), 0.0);
        assert_eq!(c.convert(0.0, "C", "K").unwrap(), 273.15);
    }

    #[test]
    fn test_unknown_unit() {
        let c = StandardConverter;
        assert_eq!(
            c.convert(1.0, "parsec", "m"),
            Err(UnitError::UnknownUnit("parsec".into()))
        );
        assert_eq!(
            c.convert(1.0, "m", "furlong"),
            Err(UnitError::UnknownUnit("furlong".into()))
        );
    }

    #[test]
    fn test_incompatible_families() {
        let c = StandardConverter;
        assert!(matches!(
            c.convert(1.0, "cm", "kg"),
            Err(UnitError::Incompatible { .. })
        ));
        assert!(matches!(
            c.convert(1.0, "C", "m"),
            Err(UnitError::Incompatible { .. })
        ));
    }

    #[test]
    fn test_identity_conversion() {
        let c = StandardConverter;
        assert_eq!(c.convert(5.0, "m", "m").unwrap(), 5.0);
        assert_eq!(c.convert(21.0, "C", "C").unwrap(), 21.0);
    }
}
