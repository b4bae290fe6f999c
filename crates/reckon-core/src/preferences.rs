//! Output formatting preferences

/// Formatting preferences supplied by the host application.
///
/// Consumed only when rendering results; evaluation itself never looks at
/// them. The separators override any host locale defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Preferences {
    /// Fractional digits used when a result is not a whole number
    pub decimal_places: u32,
    /// Character used as the decimal point
    pub decimal_separator: char,
    /// Character used to group integer digits in threes
    pub thousands_separator: char,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            decimal_places: 2,
            decimal_separator: '.',
            thousands_separator: ',',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences() {
        let prefs = Preferences::default();
        assert_eq!(prefs.decimal_places, 2);
        assert_eq!(prefs.decimal_separator, '.');
        assert_eq!(prefs.thousands_separator, ',');
    }
}
