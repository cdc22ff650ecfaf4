//! Cleaning transforms applied to parameter names and units.
//!
//! Coded tables from different centers carry the same quantity under
//! slightly different spellings. These transforms strip the variation that
//! does not change meaning so that reconciliation compares substance, not
//! punctuation.

/// Clean a parameter name for comparison.
///
/// Drops a trailing "(see ...)" cross-reference, replaces '/' with '-',
/// removes '.', ',', and ';', and trims whitespace.
pub fn clean_name(name: &str) -> String {
    let mut name = name;
    if let Some(pos) = name.find("(see").or_else(|| name.find("(See")) {
        if pos > 0 {
            name = &name[..pos];
        }
    }
    name.chars()
        .filter_map(|c| match c {
            '/' => Some('-'),
            '.' | ',' | ';' => None,
            c => Some(c),
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Normalize a unit string.
///
/// Trims whitespace and maps the bare "-" placeholder, used by some tables
/// for "no unit", to the empty string.
pub fn clean_unit(unit: &str) -> String {
    let unit = unit.trim();
    if unit == "-" {
        String::new()
    } else {
        unit.to_string()
    }
}

/// Whether a cleaned unit string denotes no physical dimension.
///
/// Strips parentheses, lowercases, and trims; the result is unitless if it
/// is empty, equals "1", or begins with one of the non-dimensional markers
/// coded tables conventionally use ("numeric", "non-dim", "see ...",
/// "proportion", "code table ...", "0=...").
pub fn is_unitless(unit: &str) -> bool {
    let munge: String = unit.chars().filter(|c| *c != '(' && *c != ')').collect();
    let munge = munge.to_lowercase();
    let munge = munge.trim();
    munge.is_empty()
        || munge.starts_with("numeric")
        || munge.starts_with("non-dim")
        || munge.starts_with("see")
        || munge.starts_with("proportion")
        || munge.starts_with("code")
        || munge.starts_with("0=")
        || munge == "1"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name_punctuation() {
        assert_eq!(clean_name("Temperature."), "Temperature");
        assert_eq!(clean_name("Wind speed, gust"), "Wind speed gust");
        assert_eq!(clean_name("Mixing ratio; total"), "Mixing ratio total");
    }

    #[test]
    fn test_clean_name_slash_becomes_dash() {
        assert_eq!(clean_name("Sensible/latent heat"), "Sensible-latent heat");
    }

    #[test]
    fn test_clean_name_drops_see_reference() {
        assert_eq!(clean_name("Dominant precip type (see note 1)"), "Dominant precip type");
        assert_eq!(clean_name("Cloud cover (See table 4.201)"), "Cloud cover");
    }

    #[test]
    fn test_clean_name_trims() {
        assert_eq!(clean_name("  Temperature  "), "Temperature");
    }

    #[test]
    fn test_clean_unit_dash_placeholder() {
        assert_eq!(clean_unit("-"), "");
        assert_eq!(clean_unit(" - "), "");
        assert_eq!(clean_unit("m/s"), "m/s");
        assert_eq!(clean_unit("  K "), "K");
    }

    #[test]
    fn test_unitless_empty_and_one() {
        assert!(is_unitless(""));
        assert!(is_unitless("1"));
        assert!(is_unitless("(1)"));
        assert!(is_unitless("  "));
    }

    #[test]
    fn test_unitless_markers() {
        assert!(is_unitless("Numeric"));
        assert!(is_unitless("non-dim"));
        assert!(is_unitless("See Table 4.201"));
        assert!(is_unitless("Proportion"));
        assert!(is_unitless("Code table 4.5"));
        assert!(is_unitless("0=clear, 1=cloudy"));
    }

    #[test]
    fn test_dimensional_units_are_not_unitless() {
        assert!(!is_unitless("kg/kg"));
        assert!(!is_unitless("m/s"));
        assert!(!is_unitless("K"));
        assert!(!is_unitless("%"));
    }
}
