//! Unit compatibility oracle.
//!
//! Reconciliation only needs one answer from the unit system: are two unit
//! strings dimensionally compatible. The oracle sits behind a trait so the
//! reconciler can be driven by a scripted implementation in tests, or by a
//! different unit package entirely.

use std::collections::HashMap;

use crate::error::UnitParseError;

/// Answers whether two unit strings are dimensionally compatible.
pub trait UnitSystem: Send + Sync {
    /// Whether `a` and `b` denote quantities of the same dimension.
    ///
    /// Fails with [`UnitParseError`] when either string cannot be parsed
    /// as a physical unit.
    fn is_compatible(&self, a: &str, b: &str) -> Result<bool, UnitParseError>;
}

/// Exponents of the SI base dimensions a unit resolves to.
///
/// Scale factors are irrelevant for compatibility, so only the dimension
/// vector is tracked: km/h and m/s resolve to the same vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Dimension {
    length: i16,
    mass: i16,
    time: i16,
    temperature: i16,
}

impl Dimension {
    const fn new(length: i16, mass: i16, time: i16, temperature: i16) -> Self {
        Self {
            length,
            mass,
            time,
            temperature,
        }
    }

    fn accumulate(&mut self, other: Dimension, exponent: i16) {
        self.length += other.length * exponent;
        self.mass += other.mass * exponent;
        self.time += other.time * exponent;
        self.temperature += other.temperature * exponent;
    }
}

const DIMENSIONLESS: Dimension = Dimension::new(0, 0, 0, 0);
const LENGTH: Dimension = Dimension::new(1, 0, 0, 0);
const MASS: Dimension = Dimension::new(0, 1, 0, 0);
const TIME: Dimension = Dimension::new(0, 0, 1, 0);
const TEMPERATURE: Dimension = Dimension::new(0, 0, 0, 1);
const SPEED: Dimension = Dimension::new(1, 0, -1, 0);
const PRESSURE: Dimension = Dimension::new(-1, 1, -2, 0);
const FORCE: Dimension = Dimension::new(1, 1, -2, 0);
const ENERGY: Dimension = Dimension::new(2, 1, -2, 0);
const POWER: Dimension = Dimension::new(2, 1, -3, 0);
const FREQUENCY: Dimension = Dimension::new(0, 0, -1, 0);

/// SI prefixes. Only the symbol matters; prefixes change scale, not
/// dimension, so stripping one leaves the dimension vector untouched.
const PREFIXES: &[&str] = &[
    "da", "Y", "Z", "E", "P", "T", "G", "M", "k", "h", "d", "c", "m", "u", "µ", "n", "p", "f",
];

/// Dimensional analysis over the meteorological unit vocabulary.
///
/// Parses products, quotients, and integer powers of the catalog units
/// (with SI prefixes) and compares the resulting dimension vectors. This
/// covers the unit strings that appear in coded parameter tables; anything
/// outside the vocabulary fails with [`UnitParseError`], which the
/// reconciler records as a mismatch rather than propagating.
#[derive(Debug)]
pub struct SiUnitSystem {
    catalog: HashMap<&'static str, Dimension>,
}

impl SiUnitSystem {
    pub fn new() -> Self {
        let mut catalog = HashMap::new();
        for name in ["m", "meter", "meters", "metre", "metres", "gpm"] {
            catalog.insert(name, LENGTH);
        }
        for name in ["g", "gram", "grams"] {
            catalog.insert(name, MASS);
        }
        for name in [
            "s", "sec", "second", "seconds", "min", "minute", "minutes", "h", "hr", "hour",
            "hours", "day", "days",
        ] {
            catalog.insert(name, TIME);
        }
        for name in ["K", "kelvin", "Celsius", "celsius", "degC", "deg_C", "°C"] {
            catalog.insert(name, TEMPERATURE);
        }
        for name in ["Pa", "pascal", "pascals", "bar", "mb", "millibar", "millibars", "atm"] {
            catalog.insert(name, PRESSURE);
        }
        for name in ["N", "newton", "newtons"] {
            catalog.insert(name, FORCE);
        }
        for name in ["J", "joule", "joules"] {
            catalog.insert(name, ENERGY);
        }
        for name in ["W", "watt", "watts"] {
            catalog.insert(name, POWER);
        }
        for name in ["knot", "knots", "kt", "kts"] {
            catalog.insert(name, SPEED);
        }
        for name in ["Hz", "hertz"] {
            catalog.insert(name, FREQUENCY);
        }
        for name in ["%", "percent", "degree", "degrees", "deg", "rad", "radian", "radians"] {
            catalog.insert(name, DIMENSIONLESS);
        }
        Self { catalog }
    }

    fn lookup(&self, token: &str) -> Option<Dimension> {
        if let Some(&dim) = self.catalog.get(token) {
            return Some(dim);
        }
        let lower = token.to_lowercase();
        if let Some(&dim) = self.catalog.get(lower.as_str()) {
            return Some(dim);
        }
        // SI prefix + catalog unit, e.g. "kg", "hPa", "mm", "cm2"
        for prefix in PREFIXES {
            if let Some(rest) = token.strip_prefix(prefix) {
                if !rest.is_empty() {
                    if let Some(&dim) = self.catalog.get(rest) {
                        return Some(dim);
                    }
                }
            }
        }
        None
    }

    fn parse(&self, unit: &str) -> Result<Dimension, UnitParseError> {
        let mut dim = Dimension::default();
        for (i, part) in unit.split('/').enumerate() {
            // Everything after the first '/' divides.
            let sign: i16 = if i == 0 { 1 } else { -1 };
            for token in
                part.split(|c: char| c.is_whitespace() || c == '.' || c == '·' || c == '*')
            {
                if token.is_empty() {
                    continue;
                }
                let (base, exponent) = split_exponent(token);
                if base.is_empty() {
                    // A bare numeric factor only changes scale.
                    continue;
                }
                let factor = self
                    .lookup(base)
                    .ok_or_else(|| UnitParseError(unit.to_string()))?;
                dim.accumulate(factor, exponent * sign);
            }
        }
        Ok(dim)
    }
}

impl Default for SiUnitSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitSystem for SiUnitSystem {
    fn is_compatible(&self, a: &str, b: &str) -> Result<bool, UnitParseError> {
        let da = self.parse(a)?;
        let db = self.parse(b)?;
        Ok(da == db)
    }
}

/// Split a factor token into its base symbol and integer exponent:
/// "m2" -> ("m", 2), "s-1" -> ("s", -1), "m^2" -> ("m", 2), "Pa" -> ("Pa", 1).
fn split_exponent(token: &str) -> (&str, i16) {
    let digits_at = token
        .rfind(|c: char| !c.is_ascii_digit())
        .map(|p| p + token[p..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(0);
    let (mut base, digits) = token.split_at(digits_at);
    if digits.is_empty() {
        return (base.trim_end_matches('^'), 1);
    }
    let mut exponent: i16 = digits.parse().unwrap_or(1);
    if let Some(stripped) = base.strip_suffix('-') {
        base = stripped;
        exponent = -exponent;
    } else if let Some(stripped) = base.strip_suffix('+') {
        base = stripped;
    }
    (base.trim_end_matches('^'), exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_units_compatible() {
        let units = SiUnitSystem::new();
        assert!(units.is_compatible("m/s", "knots").unwrap());
        assert!(units.is_compatible("km/h", "m/s").unwrap());
        assert!(units.is_compatible("m s-1", "kt").unwrap());
    }

    #[test]
    fn test_incompatible_dimensions() {
        let units = SiUnitSystem::new();
        assert!(!units.is_compatible("Celsius", "kg").unwrap());
        assert!(!units.is_compatible("m", "s").unwrap());
        assert!(!units.is_compatible("Pa", "K").unwrap());
    }

    #[test]
    fn test_pressure_units_compatible() {
        let units = SiUnitSystem::new();
        assert!(units.is_compatible("hPa", "Pa").unwrap());
        assert!(units.is_compatible("mb", "hPa").unwrap());
        assert!(units.is_compatible("Pa", "N/m2").unwrap());
    }

    #[test]
    fn test_compound_units() {
        let units = SiUnitSystem::new();
        assert!(units.is_compatible("kg/m2", "kg m-2").unwrap());
        assert!(units.is_compatible("J/kg", "m2/s2").unwrap());
        assert!(units.is_compatible("W/m2", "J/s/m2").unwrap());
        assert!(units.is_compatible("kg/kg", "g/g").unwrap());
    }

    #[test]
    fn test_temperature_spellings() {
        let units = SiUnitSystem::new();
        assert!(units.is_compatible("K", "Celsius").unwrap());
        assert!(units.is_compatible("Kelvin", "degC").unwrap());
    }

    #[test]
    fn test_caret_exponent() {
        let units = SiUnitSystem::new();
        assert!(units.is_compatible("m^2", "m2").unwrap());
    }

    #[test]
    fn test_unknown_token_fails_to_parse() {
        let units = SiUnitSystem::new();
        let err = units.is_compatible("dBZ", "K").unwrap_err();
        assert_eq!(err, UnitParseError("dBZ".to_string()));
        assert!(units.is_compatible("K", "furlongs").is_err());
    }

    #[test]
    fn test_percent_is_dimensionless() {
        let units = SiUnitSystem::new();
        assert!(units.is_compatible("%", "percent").unwrap());
        assert!(!units.is_compatible("%", "K").unwrap());
    }
}
