//! Coded parameter values.
//!
//! A [`Parameter`] is one entry of a coded-parameter table: a quantity
//! identified by the (discipline, category, number) code triple, carrying
//! its display name, physical unit, abbreviation, and optional fill/missing
//! sentinels.

use std::cmp::Ordering;
use std::fmt;

use crate::clean::clean_unit;

/// Lookup key for a parameter: (discipline, category, number).
pub type ParamId = (u8, u8, u8);

/// A single coded quantity in a parameter table.
///
/// Immutable after construction. Identity and ordering are determined by
/// the code triple alone; name and unit carry display/comparison metadata.
///
/// The two sentinels are encoded differently and must stay distinct:
/// `fill` is `None` when not specified, while `missing` uses NaN as its
/// "not specified" value.
#[derive(Debug, Clone)]
pub struct Parameter {
    pub discipline: u8,
    pub category: u8,
    pub number: u8,
    /// Display name, trimmed at construction and never re-trimmed.
    pub name: String,
    /// Physical unit, normalized at construction.
    pub unit: String,
    pub abbrev: String,
    pub description: String,
    /// Fill sentinel value; `None` means not specified.
    pub fill: Option<f32>,
    /// Missing sentinel value; NaN means not specified.
    pub missing: f32,
}

impl Parameter {
    /// Create a parameter with explicit fill and missing sentinels.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        discipline: u8,
        category: u8,
        number: u8,
        name: &str,
        unit: &str,
        abbrev: &str,
        description: &str,
        fill: Option<f32>,
        missing: f32,
    ) -> Self {
        Self {
            discipline,
            category,
            number,
            name: name.trim().to_string(),
            unit: clean_unit(unit),
            abbrev: abbrev.to_string(),
            description: description.to_string(),
            fill,
            missing,
        }
    }

    /// Create a parameter with no fill value and a NaN missing sentinel.
    pub fn with_defaults(
        discipline: u8,
        category: u8,
        number: u8,
        name: &str,
        unit: &str,
        abbrev: &str,
        description: &str,
    ) -> Self {
        Self::new(
            discipline,
            category,
            number,
            name,
            unit,
            abbrev,
            description,
            None,
            f32::NAN,
        )
    }

    /// Derive a parameter from `source` with a new name and unit.
    ///
    /// Copies the code triple, description, and abbreviation; the new name
    /// and unit go through the same trimming/normalization as any other
    /// constructor. Fill and missing are reset to their unspecified
    /// sentinels, not inherited from `source`.
    pub fn renamed(source: &Parameter, name: &str, unit: &str) -> Self {
        Self {
            discipline: source.discipline,
            category: source.category,
            number: source.number,
            name: name.trim().to_string(),
            unit: clean_unit(unit),
            abbrev: source.abbrev.clone(),
            description: source.description.clone(),
            fill: None,
            missing: f32::NAN,
        }
    }

    /// The code triple identifying this parameter within a table.
    pub fn key(&self) -> ParamId {
        (self.discipline, self.category, self.number)
    }

    /// Identity string, `"{discipline}.{category}.{number}"`.
    pub fn id(&self) -> String {
        format!("{}.{}.{}", self.discipline, self.category, self.number)
    }
}

impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Parameter {}

impl Ord for Parameter {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Parameter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} \"{}\" [{}] {} - {}",
            self.id(),
            self.name,
            self.unit,
            self.abbrev,
            self.description
        )
    }
}
