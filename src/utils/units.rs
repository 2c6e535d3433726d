//! Unit Normalization
//!
//! Converts raw nutrient amounts from the unit a lookup service reports them in
//! to milligrams, the single unit used by every reference daily amount.
//!
//! Conversions:
//! - mg → unchanged
//! - µg → / 1000
//! - g  → × 1000
//! - IU → × 0.025 (IU → µg) then / 1000 (µg → mg)
//! - anything else → unchanged (pass-through, never an error)

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Micrograms per International Unit.
///
/// Applied to every nutrient alike. Real IU ratios differ per nutrient
/// (vitamin D and vitamin A are not interchangeable), so values converted
/// from IU are approximate.
pub const IU_TO_MICROGRAMS: f64 = 0.025;

/// Measurement unit of a nutrient amount
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Unit {
    Milligram,
    Microgram,
    Gram,
    InternationalUnit,
    /// Unrecognised unit label, kept verbatim
    Other(String),
}

impl Unit {
    /// Canonical label for this unit
    pub fn as_str(&self) -> &str {
        match self {
            Unit::Milligram => "mg",
            Unit::Microgram => "µg",
            Unit::Gram => "g",
            Unit::InternationalUnit => "IU",
            Unit::Other(label) => label,
        }
    }

    /// Convert `amount` in this unit to milligrams
    pub fn to_milligrams(&self, amount: f64) -> f64 {
        match self {
            Unit::Milligram => amount,
            Unit::Microgram => amount / 1000.0,
            Unit::Gram => amount * 1000.0,
            Unit::InternationalUnit => iu_to_milligrams(amount),
            Unit::Other(_) => amount,
        }
    }
}

impl FromStr for Unit {
    type Err = Infallible;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let unit = match label.trim() {
            "mg" => Unit::Milligram,
            "µg" | "μg" | "ug" | "mcg" => Unit::Microgram,
            "g" => Unit::Gram,
            "IU" => Unit::InternationalUnit,
            other => Unit::Other(other.to_string()),
        };
        Ok(unit)
    }
}

impl From<String> for Unit {
    fn from(label: String) -> Self {
        match label.parse() {
            Ok(unit) => unit,
            Err(never) => match never {},
        }
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.as_str().to_string()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize `amount` expressed in `unit` to milligrams
pub fn normalize_to_mg(amount: f64, unit: &Unit) -> f64 {
    unit.to_milligrams(amount)
}

fn iu_to_milligrams(amount: f64) -> f64 {
    let micrograms = amount * IU_TO_MICROGRAMS;
    micrograms / 1000.0
}
