//! Nutrient pipeline stages
//!
//! Each stage is a pure function over in-memory maps:
//! percentages (per ingredient) → aggregated totals → deficiency list.

pub mod percentages;
pub mod aggregation;
pub mod deficiencies;

pub use percentages::{calculate_percentages, calculate_ingredient_percentages};
pub use aggregation::{aggregate_totals, merge_into_totals, TotalsUpdate, MAX_PERCENTAGE};
pub use deficiencies::{detect_deficiencies, LOW_THRESHOLD};

use crate::utils::Unit;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw amount of one nutrient as reported by a nutrition lookup
///
/// Without an explicit unit the reference table's unit for the nutrient applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "AmountRepr")]
pub struct NutrientAmount {
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
}

impl NutrientAmount {
    pub fn new(amount: f64, unit: Unit) -> Self {
        Self { amount, unit: Some(unit) }
    }
}

impl From<f64> for NutrientAmount {
    fn from(amount: f64) -> Self {
        Self { amount, unit: None }
    }
}

/// Accepts either a bare number or `{ "amount": .., "unit": .. }`
#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Bare(f64),
    Full {
        amount: f64,
        #[serde(default)]
        unit: Option<Unit>,
    },
}

impl From<AmountRepr> for NutrientAmount {
    fn from(repr: AmountRepr) -> Self {
        match repr {
            AmountRepr::Bare(amount) => Self { amount, unit: None },
            AmountRepr::Full { amount, unit } => Self { amount, unit },
        }
    }
}

/// Nutrient name → raw amount, for one ingredient
pub type IngredientNutrients = BTreeMap<String, NutrientAmount>;

/// Ingredient → nutrient amounts (nutrition lookup output)
pub type NutrientData = BTreeMap<String, IngredientNutrients>;

/// Nutrient name → percentage of the reference daily amount
pub type PercentageMap = BTreeMap<String, f64>;

/// Ingredient → percentage map
pub type IngredientPercentages = BTreeMap<String, PercentageMap>;
