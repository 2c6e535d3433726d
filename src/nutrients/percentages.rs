//! RDA Percentage Calculator
//!
//! Converts raw nutrient amounts to percentages of the reference daily amount,
//! per ingredient:
//!
//! 1. Look up the nutrient's reference amount and unit
//! 2. Normalize the raw amount to milligrams
//! 3. percentage = normalized / rda × 100
//!
//! Nutrients missing from the reference table score 0% rather than failing.
//! No capping happens here: one ingredient can legitimately supply more than
//! 100% of a micronutrient.

use super::{IngredientNutrients, IngredientPercentages, NutrientData, PercentageMap};
use crate::reference::NutrientReferenceTable;

/// Percentages of RDA for every ingredient in `nutrient_data`
pub fn calculate_percentages(
    nutrient_data: &NutrientData,
    reference: &NutrientReferenceTable,
) -> IngredientPercentages {
    nutrient_data
        .iter()
        .map(|(ingredient, nutrients)| {
            (ingredient.clone(), calculate_ingredient_percentages(nutrients, reference))
        })
        .collect()
}

/// Percentages of RDA for a single ingredient
///
/// Every input nutrient appears in the output, at 0.0 when it is not tracked.
pub fn calculate_ingredient_percentages(
    nutrients: &IngredientNutrients,
    reference: &NutrientReferenceTable,
) -> PercentageMap {
    let mut percentages = PercentageMap::new();

    for (nutrient, amount) in nutrients {
        let percentage = match reference.get(nutrient) {
            Some(entry) => {
                let unit = amount.unit.as_ref().unwrap_or(&entry.unit);
                let normalized = unit.to_milligrams(amount.amount);
                (normalized / entry.rda) * 100.0
            }
            None => {
                tracing::debug!("Untracked nutrient '{}' scored as 0%", nutrient);
                0.0
            }
        };
        percentages.insert(nutrient.clone(), percentage);
    }

    percentages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrients::NutrientAmount;
    use crate::reference::NutrientReference;
    use crate::utils::Unit;
    use approx::assert_relative_eq;

    fn ingredient(pairs: &[(&str, f64)]) -> IngredientNutrients {
        pairs
            .iter()
            .map(|&(name, amount)| (name.to_string(), NutrientAmount::from(amount)))
            .collect()
    }

    #[test]
    fn test_vitamin_c_half_rda() {
        let reference = NutrientReferenceTable::standard();
        let result = calculate_ingredient_percentages(&ingredient(&[("Vitamin C", 45.0)]), &reference);
        assert_relative_eq!(result["Vitamin C"], 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_table_unit_applied_to_raw_amounts() {
        let reference = NutrientReferenceTable::standard();
        // Histidine arrives in grams: 1 g = 1000 mg of a 10000 mg reference → 10%
        // Vitamin B12 arrives in µg: 0.03 µg = 0.00003 mg of 0.06 mg → 0.05%
        let result = calculate_ingredient_percentages(
            &ingredient(&[("Histidine", 1.0), ("Vitamin B12", 0.03)]),
            &reference,
        );
        assert_relative_eq!(result["Histidine"], 10.0, epsilon = 1e-9);
        assert_relative_eq!(result["Vitamin B12"], 0.05, epsilon = 1e-9);
    }

    #[test]
    fn test_explicit_unit_overrides_table_unit() {
        let reference = NutrientReferenceTable::standard();
        let mut nutrients = IngredientNutrients::new();
        nutrients.insert("Vitamin C".to_string(), NutrientAmount::new(0.045, Unit::Gram));

        let result = calculate_ingredient_percentages(&nutrients, &reference);
        assert_relative_eq!(result["Vitamin C"], 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unknown_nutrient_is_zero_not_dropped() {
        let reference = NutrientReferenceTable::standard();
        let result = calculate_ingredient_percentages(&ingredient(&[("Fiber", 12.0)]), &reference);
        assert_eq!(result.len(), 1);
        assert_eq!(result["Fiber"], 0.0);
    }

    #[test]
    fn test_no_capping_per_ingredient() {
        let reference = NutrientReferenceTable::new(vec![NutrientReference {
            name: "Vitamin C".to_string(),
            rda: 90.0,
            unit: Unit::Milligram,
        }])
        .unwrap();

        let mut data = NutrientData::new();
        data.insert("orange".to_string(), ingredient(&[("Vitamin C", 180.0)]));
        data.insert("water".to_string(), IngredientNutrients::new());

        let result = calculate_percentages(&data, &reference);
        assert_relative_eq!(result["orange"]["Vitamin C"], 200.0, epsilon = 1e-9);
        assert!(result["water"].is_empty());
    }
}
