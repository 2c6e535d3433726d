//! Nutrient Aggregation
//!
//! Sums percentages across the ingredients of a meal and caps each total at
//! 100%. Capping is a clamp, not a rescale: a meal supplying 300% of a nutrient
//! is indistinguishable from one supplying exactly 100%.

use super::{IngredientPercentages, PercentageMap};
use serde::{Deserialize, Serialize};

/// Upper bound of any aggregated percentage
pub const MAX_PERCENTAGE: f64 = 100.0;

/// Sum percentages per nutrient across all ingredients, capped at 100
pub fn aggregate_totals(percentages: &IngredientPercentages) -> PercentageMap {
    let mut totals = PercentageMap::new();

    for nutrients in percentages.values() {
        for (nutrient, percentage) in nutrients {
            *totals.entry(nutrient.clone()).or_insert(0.0) += percentage;
        }
    }

    for total in totals.values_mut() {
        if *total > MAX_PERCENTAGE {
            *total = MAX_PERCENTAGE;
        }
    }

    totals
}

/// Totals after adding one more food to a meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsUpdate {
    pub nutrients: PercentageMap,
    /// Nutrients the added food contributed to
    pub changed_nutrients: Vec<String>,
}

/// Add one food's percentages onto existing meal totals
///
/// Works on a copy of `current`; each nutrient is capped at 100 after the
/// addition. Nutrients only present in `current` are carried over untouched.
pub fn merge_into_totals(current: &PercentageMap, food: &PercentageMap) -> TotalsUpdate {
    let mut nutrients = current.clone();

    for (nutrient, percentage) in food {
        let total = nutrients.entry(nutrient.clone()).or_insert(0.0);
        *total += percentage;
        if *total > MAX_PERCENTAGE {
            *total = MAX_PERCENTAGE;
        }
    }

    TotalsUpdate {
        nutrients,
        changed_nutrients: food.keys().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn meal(ingredients: Vec<(&str, Vec<(&str, f64)>)>) -> IngredientPercentages {
        ingredients
            .into_iter()
            .map(|(name, nutrients)| {
                let map = nutrients
                    .into_iter()
                    .map(|(n, p)| (n.to_string(), p))
                    .collect::<PercentageMap>();
                (name.to_string(), map)
            })
            .collect()
    }

    #[test]
    fn test_sum_and_cap() {
        let totals = aggregate_totals(&meal(vec![
            ("kiwi", vec![("Vitamin C", 80.0), ("Potassium", 5.0)]),
            ("pepper", vec![("Vitamin C", 80.0)]),
        ]));

        assert_relative_eq!(totals["Vitamin C"], 100.0);
        assert_relative_eq!(totals["Potassium"], 5.0);
    }

    #[test]
    fn test_vitamin_c_boundary_scenario() {
        let half = || vec![("Vitamin C", 50.0)];
        let two = aggregate_totals(&meal(vec![("a", half()), ("b", half())]));
        assert_eq!(two["Vitamin C"], 100.0);

        let three = aggregate_totals(&meal(vec![("a", half()), ("b", half()), ("c", half())]));
        assert_eq!(three["Vitamin C"], 100.0);
    }

    #[test]
    fn test_totals_never_exceed_cap() {
        let totals = aggregate_totals(&meal(vec![
            ("a", vec![("Iron", 250.0), ("Zinc", 99.0)]),
            ("b", vec![("Iron", 1e6), ("Zinc", 0.5)]),
        ]));
        assert!(totals.values().all(|&p| p <= MAX_PERCENTAGE));
        assert_relative_eq!(totals["Zinc"], 99.5);
    }

    #[test]
    fn test_empty_meal() {
        assert!(aggregate_totals(&IngredientPercentages::new()).is_empty());
    }

    #[test]
    fn test_merge_into_totals() {
        let mut current = PercentageMap::new();
        current.insert("Calcium".to_string(), 60.0);
        current.insert("Iron".to_string(), 10.0);

        let mut food = PercentageMap::new();
        food.insert("Calcium".to_string(), 55.0);
        food.insert("Vitamin K".to_string(), 12.0);

        let update = merge_into_totals(&current, &food);
        assert_relative_eq!(update.nutrients["Calcium"], 100.0);
        assert_relative_eq!(update.nutrients["Iron"], 10.0);
        assert_relative_eq!(update.nutrients["Vitamin K"], 12.0);
        assert_eq!(update.changed_nutrients, vec!["Calcium".to_string(), "Vitamin K".to_string()]);

        // Input totals are untouched
        assert_relative_eq!(current["Calcium"], 60.0);
    }
}
