//! Deficiency Detection
//!
//! Flags every reference nutrient whose aggregated percentage is missing or at
//! or below [`LOW_THRESHOLD`]. Iteration covers the whole reference table, not
//! just the nutrients present in the totals, and output follows table order.

use super::PercentageMap;
use crate::reference::NutrientReferenceTable;

/// Percentage at or below which a nutrient counts as deficient
pub const LOW_THRESHOLD: f64 = 3.5;

/// Reference nutrients that are absent from `totals` or at/below the threshold
pub fn detect_deficiencies(
    totals: &PercentageMap,
    reference: &NutrientReferenceTable,
) -> Vec<String> {
    reference
        .names()
        .filter(|name| match totals.get(*name) {
            Some(&percentage) => percentage <= LOW_THRESHOLD,
            None => true,
        })
        .map(str::to_string)
        .collect()
}
