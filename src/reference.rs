//! Nutrient Reference Table
//!
//! Reference daily amounts (RDA) for every tracked nutrient, together with the
//! unit the nutrition lookup reports that nutrient in. The table is an ordered
//! list: its order is the nutrient vocabulary used for deficiency lists.
//!
//! Reference amounts are stored in milligrams. The unit column describes raw
//! lookup values and drives conversion before the percentage is taken.
//!
//! Tables are plain immutable values. Build one with [`NutrientReferenceTable::standard`]
//! or load an alternative from JSON and share it behind an `Arc`.

use crate::error::ReferenceError;
use crate::utils::Unit;
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One row of the reference table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientReference {
    pub name: String,
    /// Reference daily amount in milligrams
    pub rda: f64,
    /// Unit raw amounts for this nutrient arrive in
    pub unit: Unit,
}

/// Ordered, immutable table of reference daily amounts
#[derive(Debug, Clone)]
pub struct NutrientReferenceTable {
    entries: Vec<NutrientReference>,
    index: FxHashMap<String, usize>,
}

impl NutrientReferenceTable {
    /// Build a table from entries, keeping their order
    pub fn new(entries: Vec<NutrientReference>) -> Result<Self, ReferenceError> {
        if entries.is_empty() {
            return Err(ReferenceError::Empty);
        }

        let mut index = FxHashMap::default();
        for (i, entry) in entries.iter().enumerate() {
            if !(entry.rda > 0.0) {
                return Err(ReferenceError::InvalidAmount {
                    name: entry.name.clone(),
                    rda: entry.rda,
                });
            }
            if index.insert(entry.name.clone(), i).is_some() {
                return Err(ReferenceError::DuplicateNutrient(entry.name.clone()));
            }
        }

        Ok(Self { entries, index })
    }

    /// Load a table from a JSON array of `{ "name", "rda", "unit" }` objects
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read reference table: {:?}", path))?;

        let entries: Vec<NutrientReference> = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse reference table JSON")?;

        let table = Self::new(entries)
            .with_context(|| format!("Invalid reference table: {:?}", path))?;

        tracing::info!("Loaded reference table with {} nutrients from {:?}", table.len(), path);
        Ok(table)
    }

    /// The standard table: ions, essential amino acids, essential fatty acids,
    /// vitamins and choline (36 nutrients)
    pub fn standard() -> Self {
        let entries = STANDARD_TABLE
            .iter()
            .map(|&(name, rda, unit)| NutrientReference {
                name: name.to_string(),
                rda,
                unit: Unit::from(unit.to_string()),
            })
            .collect::<Vec<_>>();

        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.name.clone(), i))
            .collect();

        Self { entries, index }
    }

    /// Look up a nutrient by name
    pub fn get(&self, name: &str) -> Option<&NutrientReference> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Entries in table order
    pub fn entries(&self) -> &[NutrientReference] {
        &self.entries
    }

    /// Nutrient names in table order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Nutrient names in table order, owned
    pub fn vocabulary(&self) -> Vec<String> {
        self.names().map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NutrientReferenceTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// (name, reference daily amount, unit of raw lookup values)
const STANDARD_TABLE: &[(&str, f64, &str)] = &[
    // Ions
    ("Potassium", 4700.0, "mg"),
    ("Sodium", 2300.0, "mg"),
    ("Calcium", 1000.0, "mg"),
    ("Phosphorus", 700.0, "mg"),
    ("Magnesium", 400.0, "mg"),
    ("Iron", 10.0, "mg"),
    ("Zinc", 10.0, "mg"),
    ("Manganese", 2.3, "mg"),
    ("Copper", 0.9, "mg"),
    ("Selenium", 0.4, "µg"),
    // Essential amino acids
    ("Histidine", 10000.0, "g"),
    ("Isoleucine", 19000.0, "g"),
    ("Leucine", 39000.0, "g"),
    ("Lysine", 30000.0, "g"),
    ("Methionine", 14000.0, "g"),
    ("Phenylalanine", 25000.0, "g"),
    ("Threonine", 15000.0, "g"),
    ("Tryptophan", 5000.0, "g"),
    ("Valine", 24000.0, "g"),
    // Essential fatty acids
    ("Alpha-Linolenic Acid", 1.2, "mg"),
    ("Linoleic Acid", 1.0, "mg"),
    ("EPA", 5000.0, "g"),
    ("DHA", 3750.0, "g"),
    // Vitamins
    ("Vitamin A", 0.9, "µg"),
    ("Vitamin B1", 1.2, "mg"),
    ("Vitamin B2", 1.3, "mg"),
    ("Vitamin B3", 16.0, "mg"),
    ("Vitamin B5", 5.0, "mg"),
    ("Vitamin B6", 1.5, "mg"),
    ("Vitamin B9", 0.4, "µg"),
    ("Vitamin B12", 0.06, "µg"),
    ("Vitamin C", 90.0, "mg"),
    ("Vitamin D", 2.0, "µg"),
    ("Vitamin E", 15.0, "mg"),
    ("Vitamin K", 0.18, "µg"),
    // Other
    ("Choline", 550.0, "mg"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_order_and_size() {
        let table = NutrientReferenceTable::standard();
        assert_eq!(table.len(), 36);

        let names: Vec<&str> = table.names().collect();
        assert_eq!(names.first(), Some(&"Potassium"));
        assert_eq!(names.last(), Some(&"Choline"));

        let vitamin_c = table.get("Vitamin C").unwrap();
        assert_eq!(vitamin_c.rda, 90.0);
        assert_eq!(vitamin_c.unit, Unit::Milligram);
        assert_eq!(table.get("Histidine").unwrap().unit, Unit::Gram);
        assert!(table.get("Fiber").is_none());
    }

    #[test]
    fn test_rejects_duplicates_and_bad_amounts() {
        let entry = |name: &str, rda: f64| NutrientReference {
            name: name.to_string(),
            rda,
            unit: Unit::Milligram,
        };

        assert!(matches!(
            NutrientReferenceTable::new(vec![entry("Iron", 10.0), entry("Iron", 8.0)]),
            Err(ReferenceError::DuplicateNutrient(name)) if name == "Iron"
        ));
        assert!(matches!(
            NutrientReferenceTable::new(vec![entry("Iron", 0.0)]),
            Err(ReferenceError::InvalidAmount { .. })
        ));
        assert!(matches!(NutrientReferenceTable::new(vec![]), Err(ReferenceError::Empty)));
    }

    #[test]
    fn test_load_from_json_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reference.json");
        fs::write(
            &path,
            r#"[
                {"name": "Zinc", "rda": 11.0, "unit": "mg"},
                {"name": "Vitamin D", "rda": 0.015, "unit": "IU"}
            ]"#,
        )
        .unwrap();

        let table = NutrientReferenceTable::load(&path).unwrap();
        assert_eq!(table.vocabulary(), vec!["Zinc".to_string(), "Vitamin D".to_string()]);
        assert_eq!(table.get("Vitamin D").unwrap().unit, Unit::InternationalUnit);
    }
}
