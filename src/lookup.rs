//! Nutrient Lookup
//!
//! The nutrition database lives behind [`NutrientLookup`]. Responses report
//! nutrients as `(attr_id, value)` pairs; an [`AttributeMapping`] translates
//! them into the canonical nutrient names used by the reference table.
//!
//! Mappings are configuration. Conflicting mappings (two nutrients on one
//! attribute id) are applied as given.

use crate::nutrients::{IngredientNutrients, NutrientAmount, NutrientData};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Source of raw nutrient amounts for one ingredient
pub trait NutrientLookup: Send + Sync {
    fn lookup(&self, ingredient: &str) -> Result<IngredientNutrients>;
}

/// One `(attr_id, value)` entry of a lookup response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullNutrient {
    pub attr_id: u32,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupFood {
    pub food_name: String,
    #[serde(default)]
    pub serving_qty: f64,
    #[serde(default)]
    pub serving_unit: String,
    #[serde(default)]
    pub full_nutrients: Vec<FullNutrient>,
}

/// Lookup response body
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub foods: Vec<LookupFood>,
}

/// Canonical nutrient → lookup attribute id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeMapping {
    entries: Vec<(String, u32)>,
}

impl AttributeMapping {
    pub fn new(entries: Vec<(String, u32)>) -> Self {
        Self { entries }
    }

    /// Load a mapping from a JSON array of `["Nutrient", attr_id]` pairs
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read attribute mapping: {:?}", path))?;

        let entries: Vec<(String, u32)> = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse attribute mapping JSON")?;

        Ok(Self { entries })
    }

    /// Nutritionix `full_nutrients` attribute ids
    pub fn nutritionix() -> Self {
        let entries = NUTRITIONIX_ATTRIBUTES
            .iter()
            .map(|&(name, id)| (name.to_string(), id))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, u32)] {
        &self.entries
    }

    /// Nutrient amounts of the first food in `response`
    ///
    /// Each mapped nutrient takes the first entry with its attribute id.
    /// Amounts carry no unit: the reference table's unit applies.
    pub fn nutrients_from_response(&self, response: &LookupResponse) -> IngredientNutrients {
        let Some(food) = response.foods.first() else {
            return IngredientNutrients::new();
        };

        self.entries
            .iter()
            .filter_map(|(nutrient, attr_id)| {
                food.full_nutrients
                    .iter()
                    .find(|entry| entry.attr_id == *attr_id)
                    .map(|entry| (nutrient.clone(), NutrientAmount::from(entry.value)))
            })
            .collect()
    }
}

impl Default for AttributeMapping {
    fn default() -> Self {
        Self::nutritionix()
    }
}

/// Look up every ingredient, failing on the first lookup error
pub fn fetch_nutrient_data(lookup: &dyn NutrientLookup, ingredients: &[String]) -> Result<NutrientData> {
    let mut data = NutrientData::new();

    for ingredient in ingredients {
        let nutrients = lookup
            .lookup(ingredient)
            .with_context(|| format!("Error fetching nutrient data for {}", ingredient))?;

        tracing::debug!("Nutrient data for {}: {} nutrients", ingredient, nutrients.len());
        data.insert(ingredient.clone(), nutrients);
    }

    Ok(data)
}

const NUTRITIONIX_ATTRIBUTES: &[(&str, u32)] = &[
    // Ions (mg, selenium µg)
    ("Potassium", 306),
    ("Sodium", 307),
    ("Calcium", 301),
    ("Phosphorus", 305),
    ("Magnesium", 304),
    ("Iron", 303),
    ("Zinc", 309),
    ("Manganese", 315),
    ("Copper", 312),
    ("Selenium", 317),
    // Amino acids (g)
    ("Histidine", 512),
    ("Isoleucine", 503),
    ("Leucine", 504),
    ("Lysine", 505),
    ("Methionine", 506),
    ("Phenylalanine", 508),
    ("Threonine", 502),
    ("Tryptophan", 501),
    ("Valine", 510),
    // Fatty acids (g)
    ("Alpha-Linolenic Acid", 851),
    ("Linoleic Acid", 675),
    ("EPA", 629),
    ("DHA", 621),
    // Vitamins
    ("Vitamin A", 320),
    ("Vitamin B1", 404),
    ("Vitamin B2", 405),
    ("Vitamin B3", 406),
    ("Vitamin B5", 410),
    ("Vitamin B6", 415),
    ("Vitamin B9", 417),
    ("Vitamin B12", 418),
    ("Vitamin C", 401),
    ("Vitamin D", 324),
    ("Vitamin E", 323),
    ("Vitamin K", 430),
    ("Choline", 421),
];
