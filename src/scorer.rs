//! Nutrient Scorer - Main coordinator for scoring meals
//!
//! Runs the full pipeline for one meal:
//! percentages → capped totals → deficiencies → food suggestions.
//! Includes both sequential and parallel (Rayon) batch scoring.
//!
//! The reference table and the catalog cache are injected and shared behind
//! `Arc`, so one scorer serves any number of threads.

use crate::catalog_cache::CatalogCache;
use crate::config::ScorerConfig;
use crate::data::FoodCatalog;
use crate::error::CatalogError;
use crate::ingredients::{clean_ingredient_list, IngredientExtractor};
use crate::lookup::{fetch_nutrient_data, NutrientLookup};
use crate::nutrients::{
    aggregate_totals, calculate_ingredient_percentages, calculate_percentages,
    detect_deficiencies, merge_into_totals, IngredientNutrients, IngredientPercentages,
    NutrientData, PercentageMap, TotalsUpdate,
};
use crate::recommender::Recommendation;
use crate::reference::NutrientReferenceTable;
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;

/// Main meal scorer
pub struct NutrientScorer {
    reference: Arc<NutrientReferenceTable>,
    catalog: Arc<CatalogCache>,
    top_n: usize,
}

/// Meal score result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealReport {
    pub ingredients: Vec<String>,
    /// Per-ingredient percentages of RDA (uncapped)
    pub nutrients: IngredientPercentages,
    /// Meal totals, capped at 100
    pub totals: PercentageMap,
    /// Deficient nutrients in reference-table order
    pub missing_nutrients: Vec<String>,
    /// Suggested food descriptions, best first
    pub suggestions: Vec<String>,
    /// Scores behind `suggestions`
    #[serde(skip)]
    pub recommendations: Vec<Recommendation>,
}

impl NutrientScorer {
    pub fn new(
        reference: Arc<NutrientReferenceTable>,
        catalog: Arc<CatalogCache>,
        top_n: usize,
    ) -> Self {
        Self { reference, catalog, top_n }
    }

    /// Initialize scorer from configuration, loading the catalog up front
    pub fn from_config(config: &ScorerConfig) -> Result<Self> {
        tracing::info!("Initializing Nutrient Scorer...");

        let reference = match &config.reference_table_path {
            Some(path) => NutrientReferenceTable::load(path)?,
            None => NutrientReferenceTable::standard(),
        };

        let catalog = CatalogCache::new(&config.catalog_path);
        catalog
            .get_or_load()
            .with_context(|| format!("Error loading food data: {:?}", config.catalog_path))?;

        tracing::info!("Nutrient Scorer initialized:");
        tracing::info!("  Reference nutrients: {}", reference.len());
        tracing::info!("  Top N: {}", config.top_n);

        Ok(Self::new(Arc::new(reference), Arc::new(catalog), config.top_n))
    }

    pub fn reference(&self) -> &NutrientReferenceTable {
        &self.reference
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Score one meal from per-ingredient nutrient amounts
    pub fn score_meal(&self, nutrient_data: &NutrientData) -> Result<MealReport, CatalogError> {
        let catalog = self.catalog.get_or_load()?;
        let ingredients = nutrient_data.keys().cloned().collect();
        Ok(self.build_report(&catalog, ingredients, nutrient_data))
    }

    /// Score many meals in parallel; output order matches input order
    pub fn score_meals_parallel(
        &self,
        meals: &[NutrientData],
    ) -> Result<Vec<MealReport>, CatalogError> {
        let catalog = self.catalog.get_or_load()?;

        Ok(meals
            .par_iter()
            .map(|meal| {
                let ingredients = meal.keys().cloned().collect();
                self.build_report(&catalog, ingredients, meal)
            })
            .collect())
    }

    /// Full flow for a free-text description: extract, look up, score
    pub fn analyze_description(
        &self,
        extractor: &dyn IngredientExtractor,
        lookup: &dyn NutrientLookup,
        description: &str,
    ) -> Result<MealReport> {
        if description.trim().is_empty() {
            anyhow::bail!("Food description is required");
        }

        let ingredients = extractor
            .extract(description)
            .with_context(|| "Error extracting ingredients")?;
        let ingredients = clean_ingredient_list(&ingredients);

        let catalog = self
            .catalog
            .get_or_load()
            .with_context(|| "Error loading food data")?;

        let nutrient_data = fetch_nutrient_data(lookup, &ingredients)?;

        Ok(self.build_report(&catalog, ingredients, &nutrient_data))
    }

    /// Add one food to a meal's current totals
    pub fn add_food(&self, current: &PercentageMap, food: &IngredientNutrients) -> TotalsUpdate {
        let percentages = calculate_ingredient_percentages(food, &self.reference);
        merge_into_totals(current, &percentages)
    }

    /// Look up a food by name and add it to a meal's current totals
    pub fn add_food_by_description(
        &self,
        lookup: &dyn NutrientLookup,
        description: &str,
        current: &PercentageMap,
    ) -> Result<TotalsUpdate> {
        let description = description.trim();
        if description.is_empty() {
            anyhow::bail!("Food description is required");
        }

        let mut nutrient_data = fetch_nutrient_data(lookup, &[description.to_string()])?;
        let food = nutrient_data.remove(description).unwrap_or_default();

        Ok(self.add_food(current, &food))
    }

    fn build_report(
        &self,
        catalog: &FoodCatalog,
        ingredients: Vec<String>,
        nutrient_data: &NutrientData,
    ) -> MealReport {
        let nutrients = calculate_percentages(nutrient_data, &self.reference);
        let totals = aggregate_totals(&nutrients);
        let missing_nutrients = detect_deficiencies(&totals, &self.reference);
        let recommendations = catalog.rank(&missing_nutrients, self.top_n);
        let suggestions = recommendations
            .iter()
            .map(|rec| rec.description.clone())
            .collect();

        tracing::info!(
            "Scored meal with {} ingredients: {} deficiencies, {} suggestions",
            ingredients.len(),
            missing_nutrients.len(),
            recommendations.len()
        );

        MealReport {
            ingredients,
            nutrients,
            totals,
            missing_nutrients,
            suggestions,
            recommendations,
        }
    }
}
