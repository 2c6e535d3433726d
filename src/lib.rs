//! Nutrient Scorer Rust Implementation
//!
//! Normalizes per-ingredient nutrient amounts against daily reference intakes,
//! aggregates them into capped meal totals, flags deficiencies and recommends
//! catalog foods that cover them.
//!
//! Module layout:
//! - `utils/`: Unit conversion and vector similarity
//! - `reference`: Reference daily intake table
//! - `nutrients/`: Percentages, capped totals, deficiency detection
//! - `data`: Food catalog loading with Polars
//! - `catalog_cache`: Load-once shared catalog
//! - `recommender`: Cosine-similarity food ranking with dedup
//! - `ingredients`, `lookup`: Extractor and nutrition-database seams
//! - `scorer`: Pipeline coordinator

pub mod utils;
pub mod error;
pub mod config;
pub mod reference;
pub mod nutrients;
pub mod data;
pub mod catalog_cache;
pub mod recommender;
pub mod ingredients;
pub mod lookup;
pub mod scorer;

// Re-export commonly used types
pub use utils::{Unit, normalize_to_mg, cosine_similarity};
pub use error::{CatalogError, ReferenceError};
pub use config::ScorerConfig;
pub use reference::{NutrientReference, NutrientReferenceTable};
pub use nutrients::{
    NutrientAmount, IngredientNutrients, NutrientData, PercentageMap, IngredientPercentages,
    TotalsUpdate, calculate_percentages, aggregate_totals, detect_deficiencies, merge_into_totals,
};
pub use data::{FoodCatalog, FoodItem};
pub use catalog_cache::CatalogCache;
pub use recommender::{Recommendation, rank_foods, recommend_foods};
pub use ingredients::{IngredientExtractor, parse_ingredient_reply, clean_ingredient_list};
pub use lookup::{AttributeMapping, LookupResponse, NutrientLookup, fetch_nutrient_data};
pub use scorer::{MealReport, NutrientScorer};
