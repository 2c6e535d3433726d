//! Food Recommender
//!
//! Ranks catalog foods by how well their nutrient profile lines up with the
//! deficiency pattern of a meal.
//!
//! Algorithm:
//! 1. Binary deficiency vector over the catalog's nutrient vocabulary
//! 2. Food vector of raw amounts over the same vocabulary
//! 3. Cosine similarity between the two (0.0 for zero-magnitude vectors)
//! 4. Drop foods with similarity ≤ 0
//! 5. Sort by similarity descending; ties keep catalog order
//! 6. Skip exact duplicate descriptions and repeated primary identifiers
//!    ("Chicken, raw" and "Chicken, cooked" share "Chicken")
//! 7. Stop after `top_n` accepted foods
//!
//! Scoring runs in parallel over the catalog with Rayon.

use crate::data::{FoodCatalog, FoodItem};
use crate::utils::{cosine_similarity, deficiency_vector, food_vector};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde::Serialize;

/// A ranked food suggestion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub description: String,
    pub similarity: f64,
    /// Raw amount of each deficient nutrient in this food, in deficiency order
    pub nutrients: Vec<(String, f64)>,
}

/// Scored candidate, before dedup
struct Candidate<'a> {
    index: usize,
    food: &'a FoodItem,
    similarity: f64,
}

/// Rank foods against a deficiency list and return the top `top_n`
///
/// Empty `foods`, empty `deficiencies` or `top_n == 0` give an empty result.
pub fn rank_foods(
    foods: &[FoodItem],
    vocabulary: &[String],
    deficiencies: &[String],
    top_n: usize,
) -> Vec<Recommendation> {
    if foods.is_empty() || deficiencies.is_empty() || top_n == 0 {
        return Vec::new();
    }

    let target = deficiency_vector(vocabulary, deficiencies);

    let mut candidates: Vec<Candidate> = foods
        .par_iter()
        .enumerate()
        .filter_map(|(index, food)| {
            let vector = food_vector(vocabulary, &food.nutrients);
            let similarity = cosine_similarity(&vector, &target);
            (similarity > 0.0).then_some(Candidate { index, food, similarity })
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.similarity
            .total_cmp(&a.similarity)
            .then(a.index.cmp(&b.index))
    });

    let ranked = dedup_top_n(candidates, top_n);

    tracing::debug!(
        "Ranked {} foods against {} deficiencies → {} suggestions",
        foods.len(),
        deficiencies.len(),
        ranked.len()
    );

    ranked
        .into_iter()
        .map(|candidate| Recommendation {
            description: candidate.food.description.clone(),
            similarity: candidate.similarity,
            nutrients: deficiencies
                .iter()
                .map(|name| {
                    let amount = candidate.food.nutrients.get(name).copied().unwrap_or(0.0);
                    (name.clone(), amount)
                })
                .collect(),
        })
        .collect()
}

/// Descriptions of the top `top_n` recommended foods, best first
pub fn recommend_foods(
    foods: &[FoodItem],
    vocabulary: &[String],
    deficiencies: &[String],
    top_n: usize,
) -> Vec<String> {
    rank_foods(foods, vocabulary, deficiencies, top_n)
        .into_iter()
        .map(|rec| rec.description)
        .collect()
}

/// Substring before the first comma, trimmed
pub fn primary_identifier(description: &str) -> &str {
    description.split(',').next().unwrap_or(description).trim()
}

/// Walk sorted candidates, keeping the first food per description and per
/// primary identifier
fn dedup_top_n(candidates: Vec<Candidate<'_>>, top_n: usize) -> Vec<Candidate<'_>> {
    let mut seen_descriptions: FxHashSet<&str> = FxHashSet::default();
    let mut seen_identifiers: FxHashSet<&str> = FxHashSet::default();
    let mut accepted = Vec::with_capacity(top_n.min(candidates.len()));

    for candidate in candidates {
        if accepted.len() >= top_n {
            break;
        }

        let food = candidate.food;
        let description = food.description.as_str();
        if seen_descriptions.contains(description) {
            continue;
        }

        let identifier = primary_identifier(description);
        if seen_identifiers.contains(identifier) {
            continue;
        }

        seen_descriptions.insert(description);
        seen_identifiers.insert(identifier);
        accepted.push(candidate);
    }

    accepted
}

impl FoodCatalog {
    /// Rank this catalog's foods against `deficiencies`
    pub fn rank(&self, deficiencies: &[String], top_n: usize) -> Vec<Recommendation> {
        rank_foods(self.foods(), self.vocabulary(), deficiencies, top_n)
    }

    /// Descriptions of the best foods for `deficiencies`
    pub fn recommend(&self, deficiencies: &[String], top_n: usize) -> Vec<String> {
        recommend_foods(self.foods(), self.vocabulary(), deficiencies, top_n)
    }
}
