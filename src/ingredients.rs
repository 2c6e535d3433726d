//! Ingredient Extraction
//!
//! The language model that turns a free-text meal description into an
//! ingredient list lives behind [`IngredientExtractor`]. This module only
//! post-processes its bullet-list reply.

use anyhow::Result;
use rustc_hash::FxHashSet;

/// Characters stripped from both ends of a reply line
const BULLET_CHARS: &[char] = &['-', '•', '*', ',', '.'];

/// Source of ingredient names for a meal description
pub trait IngredientExtractor: Send + Sync {
    fn extract(&self, description: &str) -> Result<Vec<String>>;
}

/// Split an extractor reply into lower-cased ingredient names
///
/// "- Chicken breast.\n• Rice\n\n" → ["chicken breast", "rice"]
pub fn parse_ingredient_reply(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim().trim_matches(BULLET_CHARS).trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Trim entries and drop blanks and repeats, keeping first occurrences
pub fn clean_ingredient_list(ingredients: &[String]) -> Vec<String> {
    let mut seen = FxHashSet::default();

    ingredients
        .iter()
        .map(|ingredient| ingredient.trim())
        .filter(|ingredient| !ingredient.is_empty())
        .filter(|ingredient| seen.insert(*ingredient))
        .map(str::to_string)
        .collect()
}
