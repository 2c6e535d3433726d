//! Utility modules for nutrient scoring
//!
//! Contains shared functionality used across the pipeline:
//! - Units: Conversion of nutrient amounts to milligrams
//! - Similarity: Nutrient vectors and cosine similarity

pub mod units;
pub mod similarity;

// Re-export commonly used types
pub use units::{Unit, normalize_to_mg, IU_TO_MICROGRAMS};
pub use similarity::{cosine_similarity, deficiency_vector, food_vector};
